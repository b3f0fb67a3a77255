//! HTML canvas implementation of the chart backend.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::ChartConfig;
use super::render::{self, PlotArea};
use super::state::{ChartBackend, ChartHandle};
use super::theme::ChartTheme;
use crate::error::RenderError;

/// Draws chart instances onto one HTML canvas.
///
/// Behaves like a canvas charting library: creating an instance draws it
/// and retains its config for hover redraws, destroying it clears the
/// surface. The lifecycle adapter guarantees at most one live instance.
pub struct CanvasBackend {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
	theme: ChartTheme,
	live: Option<LiveInstance>,
	next_id: u64,
}

struct LiveInstance {
	id: u64,
	config: ChartConfig,
	hover: Option<usize>,
}

impl CanvasBackend {
	/// Bind to a canvas. Fails when no 2d context can be obtained.
	pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, RenderError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|_| RenderError::ContextUnavailable)?
			.ok_or(RenderError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| RenderError::ContextUnavailable)?;

		Ok(Self {
			ctx,
			width: canvas.width() as f64,
			height: canvas.height() as f64,
			theme: ChartTheme::default(),
			live: None,
			next_id: 0,
		})
	}

	/// Move the hover cursor to canvas x coordinate `x`, redrawing when the
	/// matched axis index changes.
	pub fn hover_at(&mut self, x: f64) {
		let idx = {
			let Some(live) = self.live.as_ref() else {
				return;
			};
			let area = PlotArea::new(self.width, self.height, &live.config.options, &self.theme.axis);
			area.nearest_index(live.config.labels.len(), x)
		};
		self.set_hover(idx);
	}

	/// Clear the hover cursor, e.g. when the pointer leaves the canvas.
	pub fn clear_hover(&mut self) {
		self.set_hover(None);
	}

	fn set_hover(&mut self, idx: Option<usize>) {
		let Some(live) = self.live.as_mut() else {
			return;
		};
		if live.hover == idx {
			return;
		}
		live.hover = idx;
		render::draw(
			&self.ctx,
			&live.config,
			&self.theme,
			self.width,
			self.height,
			live.hover,
		);
	}
}

impl ChartBackend for CanvasBackend {
	fn create(&mut self, config: &ChartConfig) -> Result<ChartHandle, RenderError> {
		self.next_id += 1;
		let id = self.next_id;
		render::draw(&self.ctx, config, &self.theme, self.width, self.height, None);
		self.live = Some(LiveInstance {
			id,
			config: config.clone(),
			hover: None,
		});
		Ok(ChartHandle::new(id))
	}

	fn destroy(&mut self, handle: ChartHandle) {
		if self.live.as_ref().is_some_and(|live| live.id == handle.id()) {
			self.live = None;
			self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
		}
	}
}
