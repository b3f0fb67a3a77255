//! Leptos component wrapping the activity chart canvas.
//!
//! The component binds a chart backend to its canvas element once the node
//! mounts, then rebuilds the chart whenever the input series changes. Mouse
//! handlers drive the hover tooltip through nearest-index matching.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::backend::CanvasBackend;
use super::state::SeriesChart;
use super::types::SeriesSet;

/// Renders the done/error activity line chart on a canvas element.
///
/// Pass the series via the reactive `data` signal. Every change destroys
/// the live chart instance and creates a new one from the fresh data;
/// unmounting releases the instance. The component sizes itself to its
/// parent container unless explicit `width`/`height` are given.
#[component]
pub fn ActivityChart(
	#[prop(into)] data: Signal<SeriesSet>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let chart: Rc<RefCell<Option<SeriesChart<CanvasBackend>>>> = Rc::new(RefCell::new(None));

	let chart_render = chart.clone();
	Effect::new(move |_| {
		let series = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let mut slot = chart_render.borrow_mut();
		if slot.is_none() {
			let w = width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.filter(|w| *w > 0.0)
					.unwrap_or(480.0)
			});
			let h = height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.filter(|h| *h > 0.0)
					.unwrap_or(160.0)
			});
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);

			match CanvasBackend::new(&canvas) {
				Ok(backend) => *slot = Some(SeriesChart::new(backend)),
				Err(e) => {
					warn!("activity-chart: {e}");
					return;
				}
			}
		}

		if let Some(chart) = slot.as_mut() {
			if let Err(e) = chart.update(&series) {
				warn!("activity-chart: {e}");
			}
		}
	});

	let chart_hover = chart.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let x = ev.client_x() as f64 - rect.left();

		if let Some(chart) = chart_hover.borrow_mut().as_mut() {
			chart.backend_mut().hover_at(x);
		}
	};

	let chart_leave = chart.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(chart) = chart_leave.borrow_mut().as_mut() {
			chart.backend_mut().clear_hover();
		}
	};

	// Unmounting drops the handlers and with them the last reference to
	// the adapter; its Drop releases the live instance.
	view! {
		<canvas
			node_ref=canvas_ref
			class="activity-chart-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
