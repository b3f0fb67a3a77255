//! Canvas drawing for the activity chart.
//!
//! Layout math (plot area, point positions, nearest-index lookup) is kept
//! separate from the draw calls so it can be exercised without a canvas.
//! Drawing happens in passes: filled areas and lines per dataset, x tick
//! labels, then the hover guide, markers, and tooltip on top.

use web_sys::CanvasRenderingContext2d;

use super::config::{ChartConfig, ChartOptions, Dataset};
use super::theme::{AxisStyle, ChartTheme};

/// The rectangle the series are plotted into, inside the canvas padding
/// and above the x tick label band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl PlotArea {
	/// Compute the plot area for a canvas of the given size.
	pub fn new(canvas_width: f64, canvas_height: f64, options: &ChartOptions, axis: &AxisStyle) -> Self {
		let pad = options.padding;
		Self {
			left: pad,
			top: pad,
			width: (canvas_width - 2.0 * pad).max(0.0),
			height: (canvas_height - 2.0 * pad - axis.label_band).max(0.0),
		}
	}

	/// Y coordinate of the zero baseline.
	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}

	/// X coordinate of index `idx` on an axis of `count` labels.
	/// Labels are evenly spaced across the width; a single label sits
	/// in the middle.
	pub fn x_at(&self, count: usize, idx: usize) -> f64 {
		if count <= 1 {
			return self.left + self.width / 2.0;
		}
		self.left + idx as f64 * (self.width / (count - 1) as f64)
	}

	/// Y coordinate of value `y` on a zero-based scale up to `max_y`.
	pub fn y_at(&self, max_y: f64, y: f64) -> f64 {
		if max_y <= 0.0 {
			return self.bottom();
		}
		self.bottom() - (y / max_y) * self.height
	}

	/// Index of the label nearest to x coordinate `x`.
	///
	/// Matching does not require intersecting a point: any position maps
	/// to the closest index, clamped to the axis range.
	pub fn nearest_index(&self, count: usize, x: f64) -> Option<usize> {
		if count == 0 {
			return None;
		}
		if count == 1 || self.width <= 0.0 {
			return Some(0);
		}
		let step = self.width / (count - 1) as f64;
		let idx = ((x - self.left) / step).round();
		Some(idx.clamp(0.0, (count - 1) as f64) as usize)
	}
}

/// Largest y value across all datasets, floored at zero.
pub fn max_value(config: &ChartConfig) -> f64 {
	config
		.datasets
		.iter()
		.flat_map(|ds| ds.points.iter())
		.map(|pt| pt.y)
		.fold(0.0, f64::max)
}

/// Draw the complete chart.
pub fn draw(
	ctx: &CanvasRenderingContext2d,
	config: &ChartConfig,
	theme: &ChartTheme,
	width: f64,
	height: f64,
	hover: Option<usize>,
) {
	ctx.clear_rect(0.0, 0.0, width, height);

	let area = PlotArea::new(width, height, &config.options, &theme.axis);
	let count = config.labels.len();
	let max_y = max_value(config);

	for ds in &config.datasets {
		draw_dataset(ctx, &area, ds, count, max_y);
	}
	draw_x_labels(ctx, &area, config, &theme.axis);
	if let Some(idx) = hover {
		draw_hover(ctx, &area, config, theme, idx, count, max_y);
	}
}

/// Screen positions of a dataset's points. Points whose index falls beyond
/// the label axis are clipped, matching how the axis is derived from the
/// `done` series only.
fn dataset_positions(area: &PlotArea, ds: &Dataset, count: usize, max_y: f64) -> Vec<(f64, f64)> {
	ds.points
		.iter()
		.take(count)
		.enumerate()
		.map(|(i, pt)| (area.x_at(count, i), area.y_at(max_y, pt.y)))
		.collect()
}

fn draw_dataset(
	ctx: &CanvasRenderingContext2d,
	area: &PlotArea,
	ds: &Dataset,
	count: usize,
	max_y: f64,
) {
	let positions = dataset_positions(area, ds, count, max_y);
	let Some(&(first_x, first_y)) = positions.first() else {
		return;
	};

	if positions.len() == 1 {
		// A one-point line has no extent; show the point itself.
		ctx.begin_path();
		let _ = ctx.arc(first_x, first_y, ds.border_width * 1.5, 0.0, std::f64::consts::TAU);
		ctx.set_fill_style_str(&ds.border_color.to_css());
		ctx.fill();
		return;
	}

	if ds.fill {
		ctx.begin_path();
		ctx.move_to(first_x, first_y);
		for &(x, y) in &positions[1..] {
			ctx.line_to(x, y);
		}
		let (last_x, _) = positions[positions.len() - 1];
		ctx.line_to(last_x, area.bottom());
		ctx.line_to(first_x, area.bottom());
		ctx.close_path();
		ctx.set_fill_style_str(&ds.background_color.to_css());
		ctx.fill();
	}

	ctx.begin_path();
	ctx.move_to(first_x, first_y);
	for &(x, y) in &positions[1..] {
		ctx.line_to(x, y);
	}
	ctx.set_stroke_style_str(&ds.border_color.to_css());
	ctx.set_line_width(ds.border_width);
	ctx.stroke();
}

fn draw_x_labels(
	ctx: &CanvasRenderingContext2d,
	area: &PlotArea,
	config: &ChartConfig,
	axis: &AxisStyle,
) {
	let count = config.labels.len();
	if count == 0 || area.width <= 0.0 {
		return;
	}

	// Unrotated labels need horizontal room; skip evenly when they don't fit.
	let fits = (area.width / axis.min_label_spacing).floor().max(1.0) as usize;
	let step = count.div_ceil(fits).max(1);

	ctx.set_font(axis.label_font);
	ctx.set_fill_style_str(&axis.label_color.to_css());
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	for (i, label) in config.labels.iter().enumerate() {
		if i % step != 0 {
			continue;
		}
		let _ = ctx.fill_text(&label.to_string(), area.x_at(count, i), area.bottom() + 4.0);
	}
}

fn draw_hover(
	ctx: &CanvasRenderingContext2d,
	area: &PlotArea,
	config: &ChartConfig,
	theme: &ChartTheme,
	idx: usize,
	count: usize,
	max_y: f64,
) {
	if idx >= count {
		return;
	}
	let style = &theme.tooltip;
	let guide_x = area.x_at(count, idx);

	// Dashed vertical guide at the hovered index.
	ctx.begin_path();
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&style.guide_dash.0.into(),
		&style.guide_dash.1.into(),
	));
	ctx.move_to(guide_x, area.top);
	ctx.line_to(guide_x, area.bottom());
	ctx.set_stroke_style_str(&style.guide_color.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	// Point markers on every dataset that has a value at this index.
	let mut rows: Vec<String> = Vec::new();
	for ds in &config.datasets {
		let Some(pt) = ds.points.get(idx) else {
			continue;
		};
		let y = area.y_at(max_y, pt.y);
		ctx.begin_path();
		let _ = ctx.arc(guide_x, y, style.marker_radius, 0.0, std::f64::consts::TAU);
		ctx.set_fill_style_str(&ds.border_color.to_css());
		ctx.fill();
		rows.push(format!("{}: {}", pt.name, pt.y));
	}
	if rows.is_empty() {
		return;
	}

	// Tooltip box beside the guide, flipped left when it would overflow.
	let longest = rows.iter().map(String::len).max().unwrap_or(0) as f64;
	let box_w = longest * 6.0 + 2.0 * style.padding;
	let box_h = rows.len() as f64 * style.line_height + 2.0 * style.padding;
	let box_x = if guide_x + 8.0 + box_w > area.left + area.width {
		guide_x - 8.0 - box_w
	} else {
		guide_x + 8.0
	};
	let box_y = area.top + 4.0;

	ctx.set_fill_style_str(&style.background.to_css());
	ctx.fill_rect(box_x, box_y, box_w, box_h);
	ctx.set_stroke_style_str(&style.border_color.to_css());
	ctx.set_line_width(config.options.tooltip.border_width);
	ctx.stroke_rect(box_x, box_y, box_w, box_h);

	ctx.set_font(style.font);
	ctx.set_fill_style_str(&style.text_color.to_css());
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	for (i, row) in rows.iter().enumerate() {
		let _ = ctx.fill_text(
			row,
			box_x + style.padding,
			box_y + style.padding + i as f64 * style.line_height,
		);
	}
}
