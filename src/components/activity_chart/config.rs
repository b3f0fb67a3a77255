//! Chart configuration assembly.
//!
//! [`build_config`] is the pure mapping from a [`SeriesSet`] to the full
//! description of what gets drawn: axis labels, the two datasets, and the
//! fixed display options. It performs no sorting, deduplication, or
//! validation beyond what the types already guarantee.

use super::theme::Color;
use super::types::{AxisLabel, Point, SeriesSet};

/// Stroke color of the "Done" series.
pub const DONE_COLOR: Color = Color::rgb(0x4c, 0xaf, 0x50);
/// Stroke color of the "Error" series.
pub const ERROR_COLOR: Color = Color::rgb(0xf4, 0x43, 0x36);

/// Alpha applied to a series color when filling the area under its line.
const FILL_ALPHA: f64 = 0.5;

/// One plotted series with its visual attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
	/// Series name. Not rendered (the legend is hidden) but kept on the
	/// config so backends can expose it, e.g. for accessibility text.
	pub label: &'static str,
	/// Line stroke color.
	pub border_color: Color,
	/// Area fill color.
	pub background_color: Color,
	/// Line stroke width in pixels.
	pub border_width: f64,
	/// Whether the area between the line and the zero baseline is filled.
	pub fill: bool,
	/// The raw points, unmodified from the input series.
	pub points: Vec<Point>,
}

/// Hover tooltip behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipOptions {
	/// When false, the tooltip activates on the nearest index along the x
	/// axis instead of requiring the pointer to intersect a point.
	pub intersect: bool,
	/// Size of the tooltip caret. Zero disables the caret.
	pub caret_size: f64,
	/// Tooltip border width in pixels.
	pub border_width: f64,
}

/// Fixed display options. These are presentation defaults of the widget,
/// not inputs: every instance renders the same way.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
	/// Whether the legend is drawn.
	pub legend_display: bool,
	/// Padding around the plot area on all sides, in pixels.
	pub padding: f64,
	/// Whether the y axis is drawn.
	pub y_axis_display: bool,
	/// Whether the y scale starts at zero rather than the series minimum.
	pub begin_at_zero: bool,
	/// Maximum rotation of x tick labels, in degrees.
	pub x_tick_max_rotation: f64,
	/// Whether the chart preserves the canvas aspect ratio when resizing.
	pub maintain_aspect_ratio: bool,
	/// Bezier tension of line segments. Zero draws straight segments.
	pub line_tension: f64,
	/// Hover tooltip behavior.
	pub tooltip: TooltipOptions,
}

impl Default for ChartOptions {
	fn default() -> Self {
		Self {
			legend_display: false,
			padding: 10.0,
			y_axis_display: false,
			begin_at_zero: true,
			x_tick_max_rotation: 0.0,
			maintain_aspect_ratio: false,
			line_tension: 0.0,
			tooltip: TooltipOptions {
				intersect: false,
				caret_size: 0.0,
				border_width: 2.0,
			},
		}
	}
}

/// Everything a backend needs to draw one chart instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
	/// X axis labels, taken from the `done` series in input order.
	pub labels: Vec<AxisLabel>,
	/// The "Done" and "Error" datasets, in that order.
	pub datasets: Vec<Dataset>,
	/// Fixed display options.
	pub options: ChartOptions,
}

/// Build the chart configuration for a series set.
///
/// Labels come from `done` only; see [`SeriesSet`] for the index-alignment
/// assumption on `error`.
pub fn build_config(series: &SeriesSet) -> ChartConfig {
	ChartConfig {
		labels: series.done.iter().map(|pt| pt.x.clone()).collect(),
		datasets: vec![
			Dataset {
				label: "Done",
				border_color: DONE_COLOR,
				background_color: DONE_COLOR.with_alpha(FILL_ALPHA),
				border_width: 2.0,
				fill: true,
				points: series.done.clone(),
			},
			Dataset {
				label: "Error",
				border_color: ERROR_COLOR,
				background_color: ERROR_COLOR.with_alpha(FILL_ALPHA),
				border_width: 2.0,
				fill: true,
				points: series.error.clone(),
			},
		],
		options: ChartOptions::default(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn point(x: f64, y: f64) -> Point {
		Point {
			x: AxisLabel::Number(x),
			y,
			name: "DONE".into(),
		}
	}

	fn series(done: usize, error: usize) -> SeriesSet {
		SeriesSet {
			done: (0..done).map(|i| point(i as f64, i as f64)).collect(),
			error: (0..error).map(|i| point(i as f64, 1.0)).collect(),
		}
	}

	#[test]
	fn test_labels_come_from_done_in_order() {
		let config = build_config(&series(4, 2));
		assert_eq!(config.labels.len(), 4);
		for (i, label) in config.labels.iter().enumerate() {
			assert_eq!(*label, AxisLabel::Number(i as f64));
		}
	}

	#[test]
	fn test_two_datasets_with_raw_points() {
		let set = series(3, 5);
		let config = build_config(&set);

		assert_eq!(config.datasets.len(), 2);
		assert_eq!(config.datasets[0].label, "Done");
		assert_eq!(config.datasets[1].label, "Error");
		assert_eq!(config.datasets[0].points, set.done);
		assert_eq!(config.datasets[1].points, set.error);
	}

	#[test]
	fn test_divergent_error_axis_still_uses_done() {
		// The error series carries its own x values; the axis ignores them.
		let set = SeriesSet {
			done: vec![point(1.0, 2.0), point(2.0, 2.0)],
			error: vec![point(7.0, 3.0), point(9.0, 1.0)],
		};
		let config = build_config(&set);
		assert_eq!(
			config.labels,
			vec![AxisLabel::Number(1.0), AxisLabel::Number(2.0)]
		);
		assert_eq!(config.datasets[1].points[0].x, AxisLabel::Number(7.0));
	}

	#[test]
	fn test_fixed_presentation_values() {
		let config = build_config(&series(1, 1));

		for ds in &config.datasets {
			assert_eq!(ds.border_width, 2.0);
			assert!(ds.fill);
			assert_eq!(ds.background_color.a, 0.5);
		}
		assert_eq!(config.datasets[0].border_color, DONE_COLOR);
		assert_eq!(config.datasets[1].border_color, ERROR_COLOR);

		let opts = &config.options;
		assert!(!opts.legend_display);
		assert!(!opts.y_axis_display);
		assert!(opts.begin_at_zero);
		assert_eq!(opts.x_tick_max_rotation, 0.0);
		assert!(!opts.maintain_aspect_ratio);
		assert_eq!(opts.line_tension, 0.0);
		assert!(!opts.tooltip.intersect);
	}

	#[test]
	fn test_empty_series_builds_empty_config() {
		let config = build_config(&SeriesSet::default());
		assert!(config.labels.is_empty());
		assert_eq!(config.datasets.len(), 2);
		assert!(config.datasets[0].points.is_empty());
	}
}
