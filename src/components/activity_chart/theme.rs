//! Visual styling for the activity chart.
//!
//! Presentation values are fixed: the widget is meant to look identical on
//! every form it is embedded in, so nothing here is exposed as a prop.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// X axis tick styling.
#[derive(Clone, Debug)]
pub struct AxisStyle {
	/// Tick label color.
	pub label_color: Color,
	/// Tick label font.
	pub label_font: &'static str,
	/// Height reserved below the plot for tick labels, in pixels.
	pub label_band: f64,
	/// Minimum horizontal space per tick label before labels are skipped.
	pub min_label_spacing: f64,
}

/// Hover tooltip styling.
#[derive(Clone, Debug)]
pub struct TooltipStyle {
	/// Tooltip background fill.
	pub background: Color,
	/// Tooltip text color.
	pub text_color: Color,
	/// Tooltip border color.
	pub border_color: Color,
	/// Tooltip text font.
	pub font: &'static str,
	/// Line height of a tooltip row, in pixels.
	pub line_height: f64,
	/// Inner padding of the tooltip box, in pixels.
	pub padding: f64,
	/// Radius of the point markers drawn at the hovered index.
	pub marker_radius: f64,
	/// Color of the dashed vertical guide at the hovered index.
	pub guide_color: Color,
	/// Dash pattern (dash, gap) of the vertical guide, in pixels.
	pub guide_dash: (f64, f64),
}

/// Complete fixed styling for the chart surface.
#[derive(Clone, Debug)]
pub struct ChartTheme {
	pub axis: AxisStyle,
	pub tooltip: TooltipStyle,
}

impl Default for ChartTheme {
	fn default() -> Self {
		Self {
			axis: AxisStyle {
				label_color: Color::rgb(102, 102, 102),
				label_font: "10px sans-serif",
				label_band: 18.0,
				min_label_spacing: 40.0,
			},
			tooltip: TooltipStyle {
				background: Color::rgba(0, 0, 0, 0.75),
				text_color: Color::rgb(255, 255, 255),
				border_color: Color::rgba(255, 255, 255, 0.4),
				font: "11px sans-serif",
				line_height: 14.0,
				padding: 6.0,
				marker_radius: 3.0,
				guide_color: Color::rgba(102, 102, 102, 0.6),
				guide_dash: (4.0, 4.0),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_color_css_formats() {
		assert_eq!(Color::rgb(76, 175, 80).to_css(), "#4caf50");
		assert_eq!(
			Color::rgb(244, 67, 54).with_alpha(0.5).to_css(),
			"rgba(244, 67, 54, 0.5)"
		);
	}
}
