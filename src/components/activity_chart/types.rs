//! Input data structures for the activity chart.

use std::fmt;

use serde::Deserialize;

use crate::error::ConfigurationError;

/// A label on the chart's x axis. Hosts send either numbers or strings
/// (typically day offsets or formatted dates), so both are accepted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AxisLabel {
	/// Numeric label, e.g. a day offset.
	Number(f64),
	/// Textual label, e.g. a formatted date.
	Text(String),
}

impl fmt::Display for AxisLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AxisLabel::Number(n) if n.fract() == 0.0 && n.is_finite() => {
				write!(f, "{}", *n as i64)
			}
			AxisLabel::Number(n) => write!(f, "{n}"),
			AxisLabel::Text(s) => write!(f, "{s}"),
		}
	}
}

/// A single plotted point, supplied externally per render.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Point {
	/// Position on the x axis.
	pub x: AxisLabel,
	/// Plotted value.
	pub y: f64,
	/// Display name shown in the hover tooltip.
	pub name: String,
}

/// The two named series the chart plots against a shared axis.
///
/// Axis labels are derived from `done` only. The `error` series is assumed to
/// be index-aligned with `done`; if its x values diverge, the axis still
/// reflects `done` and `error` points are positioned by index. That mirrors
/// how the hosting application has always fed this widget and is kept as-is.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SeriesSet {
	/// Completed activity counts.
	pub done: Vec<Point>,
	/// Failed activity counts.
	pub error: Vec<Point>,
}

impl SeriesSet {
	/// Parse a series set from the host's JSON payload.
	/// A payload missing `done` or `error` fails fast.
	pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
		serde_json::from_str(json).map_err(ConfigurationError::InvalidSeries)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_numeric_and_text_labels() {
		let set = SeriesSet::from_json(
			r#"{
				"done": [{"x": 1, "y": 2, "name": "DONE"}, {"x": "02 Feb", "y": 3, "name": "DONE"}],
				"error": [{"x": 1, "y": 1, "name": "ERROR"}]
			}"#,
		)
		.unwrap();

		assert_eq!(set.done.len(), 2);
		assert_eq!(set.error.len(), 1);
		assert_eq!(set.done[0].x, AxisLabel::Number(1.0));
		assert_eq!(set.done[1].x, AxisLabel::Text("02 Feb".into()));
	}

	#[test]
	fn test_missing_series_is_rejected() {
		let result = SeriesSet::from_json(r#"{"done": []}"#);
		assert!(matches!(
			result,
			Err(crate::error::ConfigurationError::InvalidSeries(_))
		));
	}

	#[test]
	fn test_label_display() {
		assert_eq!(AxisLabel::Number(3.0).to_string(), "3");
		assert_eq!(AxisLabel::Number(2.5).to_string(), "2.5");
		assert_eq!(AxisLabel::Text("Mar".into()).to_string(), "Mar");
	}
}
