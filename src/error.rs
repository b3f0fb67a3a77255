//! Error types surfaced by the widget cores.
//!
//! The cores never catch and suppress failures. Everything here propagates to
//! the caller; the component layer is the boundary where errors become log
//! output for the hosting page.

use thiserror::Error;

/// Failure to create a chart instance on its drawing surface.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The canvas exists but no 2d rendering context could be obtained.
	#[error("drawing surface has no 2d rendering context")]
	ContextUnavailable,
	/// The backend refused to create a chart instance.
	#[error("chart backend rejected creation: {0}")]
	CreationRejected(String),
}

/// Malformed host-supplied input data.
#[derive(Debug, Error)]
pub enum ConfigurationError {
	/// The activity series payload is not a valid series set.
	#[error("invalid activity series data: {0}")]
	InvalidSeries(#[source] serde_json::Error),
	/// The step payload is not a valid step list.
	#[error("invalid step data: {0}")]
	InvalidSteps(#[source] serde_json::Error),
}
