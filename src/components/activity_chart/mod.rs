//! Activity chart widget.
//!
//! Plots two named series, "done" and "error", as a filled line chart on an
//! HTML canvas:
//! - Axis labels come from the `done` series, in input order
//! - Fixed presentation: hidden legend, hidden zero-based y axis, unrotated
//!   x ticks, nearest-index hover tooltip
//! - Explicit mount/update/release lifecycle with at most one live chart
//!   instance per surface
//!
//! # Example
//!
//! ```ignore
//! use flowboard::{ActivityChart, SeriesSet};
//!
//! let data = SeriesSet::from_json(payload)?;
//!
//! view! { <ActivityChart data=Signal::derive(move || data.clone()) /> }
//! ```

mod backend;
mod component;
mod config;
mod render;
mod state;
pub mod theme;
mod types;

pub use backend::CanvasBackend;
pub use component::ActivityChart;
pub use config::{ChartConfig, ChartOptions, Dataset, TooltipOptions, build_config};
pub use state::{ChartBackend, ChartHandle, SeriesChart};
pub use types::{AxisLabel, Point, SeriesSet};
