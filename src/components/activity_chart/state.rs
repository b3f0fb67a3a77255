//! Chart instance lifecycle.
//!
//! The hosting framework's implicit mount/render/destroy hooks are expressed
//! here as three explicit operations: [`SeriesChart::mount`],
//! [`SeriesChart::update`], and [`SeriesChart::release`]. The invariant they
//! maintain is that a surface carries at most one live chart instance at any
//! time; the previous instance is always destroyed before a new one is
//! created.

use super::config::{ChartConfig, build_config};
use super::types::SeriesSet;
use crate::error::RenderError;

/// Opaque reference to a live chart instance on a surface.
///
/// Handles are issued by a [`ChartBackend`] and consumed when the instance
/// is destroyed, so a released handle cannot be reused.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
	id: u64,
}

impl ChartHandle {
	/// Wrap a backend-issued instance id.
	pub fn new(id: u64) -> Self {
		Self { id }
	}

	/// The backend's id for this instance.
	pub fn id(&self) -> u64 {
		self.id
	}
}

/// The backing chart library, abstracted over its drawing surface.
///
/// The production implementation draws on an HTML canvas; tests substitute
/// an instance-counting stub.
pub trait ChartBackend {
	/// Create a live chart instance from `config` and issue its handle.
	fn create(&mut self, config: &ChartConfig) -> Result<ChartHandle, RenderError>;

	/// Destroy a live instance. Consumes the handle.
	fn destroy(&mut self, handle: ChartHandle);
}

/// Owns one chart instance on one surface and drives its lifecycle.
///
/// Holds no state beyond the backend and the current handle: the config is
/// rebuilt from the input series on every mount, so there is nothing to
/// diff against.
pub struct SeriesChart<B: ChartBackend> {
	backend: B,
	handle: Option<ChartHandle>,
}

impl<B: ChartBackend> SeriesChart<B> {
	/// Create an adapter for a surface. No chart exists until [`mount`].
	///
	/// [`mount`]: SeriesChart::mount
	pub fn new(backend: B) -> Self {
		Self {
			backend,
			handle: None,
		}
	}

	/// Build a config from `series` and create a chart instance from it.
	///
	/// Any live instance is released first, so the surface never carries
	/// two instances. On failure the error propagates unchanged and the
	/// adapter is left with no live handle.
	pub fn mount(&mut self, series: &SeriesSet) -> Result<&ChartHandle, RenderError> {
		self.release();
		let config = build_config(series);
		let handle = self.backend.create(&config)?;
		Ok(self.handle.insert(handle))
	}

	/// Replace the live instance with one built from the new series.
	///
	/// Always a full destroy-and-rebuild; there is no incremental update
	/// path. Calling this before any mount behaves like a mount.
	pub fn update(&mut self, series: &SeriesSet) -> Result<&ChartHandle, RenderError> {
		self.mount(series)
	}

	/// Destroy the live instance, if any. Calling this on an already
	/// released chart is a no-op.
	pub fn release(&mut self) {
		if let Some(handle) = self.handle.take() {
			self.backend.destroy(handle);
		}
	}

	/// The currently live handle, if mounted.
	pub fn handle(&self) -> Option<&ChartHandle> {
		self.handle.as_ref()
	}

	/// Access the backend, e.g. to drive hover redraws.
	pub fn backend_mut(&mut self) -> &mut B {
		&mut self.backend
	}
}

impl<B: ChartBackend> Drop for SeriesChart<B> {
	/// Unmounting the owner drops the adapter, which destroys the live
	/// instance with it.
	fn drop(&mut self) {
		self.release();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashSet;
	use std::rc::Rc;

	use super::*;
	use crate::components::activity_chart::types::{AxisLabel, Point};

	/// Counts live instances and remembers the labels of the last config
	/// it was asked to draw.
	#[derive(Default)]
	struct StubState {
		live: HashSet<u64>,
		next_id: u64,
		max_live: usize,
		last_labels: Vec<AxisLabel>,
		fail: bool,
	}

	#[derive(Clone, Default)]
	struct StubBackend(Rc<RefCell<StubState>>);

	impl ChartBackend for StubBackend {
		fn create(&mut self, config: &ChartConfig) -> Result<ChartHandle, RenderError> {
			let mut state = self.0.borrow_mut();
			if state.fail {
				return Err(RenderError::ContextUnavailable);
			}
			state.next_id += 1;
			let id = state.next_id;
			state.live.insert(id);
			state.max_live = state.max_live.max(state.live.len());
			state.last_labels = config.labels.clone();
			Ok(ChartHandle::new(id))
		}

		fn destroy(&mut self, handle: ChartHandle) {
			self.0.borrow_mut().live.remove(&handle.id());
		}
	}

	fn series_of(xs: &[f64]) -> SeriesSet {
		SeriesSet {
			done: xs
				.iter()
				.map(|&x| Point {
					x: AxisLabel::Number(x),
					y: 1.0,
					name: "DONE".into(),
				})
				.collect(),
			error: vec![],
		}
	}

	#[test]
	fn test_mount_release_mount_keeps_one_instance() {
		let backend = StubBackend::default();
		let state = backend.0.clone();
		let mut chart = SeriesChart::new(backend);

		chart.mount(&series_of(&[1.0])).unwrap();
		chart.release();
		chart.mount(&series_of(&[2.0])).unwrap();

		assert_eq!(state.borrow().live.len(), 1);
		assert_eq!(state.borrow().max_live, 1);
	}

	#[test]
	fn test_updates_leave_newest_instance_live() {
		let backend = StubBackend::default();
		let state = backend.0.clone();
		let mut chart = SeriesChart::new(backend);

		chart.mount(&series_of(&[1.0])).unwrap();
		for i in 2..6 {
			chart.update(&series_of(&[i as f64])).unwrap();
		}

		let state = state.borrow();
		assert_eq!(state.live.len(), 1);
		assert_eq!(state.max_live, 1);
		assert_eq!(state.last_labels, vec![AxisLabel::Number(5.0)]);
	}

	#[test]
	fn test_release_is_idempotent() {
		let backend = StubBackend::default();
		let state = backend.0.clone();
		let mut chart = SeriesChart::new(backend);

		chart.mount(&series_of(&[1.0])).unwrap();
		chart.release();
		chart.release();

		assert!(chart.handle().is_none());
		assert!(state.borrow().live.is_empty());
	}

	#[test]
	fn test_backend_failure_propagates_and_leaves_no_handle() {
		let backend = StubBackend::default();
		backend.0.borrow_mut().fail = true;
		let state = backend.0.clone();
		let mut chart = SeriesChart::new(backend);

		let result = chart.mount(&series_of(&[1.0]));
		assert!(matches!(result, Err(RenderError::ContextUnavailable)));
		assert!(chart.handle().is_none());
		assert!(state.borrow().live.is_empty());
	}

	#[test]
	fn test_drop_releases_the_instance() {
		let backend = StubBackend::default();
		let state = backend.0.clone();
		{
			let mut chart = SeriesChart::new(backend);
			chart.mount(&series_of(&[1.0])).unwrap();
			assert_eq!(state.borrow().live.len(), 1);
		}
		assert!(state.borrow().live.is_empty());
	}

	#[test]
	fn test_failed_update_releases_previous_instance() {
		// A full rebuild destroys first; a creation failure afterwards
		// leaves the surface empty rather than stale.
		let backend = StubBackend::default();
		let state = backend.0.clone();
		let mut chart = SeriesChart::new(backend);

		chart.mount(&series_of(&[1.0])).unwrap();
		state.borrow_mut().fail = true;
		assert!(chart.update(&series_of(&[2.0])).is_err());

		assert!(chart.handle().is_none());
		assert!(state.borrow().live.is_empty());
	}
}
