//! Events the board emits to its collaborators.
//!
//! The board never opens editors or creates steps itself. It emits these
//! values through injected callbacks; a collaborator fulfils them and the
//! board re-renders from the updated step set.

use super::types::StepId;

/// A card was chosen for detail editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEvent {
	/// The chosen step.
	pub step: StepId,
}

impl SelectionEvent {
	/// Signal that `step` was chosen. Stateless and side-effect-free.
	pub fn new(step: StepId) -> Self {
		Self { step }
	}
}

/// Intent to create a new step attached to a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertionRequest {
	/// The step the new child should attach to.
	pub parent: StepId,
}

impl InsertionRequest {
	/// Request a child of `parent`. The request carries intent only; the
	/// input step set is untouched.
	pub fn new(parent: StepId) -> Self {
		Self { parent }
	}
}
