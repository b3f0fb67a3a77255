//! Step board widget.
//!
//! Renders a flat set of workflow steps as an ordered card list:
//! - Depth-first display order, parent immediately followed by its subtree
//! - Click-to-select for detail editing
//! - An add-child affordance per card
//!
//! Selection and insertion are emitted as events to injected collaborators;
//! the board itself owns no step data and performs no mutation.

mod component;
mod events;
mod order;
mod types;

pub use component::StepBoard;
pub use events::{InsertionRequest, SelectionEvent};
pub use order::display_order;
pub use types::{StepId, StepNode, parse_steps};
