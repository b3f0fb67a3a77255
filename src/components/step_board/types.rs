//! Step data structures for the board.

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Unique identifier of a step within one board.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u32);

/// One workflow step, as supplied by the host.
///
/// Steps form a forest: `parent_id` references another step in the same
/// set, or is absent for a root. A `parent_id` that does not resolve
/// within the set makes the step a root rather than an error.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StepNode {
	/// Unique id.
	pub id: StepId,
	/// The step that triggers this one, when any.
	#[serde(default)]
	pub parent_id: Option<StepId>,
	/// Display name on the card.
	#[serde(default)]
	pub name: String,
}

/// Parse the host's JSON step list.
pub fn parse_steps(json: &str) -> Result<Vec<StepNode>, ConfigurationError> {
	serde_json::from_str(json).map_err(ConfigurationError::InvalidSteps)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_steps() {
		let steps = parse_steps(
			r#"[
				{"id": 1, "name": "Send welcome mail"},
				{"id": 3, "parent_id": 1, "name": "Follow up"}
			]"#,
		)
		.unwrap();

		assert_eq!(steps.len(), 2);
		assert_eq!(steps[0].id, StepId(1));
		assert_eq!(steps[0].parent_id, None);
		assert_eq!(steps[1].parent_id, Some(StepId(1)));
	}

	#[test]
	fn test_parse_rejects_malformed_payload() {
		let result = parse_steps(r#"[{"name": "missing id"}]"#);
		assert!(matches!(
			result,
			Err(ConfigurationError::InvalidSteps(_))
		));
	}
}
