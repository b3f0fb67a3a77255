//! Display ordering for step cards.
//!
//! Cards render depth-first: every step is immediately followed by its
//! subtree, children keep their input order within a parent, and roots keep
//! their input order among themselves.

use std::collections::{HashMap, HashSet};

use super::types::{StepId, StepNode};

/// Compute the render order for a step set.
///
/// A step counts as a root when it has no `parent_id` or its parent is not
/// in the set; such orphans keep their original relative position among the
/// roots. Steps trapped in a parent cycle are unreachable from any root and
/// are appended in input order instead, so every step appears exactly once.
pub fn display_order(nodes: &[StepNode]) -> Vec<StepId> {
	let ids: HashSet<StepId> = nodes.iter().map(|n| n.id).collect();

	let mut children: HashMap<StepId, Vec<StepId>> = HashMap::new();
	for node in nodes {
		if let Some(parent) = node.parent_id {
			if ids.contains(&parent) {
				children.entry(parent).or_default().push(node.id);
			}
		}
	}

	let mut order = Vec::with_capacity(nodes.len());
	let mut visited = HashSet::with_capacity(nodes.len());
	for node in nodes {
		if node.parent_id.is_none_or(|p| !ids.contains(&p)) {
			emit(node.id, &children, &mut order, &mut visited);
		}
	}
	for node in nodes {
		if !visited.contains(&node.id) {
			emit(node.id, &children, &mut order, &mut visited);
		}
	}
	order
}

fn emit(
	id: StepId,
	children: &HashMap<StepId, Vec<StepId>>,
	order: &mut Vec<StepId>,
	visited: &mut HashSet<StepId>,
) {
	if !visited.insert(id) {
		return;
	}
	order.push(id);
	if let Some(kids) = children.get(&id) {
		for &kid in kids {
			emit(kid, children, order, visited);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn step(id: u32, parent: Option<u32>) -> StepNode {
		StepNode {
			id: StepId(id),
			parent_id: parent.map(StepId),
			name: format!("Step {id}"),
		}
	}

	fn order_of(nodes: &[StepNode]) -> Vec<u32> {
		display_order(nodes).into_iter().map(|id| id.0).collect()
	}

	#[test]
	fn test_child_follows_its_parent() {
		let nodes = [
			step(1, None),
			step(2, None),
			step(3, Some(1)),
			step(4, Some(2)),
		];
		assert_eq!(order_of(&nodes), vec![1, 3, 2, 4]);
	}

	#[test]
	fn test_chain_stays_in_line() {
		let nodes = [step(1, None), step(2, Some(1)), step(3, Some(2))];
		assert_eq!(order_of(&nodes), vec![1, 2, 3]);
	}

	#[test]
	fn test_siblings_keep_input_order() {
		let nodes = [
			step(1, None),
			step(4, Some(1)),
			step(2, Some(1)),
			step(3, Some(1)),
		];
		assert_eq!(order_of(&nodes), vec![1, 4, 2, 3]);
	}

	#[test]
	fn test_orphan_parent_makes_a_root_in_place() {
		let nodes = [step(1, None), step(5, Some(99)), step(2, None)];
		assert_eq!(order_of(&nodes), vec![1, 5, 2]);
	}

	#[test]
	fn test_deep_subtree_emitted_before_next_root() {
		let nodes = [
			step(1, None),
			step(2, None),
			step(3, Some(1)),
			step(4, Some(3)),
			step(5, Some(1)),
		];
		assert_eq!(order_of(&nodes), vec![1, 3, 4, 5, 2]);
	}

	#[test]
	fn test_cycle_members_appear_exactly_once() {
		// 2 and 3 point at each other; 4 hangs off the cycle.
		let nodes = [
			step(1, None),
			step(2, Some(3)),
			step(3, Some(2)),
			step(4, Some(3)),
		];
		assert_eq!(order_of(&nodes), vec![1, 2, 3, 4]);
	}

	#[test]
	fn test_self_parent_is_tolerated() {
		let nodes = [step(1, Some(1)), step(2, None)];
		assert_eq!(order_of(&nodes), vec![2, 1]);
	}

	#[test]
	fn test_empty_set() {
		assert!(order_of(&[]).is_empty());
	}
}
