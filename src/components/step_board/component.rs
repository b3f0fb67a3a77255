//! Leptos component rendering the step board.

use leptos::prelude::*;

use super::events::{InsertionRequest, SelectionEvent};
use super::order::display_order;
use super::types::{StepId, StepNode};

/// Renders steps as a card list in display order.
///
/// The order is recomputed from the step set on every change, so a parent
/// card is always immediately followed by its subtree. Clicking a card
/// emits a [`SelectionEvent`]; the add-child button emits an
/// [`InsertionRequest`]. The component mutates nothing itself — the owner
/// of `steps` reacts to the events.
#[component]
pub fn StepBoard(
	#[prop(into)] steps: Signal<Vec<StepNode>>,
	#[prop(into)] selected: Signal<Option<StepId>>,
	#[prop(into)] on_select: Callback<SelectionEvent>,
	#[prop(into)] on_add_child: Callback<InsertionRequest>,
) -> impl IntoView {
	let ordered = Memo::new(move |_| {
		let nodes = steps.get();
		display_order(&nodes)
			.into_iter()
			.filter_map(|id| nodes.iter().find(|n| n.id == id).cloned())
			.collect::<Vec<_>>()
	});

	view! {
		<div class="step-board">
			{move || {
				ordered
					.get()
					.into_iter()
					.map(|node| {
						let id = node.id;
						view! {
							<div
								class="step-card"
								class:child=node.parent_id.is_some()
								class:selected=move || selected.get() == Some(id)
								on:click=move |_| on_select.run(SelectionEvent::new(id))
							>
								<span class="step-card-name">{node.name.clone()}</span>
								<button
									class="step-card-add-child"
									on:click=move |ev| {
										ev.stop_propagation();
										on_add_child.run(InsertionRequest::new(id));
									}
								>
									"Add child"
								</button>
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}
