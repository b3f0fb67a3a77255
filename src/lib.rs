//! flowboard: activity chart and step board widgets for workflow UIs.
//!
//! This crate provides two independent WASM widgets: a done/error activity
//! line chart rendered on a canvas, and a step board that lays out a step
//! hierarchy as cards with click-to-edit and add-child affordances. Record
//! data comes from the hosting page; persistence and routing stay with the
//! host.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

pub use components::activity_chart::{ActivityChart, AxisLabel, Point, SeriesSet};
pub use components::step_board::{
	InsertionRequest, SelectionEvent, StepBoard, StepId, StepNode, parse_steps,
};
pub use error::{ConfigurationError, RenderError};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("flowboard: logging initialized");
}

/// Read the text of a `<script type="application/json">` element by id.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load the activity series from a script element with id="activity-data".
/// Expected format: JSON with { done: [...], error: [...] }
fn load_activity_data() -> Option<SeriesSet> {
	let json_text = script_text("activity-data")?;

	match SeriesSet::from_json(&json_text) {
		Ok(series) => {
			info!(
				"flowboard: loaded {} done, {} error points",
				series.done.len(),
				series.error.len()
			);
			Some(series)
		}
		Err(e) => {
			warn!("flowboard: {e}");
			None
		}
	}
}

/// Load the step list from a script element with id="step-data".
/// Expected format: JSON array of { id, parent_id?, name? }
fn load_step_data() -> Option<Vec<StepNode>> {
	let json_text = script_text("step-data")?;

	match parse_steps(&json_text) {
		Ok(steps) => {
			info!("flowboard: loaded {} steps", steps.len());
			Some(steps)
		}
		Err(e) => {
			warn!("flowboard: {e}");
			None
		}
	}
}

/// Main application component.
///
/// The composition root: loads record data from the DOM, owns the step set,
/// and wires the board's selection and insertion events to it. Adding a
/// child appends an empty step under the chosen parent and opens it for
/// editing, after which the board re-renders from the grown set.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let series = load_activity_data().unwrap_or_default();
	let series_signal = Signal::derive(move || series.clone());

	let steps = RwSignal::new(load_step_data().unwrap_or_default());
	let selected = RwSignal::new(None::<StepId>);

	let on_select = Callback::new(move |ev: SelectionEvent| {
		selected.set(Some(ev.step));
	});
	let on_add_child = Callback::new(move |request: InsertionRequest| {
		let id = StepId(steps.with(|list| list.iter().map(|n| n.id.0).max().unwrap_or(0)) + 1);
		steps.update(|list| {
			list.push(StepNode {
				id,
				parent_id: Some(request.parent),
				name: String::new(),
			});
		});
		selected.set(Some(id));
	});

	let edit_panel = move || {
		let id = selected.get()?;
		let node = steps.with(|list| list.iter().find(|n| n.id == id).cloned())?;
		Some(view! {
			<div class="step-form">
				<label>"Name"</label>
				<input
					prop:value=node.name
					on:input=move |ev| {
						let name = event_target_value(&ev);
						steps.update(|list| {
							if let Some(node) = list.iter_mut().find(|n| n.id == id) {
								node.name = name.clone();
							}
						});
					}
				/>
			</div>
		})
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Workflow Activity" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="flowboard">
			<div class="activity-panel">
				<ActivityChart data=series_signal />
			</div>
			<div class="step-panel">
				<StepBoard
					steps=steps
					selected=selected
					on_select=on_select
					on_add_child=on_add_child
				/>
				{edit_panel}
			</div>
		</div>
	}
}
