use leptos::prelude::*;

use crate::components::graph_editor::GraphEditorCanvas;
use crate::components::graph_editor::types::ShapeStamp;

const STAMPS: &[(&str, ShapeStamp)] = &[
	("Small oval", ShapeStamp::oval(10.0, 10.0)),
	("Large oval", ShapeStamp::oval(28.0, 20.0)),
	("Square", ShapeStamp::rect(16.0, 16.0)),
	("Wide box", ShapeStamp::rect(36.0, 18.0)),
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (stamp, set_stamp) = signal(ShapeStamp::default());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphEditorCanvas stamp=stamp fullscreen=true />
				<div class="graph-overlay">
					<h1>"Graph Editor"</h1>
					<p class="subtitle">
						"Click to add a node, drag to move it. Alt-drag from a node to draw an edge, "
						"press Space while drawing to add a joint. Right-click deletes."
					</p>
					<div class="stamp-toolbar">
						{STAMPS
							.iter()
							.map(|&(label, value)| {
								view! {
									<button
										class:active=move || stamp.get() == value
										on:click=move |_| set_stamp.set(value)
									>
										{label}
									</button>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
		</ErrorBoundary>
	}
}
