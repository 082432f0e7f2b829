use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

use super::state::BoardState;

/// The fixed pool the board search filters over; stands in for a real
/// query backend.
const SNIPPET_POOL: &[&str] = &[
	"Exploring graph theory #NetworkScience",
	"New breakthrough in AI connections #MachineLearning",
	"The future of social networks #GraphTheory",
];

/// Case-insensitive substring filter over the snippet pool. An empty or
/// whitespace query matches nothing.
fn matching_snippets(query: &str) -> Vec<&'static str> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return Vec::new();
	}
	SNIPPET_POOL
		.iter()
		.copied()
		.filter(|candidate| candidate.to_lowercase().contains(&needle))
		.collect()
}

#[component]
pub fn GraphBoard() -> impl IntoView {
	let board = RwSignal::new(BoardState::new());
	let (query, set_query) = signal(String::new());
	let surface_ref = NodeRef::<leptos::html::Div>::new();

	// Raw pointer coordinates relative to the board surface, before the
	// zoom divisor is applied.
	let surface_pos = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let surface = surface_ref.get()?;
		let rect = surface.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = surface_pos(&ev) else {
			return;
		};
		board.update(|b| {
			let pointer = b.to_board(x, y);
			b.pointer_moved(pointer);
		});
	};

	let on_mouseup = move |_: MouseEvent| board.update(|b| b.end_drag());

	// A drag may end with the pointer outside the surface, and Escape must
	// disarm connect mode regardless of focus. Both listeners are released
	// on every exit path via the cleanup hook below.
	let window = web_sys::window().unwrap();
	let window_mouseup: Closure<dyn FnMut(MouseEvent)> =
		Closure::new(move |_: MouseEvent| board.update(|b| b.end_drag()));
	let window_keydown: Closure<dyn FnMut(KeyboardEvent)> =
		Closure::new(move |ev: KeyboardEvent| {
			if ev.key() == "Escape" {
				board.update(|b| b.cancel_connect());
			}
		});
	let _ = window
		.add_event_listener_with_callback("mouseup", window_mouseup.as_ref().unchecked_ref());
	let _ = window
		.add_event_listener_with_callback("keydown", window_keydown.as_ref().unchecked_ref());
	// `on_cleanup` requires a `Send + Sync` closure, but wasm-bindgen
	// `Closure`s are neither. CSR runs single-threaded, so wrap them in
	// `SendWrapper` to satisfy the bound without changing behavior.
	let window_mouseup = leptos::__reexports::send_wrapper::SendWrapper::new(window_mouseup);
	let window_keydown = leptos::__reexports::send_wrapper::SendWrapper::new(window_keydown);
	on_cleanup(move || {
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(
				"mouseup",
				window_mouseup.as_ref().unchecked_ref(),
			);
			let _ = window.remove_event_listener_with_callback(
				"keydown",
				window_keydown.as_ref().unchecked_ref(),
			);
		}
	});

	view! {
		<div class="graph-board card">
			<div class="board-search">
				<input
					type="text"
					placeholder="Search snippets to add to the board..."
					prop:value=query
					on:input=move |ev| set_query.set(event_target_value(&ev))
				/>
			</div>

			{move || {
				let results = matching_snippets(&query.get());
				(!results.is_empty())
					.then(|| {
						view! {
							<div class="search-results">
								{results
									.into_iter()
									.map(|text| {
										view! {
											<div
												class="search-result"
												on:click=move |_| {
													board.update(|b| {
														b.add_snippet(text);
													});
													set_query.set(String::new());
												}
											>
												{text}
											</div>
										}
									})
									.collect_view()}
							</div>
						}
					})
			}}

			<div class="board-area">
				<div
					node_ref=surface_ref
					class="board-surface"
					class:connecting=move || board.with(|b| b.is_connecting())
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
				>
					<div
						class="board-scale"
						style=move || {
							format!("transform: scale({});", board.with(|b| b.zoom))
						}
					>
						<svg class="edge-layer">
							{move || {
								board
									.with(|b| b.connection_segments())
									.into_iter()
									.map(|(from, to)| {
										view! {
											<line
												x1=from.x.to_string()
												y1=from.y.to_string()
												x2=to.x.to_string()
												y2=to.y.to_string()
												stroke="#94a3b8"
												stroke-width="2"
											/>
										}
									})
									.collect_view()
							}}
							{move || {
								board
									.with(|b| b.preview_segment())
									.map(|(from, to)| {
										view! {
											<line
												x1=from.x.to_string()
												y1=from.y.to_string()
												x2=to.x.to_string()
												y2=to.y.to_string()
												stroke="#3b82f6"
												stroke-width="2"
												stroke-dasharray="4"
											/>
										}
									})
							}}
						</svg>

						<For
							each=move || {
								board.with(|b| {
									b.nodes
										.iter()
										.map(|node| (node.id.clone(), node.text.clone()))
										.collect::<Vec<_>>()
								})
							}
							key=|(id, _)| id.clone()
							children=move |(id, text)| {
								// Each handler closure needs its own copy of the id.
								let id_pos = id.clone();
								let id_armed = id.clone();
								let id_dragged = id.clone();
								let id_down = id.clone();
								let id_click = id.clone();
								let id_link = id.clone();
								let id_link_armed = id.clone();
								let id_remove = id;
								view! {
									<div
										class="snippet-node"
										class:armed=move || board.with(|b| b.is_armed(&id_armed))
										class:dragging=move || {
											board.with(|b| b.is_dragged(&id_dragged))
										}
										style=move || {
											board.with(|b| {
												let pos = b
													.node(&id_pos)
													.map(|node| node.position)
													.unwrap_or_default();
												format!("left: {}px; top: {}px;", pos.x, pos.y)
											})
										}
										on:mousedown=move |ev: MouseEvent| {
											ev.prevent_default();
											let Some((x, y)) = surface_pos(&ev) else {
												return;
											};
											board.update(|b| {
												let pointer = b.to_board(x, y);
												b.begin_drag(&id_down, pointer);
											});
										}
										on:click=move |_| board.update(|b| b.click_snippet(&id_click))
									>
										<div class="node-toolbar">
											<button
												class="node-link"
												class:armed=move || {
													board.with(|b| b.is_armed(&id_link_armed))
												}
												title="Connect"
												on:click=move |ev: MouseEvent| {
													ev.stop_propagation();
													board.update(|b| b.toggle_connect(&id_link));
												}
											>
												"🔗"
											</button>
											<button
												class="node-remove"
												title="Remove"
												on:click=move |ev: MouseEvent| {
													ev.stop_propagation();
													board.update(|b| b.remove_snippet(&id_remove));
												}
											>
												"✕"
											</button>
										</div>
										<p class="node-text">{text}</p>
									</div>
								}
							}
						/>
					</div>
				</div>

				<div class="zoom-controls">
					<button title="Zoom in" on:click=move |_| board.update(|b| b.zoom_in())>
						"+"
					</button>
					<button title="Zoom out" on:click=move |_| board.update(|b| b.zoom_out())>
						"−"
					</button>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::matching_snippets;

	#[test]
	fn empty_query_matches_nothing() {
		assert!(matching_snippets("").is_empty());
		assert!(matching_snippets("   ").is_empty());
	}

	#[test]
	fn filter_is_case_insensitive_substring() {
		let hits = matching_snippets("GRAPH");
		assert_eq!(hits.len(), 2);
		assert!(hits.iter().all(|s| s.to_lowercase().contains("graph")));
	}

	#[test]
	fn non_matching_query_yields_nothing() {
		assert!(matching_snippets("quantum basket weaving").is_empty());
	}
}
