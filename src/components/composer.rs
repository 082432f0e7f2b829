use leptos::prelude::*;

use crate::posts::{MAX_POST_LEN, Post, PostBus};

/// Compose a local post: bounded textarea, live character counter, and a
/// submit button that publishes on the bus and clears the draft.
#[component]
pub fn Composer(bus: PostBus) -> impl IntoView {
	let (draft, set_draft) = signal(String::new());

	let submit = move |_| {
		let content = draft.get();
		if content.trim().is_empty() {
			return;
		}
		bus.publish(&Post::local(content));
		set_draft.set(String::new());
	};

	view! {
		<div class="composer card">
			<textarea
				placeholder="What's on your mind?"
				maxlength=MAX_POST_LEN.to_string()
				prop:value=draft
				on:input=move |ev| set_draft.set(event_target_value(&ev))
			></textarea>
			<div class="composer-footer">
				<span class="char-count">
					{move || {
						format!("{}/{} characters", draft.get().chars().count(), MAX_POST_LEN)
					}}
				</span>
				<button
					class="submit"
					disabled=move || draft.get().trim().is_empty()
					on:click=submit
				>
					"Save locally"
				</button>
			</div>
		</div>
	}
}
