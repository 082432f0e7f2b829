use leptos::prelude::*;
use log::info;

use crate::posts::{Post, PostBus, sample_posts};

/// The feed list: hardcoded remote samples plus everything composed locally
/// this session, newest first.
#[component]
pub fn Feed(bus: PostBus) -> impl IntoView {
	let (posts, set_posts) = signal(sample_posts());

	// Subscribed for exactly as long as the feed is mounted; anything
	// published while it is unmounted is dropped.
	let subscription = bus.subscribe(move |post: &Post| {
		set_posts.update(|list| list.insert(0, post.clone()));
	});
	on_cleanup(move || drop(subscription));

	view! {
		<div class="feed">
			<For
				each=move || posts.get()
				key=|post| post.id.clone()
				children=move |post| view! { <PostCard post=post /> }
			/>
		</div>
	}
}

/// One feed entry. The push-to-remote control only exists on local posts.
#[component]
fn PostCard(post: Post) -> impl IntoView {
	let id = post.id.clone();
	let push_to_remote = move |_| {
		// A real client would call the remote service here.
		info!("push to remote requested for local post {id}");
		if let Some(window) = web_sys::window() {
			let _ = window
				.alert_with_message("In a real app, this would publish to the remote service");
		}
	};

	view! {
		<div class="post-card card">
			<div class="avatar"></div>
			<div class="post-body">
				<div class="post-meta">
					<span class="author">{post.author.clone()}</span>
					<span class="handle">{post.handle.clone()}</span>
					<span class="dot">"·"</span>
					<span class="timestamp">{post.timestamp.clone()}</span>
					{post.is_local.then(|| view! { <span class="local-badge">"Local"</span> })}
				</div>
				<p class="post-content">{post.content.clone()}</p>
				<div class="post-actions">
					<button class="action">"💬 " {post.replies}</button>
					<button class="action">"♥ " {post.likes}</button>
					<button class="action">"↗"</button>
					{post.is_local
						.then(|| {
							view! {
								<button
									class="action push-remote"
									title="Push to remote"
									on:click=push_to_remote
								>
									"🌐 Push to remote"
								</button>
							}
						})}
				</div>
			</div>
		</div>
	}
}
