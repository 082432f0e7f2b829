use leptos::prelude::*;

use crate::components::agents::AgentsDashboard;
use crate::components::composer::Composer;
use crate::components::feed::Feed;
use crate::components::graph_board::GraphBoard;
use crate::posts::PostBus;

const TRENDING_TOPICS: &[&str] = &["#MachineLearning", "#GraphTheory", "#AI", "#DataScience"];

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
	Feed,
	Board,
	Agents,
}

/// Default Home Page: tab bar, the active view, and the trending sidebar.
#[component]
pub fn Home() -> impl IntoView {
	let (active, set_active) = signal(Tab::Feed);
	// One bus links the composer to the feed for the lifetime of the page.
	let bus = PostBus::new();

	let tab_button = move |tab: Tab, label: &'static str| {
		view! {
			<button
				class="nav-tab"
				class:active=move || active.get() == tab
				on:click=move |_| set_active.set(tab)
			>
				{label}
			</button>
		}
	};

	view! {
		<div class="app-shell">
			<nav class="top-nav">
				<div class="brand">"Tangleboard"</div>
				<div class="nav-tabs">
					{tab_button(Tab::Feed, "Feed")}
					{tab_button(Tab::Board, "Board")}
					{tab_button(Tab::Agents, "Agents")}
				</div>
			</nav>

			<main class="main-grid">
				<div class="content-column">
					{move || {
						let bus = bus.clone();
						match active.get() {
							Tab::Feed => {
								view! {
									<div class="feed-column">
										<Composer bus=bus.clone() />
										<Feed bus=bus />
									</div>
								}
									.into_any()
							}
							Tab::Board => view! { <GraphBoard /> }.into_any(),
							Tab::Agents => view! { <AgentsDashboard /> }.into_any(),
						}
					}}
				</div>
				<aside class="side-column">
					<div class="trending card">
						<h2>"Trending Topics"</h2>
						{TRENDING_TOPICS
							.iter()
							.map(|topic| view! { <div class="trending-topic">{*topic}</div> })
							.collect_view()}
					</div>
				</aside>
			</main>
		</div>
	}
}
