use leptos::prelude::*;

/// Lifecycle label for a displayed agent. Display data only; nothing runs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum AgentStatus {
	Running,
	Idle,
}

struct Agent {
	name: &'static str,
	status: AgentStatus,
	last_task: &'static str,
	completed_tasks: u32,
}

const AGENTS: &[Agent] = &[
	Agent {
		name: "Sentiment Analyzer",
		status: AgentStatus::Running,
		last_task: "Analyzing post sentiments",
		completed_tasks: 145,
	},
	Agent {
		name: "Content Curator",
		status: AgentStatus::Idle,
		last_task: "Organizing trending topics",
		completed_tasks: 89,
	},
];

/// Static status panel for the sample agents.
#[component]
pub fn AgentsDashboard() -> impl IntoView {
	view! {
		<div class="agents card">
			<div class="agents-header">
				<h2>"Agents Dashboard"</h2>
				<button class="new-agent">"New Agent"</button>
			</div>
			<div class="agent-list">
				{AGENTS
					.iter()
					.map(|agent| {
						let badge = match agent.status {
							AgentStatus::Running => {
								view! { <span class="status running">"Running"</span> }
							}
							AgentStatus::Idle => {
								view! { <span class="status idle">"Idle"</span> }
							}
						};
						view! {
							<div class="agent-card">
								<div class="agent-row">
									<div>
										<h3>{agent.name}</h3>
										<p class="last-task">{agent.last_task}</p>
									</div>
									{badge}
								</div>
								<p class="completed">{agent.completed_tasks} " tasks completed"</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
