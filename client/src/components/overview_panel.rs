//! Overview panel: milestones, overall progress, goals and deadlines.

use leptos::prelude::*;

use crate::state::project::Project;

#[component]
pub fn OverviewPanel(project: RwSignal<Project>) -> impl IntoView {
    let milestones = move || {
        project
            .read()
            .milestones
            .iter()
            .map(|m| {
                let class = if m.completed { "milestone milestone--done" } else { "milestone" };
                let status = if m.completed { "Completed" } else { "In Progress" };
                view! {
                    <div class=class>
                        <span class="milestone__name">{m.name.clone()}</span>
                        <span class="milestone__status">{status}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let progress_width = move || format!("{}%", project.read().progress_percent());

    let goals = move || {
        project
            .read()
            .goals
            .iter()
            .map(|g| view! { <li>{g.clone()}</li> })
            .collect::<Vec<_>>()
    };

    let deadlines = move || {
        project
            .read()
            .deadlines
            .iter()
            .map(|d| view! { <li>{format!("{}: {}", d.label, d.date)}</li> })
            .collect::<Vec<_>>()
    };

    view! {
        <h2 class="panel__title">"Project Overview"</h2>
        <div class="milestones">{milestones}</div>
        <div class="progress">
            <div class="progress__bar" style:width=progress_width></div>
        </div>
        <div class="panel__section">
            <h3>"Project Goals"</h3>
            <ul class="panel__list">{goals}</ul>
        </div>
        <div class="panel__section">
            <h3>"Project Deadlines"</h3>
            <ul class="panel__list">{deadlines}</ul>
        </div>
    }
}
