//! Project listing page: the landing route and where deleted projects return to.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::projects::{InMemoryProjectRepository, ProjectRepository};

/// Lists every project in the repository as a card grid.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<InMemoryProjectRepository>>();

    view! {
        <div class="projects-page">
            <header class="projects-page__header">
                <h1>"Projects"</h1>
            </header>

            <div class="projects-page__grid">
                {move || {
                    let list = projects.read().list();
                    if list.is_empty() {
                        return view! { <p class="projects-page__empty">"No projects yet."</p> }.into_any();
                    }
                    list.into_iter()
                        .map(|project| view! { <ProjectCard project/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
