//! Card linking to a project from the listing page.

use leptos::prelude::*;

use crate::state::project::Project;
use crate::state::ui::UiState;
use crate::util::color;

/// A clickable project card. Hovering it makes its color the app accent.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let href = format!("/project/{}", project.id);
    let accent = color::project_accent(project.id);
    let progress = format!("{:.0}%", project.progress_percent());
    let visibility = if project.is_public { "Public" } else { "Private" };

    let on_enter = move |_| ui.update(|u| u.accent_color = Some(accent.to_owned()));

    view! {
        <a class="project-card" href=href on:mouseenter=on_enter style:border-color=accent>
            <img class="project-card__image" src=project.image.clone() alt=project.title.clone()/>
            <div class="project-card__body">
                <span class="project-card__title">{project.title.clone()}</span>
                <p class="project-card__description">{project.description.clone()}</p>
                <div class="project-card__meta">
                    <span class="project-card__visibility">{visibility}</span>
                    <span class="project-card__progress">{progress}</span>
                </div>
            </div>
        </a>
    }
}
