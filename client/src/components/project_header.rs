//! Cover image banner with the project title and description.

use leptos::prelude::*;

use crate::state::project::Project;

#[component]
pub fn ProjectHeader(project: RwSignal<Project>) -> impl IntoView {
    let image = move || project.read().header_image().to_owned();
    let title = move || project.read().title.clone();
    let description = move || project.read().description.clone();

    view! {
        <div class="project-header">
            <img class="project-header__image" src=image alt=title/>
            <div class="project-header__shade"></div>
            <div class="project-header__text">
                <h1 class="project-header__title">{title}</h1>
                <p class="project-header__description">{description}</p>
            </div>
        </div>
    }
}
