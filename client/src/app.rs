//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{project::ProjectPage, projects::ProjectsPage};
use crate::state::{projects::InMemoryProjectRepository, ui::UiState, viewer::ViewerState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the project repository, viewer identity and UI state to every
/// page, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let projects = RwSignal::new(InMemoryProjectRepository::seeded());
    let viewer = RwSignal::new(ViewerState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(projects);
    provide_context(viewer);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/atelier.css"/>
        <Title text="Atelier"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProjectsPage/>
                    <Route path=(StaticSegment("project"), ParamSegment("id")) view=ProjectPage/>
                </Routes>
            </main>
        </Router>
    }
}
