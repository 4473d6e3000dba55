//! Project page: tabs, message board, membership and settings for one project.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route supplies the project id; the project itself comes from the
//! `InMemoryProjectRepository` in context. Everything else on the page
//! (tabs, messages, membership, the settings draft) is local state that is
//! rebuilt whenever the route changes.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::contributions_panel::ContributionsPanel;
use crate::components::hangout_panel::HangoutPanel;
use crate::components::message_board::MessageBoard;
use crate::components::overview_panel::OverviewPanel;
use crate::components::project_header::ProjectHeader;
use crate::components::project_sidebar::ProjectSidebar;
use crate::components::settings_modal::SettingsModal;
use crate::components::tab_bar::TabBar;
use crate::components::team_panel::TeamPanel;
use crate::state::membership::MembershipState;
use crate::state::message_board::MessageBoardState;
use crate::state::navigation::{NavigationState, Panel, SubTab};
use crate::state::project::Project;
use crate::state::projects::{InMemoryProjectRepository, ProjectError, ProjectRepository, load_project};
use crate::state::settings::SettingsModalState;
use crate::state::ui::UiState;
use crate::state::viewer::ViewerState;
use crate::util::color;

/// Route component for `/project/:id`.
///
/// Renders the not-found view when the id does not resolve to a project.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<InMemoryProjectRepository>>();
    let params = use_params_map();

    let project_id = move || params.read().get("id").unwrap_or_default();

    // Only the route param is tracked: saving a project must not rebuild the
    // page and wipe its local state.
    move || {
        let loaded = load_project(&*projects.read_untracked(), &project_id());
        match loaded {
            Ok(project) => view! { <ProjectView project/> }.into_any(),
            Err(error) => {
                log::warn!("{error}");
                view! { <ProjectNotFound error/> }.into_any()
            }
        }
    }
}

#[component]
fn ProjectNotFound(error: ProjectError) -> impl IntoView {
    view! {
        <div class="project-not-found">
            <h1>"Project not found"</h1>
            <p class="project-not-found__detail">{error.to_string()}</p>
            <a class="btn" href="/">"Back to projects"</a>
        </div>
    }
}

/// The project page body for a resolved project.
#[component]
fn ProjectView(project: Project) -> impl IntoView {
    let projects = expect_context::<RwSignal<InMemoryProjectRepository>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let viewer_name = viewer.read_untracked().name.clone();
    let membership = RwSignal::new(MembershipState::for_viewer(&project, &viewer_name));
    let project = RwSignal::new(project);
    let nav = RwSignal::new(NavigationState::default());
    let board = RwSignal::new(MessageBoardState::default());
    let settings = RwSignal::new(SettingsModalState::default());

    let on_join = Callback::new(move |()| {
        let name = viewer.read_untracked().name.clone();
        let joined = membership
            .try_update(|m| join_project(m, &project.read_untracked(), &name))
            .flatten();
        if let Some(updated) = joined {
            log::info!("{name} joined project {}", updated.id);
            if updated != *project.read_untracked() {
                project.set(updated.clone());
                projects.update(|r| r.upsert(updated));
            }
        }
    });

    let on_become_owner = Callback::new(move |()| {
        let name = viewer.read_untracked().name.clone();
        let claimed = membership
            .try_update(|m| claim_ownership(m, &project.read_untracked(), &name))
            .flatten();
        if let Some(updated) = claimed {
            log::info!("{name} is now the owner of project {}", updated.id);
            project.set(updated.clone());
            projects.update(|r| r.upsert(updated));
        }
    });

    let on_manage = Callback::new(move |()| {
        let is_owner = membership.read_untracked().is_owner;
        settings.update(|s| open_settings(s, is_owner, &project.read_untracked()));
    });

    let on_save = Callback::new(move |()| {
        let is_owner = membership.read_untracked().is_owner;
        let saved = settings
            .try_update(|s| commit_settings(s, is_owner, &project.read_untracked()))
            .flatten();
        if let Some(updated) = saved {
            log::info!("saved settings for project {}", updated.id);
            project.set(updated.clone());
            projects.update(|r| r.upsert(updated));
        }
    });

    let on_cancel = Callback::new(move |()| settings.update(SettingsModalState::cancel));

    let on_delete = Callback::new(move |()| {
        let id = project.read_untracked().id;
        let removed = settings
            .try_update(|s| projects.try_update(|r| delete_project(s, r, id)))
            .flatten()
            .unwrap_or(false);
        if removed {
            log::info!("deleted project {id}");
        }
        navigate("/", NavigateOptions::default());
    });

    let border = move || color::card_border(ui.read().accent());
    let show_settings = move || membership.read().is_owner && settings.read().is_open();

    view! {
        <div class="project-page">
            <ProjectHeader project/>
            <TabBar nav/>

            <div class="project-page__layout">
                <section class="project-page__content">
                    <div class="card" style:border-color=border>
                        {move || match nav.get().visible_panel() {
                            Panel::Overview => view! { <OverviewPanel project/> }.into_any(),
                            Panel::Hangout => view! { <HangoutPanel/> }.into_any(),
                            Panel::Team => view! { <TeamPanel membership/> }.into_any(),
                            Panel::Visual => view! { <ContributionsPanel sub_tab=SubTab::Visual/> }.into_any(),
                            Panel::Audio => view! { <ContributionsPanel sub_tab=SubTab::Audio/> }.into_any(),
                            Panel::Story => view! { <ContributionsPanel sub_tab=SubTab::Story/> }.into_any(),
                            Panel::Board => view! { <MessageBoard board/> }.into_any(),
                        }}
                    </div>
                </section>

                <ProjectSidebar project membership on_join on_become_owner on_manage/>
            </div>

            <Show when=show_settings>
                <SettingsModal settings on_save on_cancel on_delete/>
            </Show>
        </div>
    }
}

/// Open the settings draft. Only owners may edit settings.
pub(crate) fn open_settings(settings: &mut SettingsModalState, is_owner: bool, project: &Project) {
    if is_owner {
        settings.open(project);
    }
}

/// Close the modal and return the merged project when an owner saves.
///
/// A non-owner's draft is discarded without producing an update.
pub(crate) fn commit_settings(
    settings: &mut SettingsModalState,
    is_owner: bool,
    project: &Project,
) -> Option<Project> {
    if !is_owner {
        settings.cancel();
        return None;
    }
    settings.save(project)
}

/// Apply a "Join Project" click for `viewer`.
///
/// Returns `None` when already joined. Otherwise returns the project as it
/// stands after joining: a viewer who owned it gives up the stored owner, so
/// reloading the page does not bring owner controls back.
pub(crate) fn join_project(membership: &mut MembershipState, project: &Project, viewer: &str) -> Option<Project> {
    if !membership.join(viewer) {
        return None;
    }
    if project.is_owned_by(viewer) {
        return Some(Project { owner: None, ..project.clone() });
    }
    Some(project.clone())
}

/// Apply a "Become Owner" click for `viewer`.
///
/// Returns the project re-owned by `viewer` when ownership changed hands.
pub(crate) fn claim_ownership(membership: &mut MembershipState, project: &Project, viewer: &str) -> Option<Project> {
    if !membership.become_owner() {
        return None;
    }
    Some(Project { owner: Some(viewer.to_owned()), ..project.clone() })
}

/// Close the settings modal and drop project `id` from `repo`.
///
/// Returns whether the project existed. The caller navigates away either way.
pub(crate) fn delete_project(settings: &mut SettingsModalState, repo: &mut impl ProjectRepository, id: u64) -> bool {
    settings.cancel();
    repo.remove(id).is_some()
}
