//! Right-hand column: project links, join button, ownership controls.

use leptos::prelude::*;

use crate::state::membership::MembershipState;
use crate::state::project::Project;
use crate::state::ui::UiState;
use crate::util::color;

#[component]
pub fn ProjectSidebar(
    project: RwSignal<Project>,
    membership: RwSignal<MembershipState>,
    on_join: Callback<()>,
    on_become_owner: Callback<()>,
    on_manage: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let border = move || color::card_border(ui.read().accent());

    let links = move || {
        project
            .read()
            .links
            .iter()
            .map(|link| {
                view! {
                    <a class="sidebar__link" href=link.url.clone()>
                        <i class="icon icon--link"></i>
                        {link.label.clone()}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let is_joined = move || membership.read().is_joined;
    let is_owner = move || membership.read().is_owner;

    view! {
        <aside class="sidebar">
            <div class="card" style:border-color=border>
                <h2 class="card__title">"Project Links"</h2>
                <div class="sidebar__links">{links}</div>
            </div>

            <div class="card" style:border-color=border>
                <button
                    class=move || if is_joined() { "btn btn--wide btn--joined" } else { "btn btn--wide" }
                    on:click=move |_| on_join.run(())
                >
                    {move || {
                        if is_joined() {
                            view! { <i class="icon icon--check"></i> "Joined" }.into_any()
                        } else {
                            view! { <i class="icon icon--user-plus"></i> "Join Project" }.into_any()
                        }
                    }}
                </button>
            </div>

            <Show when=move || !is_owner()>
                <button class="btn" on:click=move |_| on_become_owner.run(())>
                    "Become Owner"
                </button>
            </Show>

            <Show when=is_owner>
                <div class="card" style:border-color=border>
                    <h2 class="card__title">"Project Settings"</h2>
                    <button class="sidebar__manage" on:click=move |_| on_manage.run(())>
                        <i class="icon icon--settings"></i>
                        "Manage Project"
                    </button>
                </div>
            </Show>
        </aside>
    }
}
