//! Team roster panel.

use leptos::prelude::*;

use crate::state::membership::MembershipState;

#[component]
pub fn TeamPanel(membership: RwSignal<MembershipState>) -> impl IntoView {
    view! {
        <h2 class="panel__title">"Project Team"</h2>
        {move || {
            let members = membership.read().team_members.clone();
            if members.is_empty() {
                return view! { <p class="panel__empty">"No team members yet."</p> }.into_any();
            }
            view! {
                <ul class="panel__list">
                    {members.into_iter().map(|m| view! { <li>{m}</li> }).collect::<Vec<_>>()}
                </ul>
            }
                .into_any()
        }}
    }
}
