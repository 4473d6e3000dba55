//! Top-level tab bar and the contribution sub-tab bar.

use leptos::prelude::*;

use crate::state::navigation::{NavigationState, SubTab, Tab};
use crate::state::ui::UiState;
use crate::util::color;

/// Tab buttons for the project page. The sub-tab row only renders while
/// the contributions tab is active.
#[component]
pub fn TabBar(nav: RwSignal<NavigationState>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            let active = move || nav.read().active_tab() == tab;
            view! {
                <button
                    class=move || tab_class(active())
                    style:background-color=move || color::tab_background(ui.read().accent(), active())
                    style:box-shadow=move || color::tab_glow(ui.read().accent(), active())
                    on:click=move |_| nav.update(|n| n.select_tab(tab))
                >
                    <i class=format!("icon icon--{}", tab.icon())></i>
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let sub_tabs = move || {
        SubTab::ALL
            .into_iter()
            .map(|sub_tab| {
                let active = move || nav.read().active_sub_tab() == Some(sub_tab);
                view! {
                    <button
                        class=move || tab_class(active())
                        style:background-color=move || color::tab_background(ui.read().accent(), active())
                        style:box-shadow=move || color::tab_glow(ui.read().accent(), active())
                        on:click=move |_| nav.update(|n| n.select_sub_tab(sub_tab))
                    >
                        <i class=format!("icon icon--{}", sub_tab.icon())></i>
                        {sub_tab.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="tab-bar">{tabs}</nav>
        <Show when=move || nav.read().shows_sub_tabs()>
            <nav class="tab-bar tab-bar--sub">{sub_tabs}</nav>
        </Show>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
}
