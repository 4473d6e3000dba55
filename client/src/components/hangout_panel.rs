//! Hangout tab body. Static text only.

use leptos::prelude::*;

#[component]
pub fn HangoutPanel() -> impl IntoView {
    view! {
        <h2 class="panel__title">"Project Hangout"</h2>
        <p class="panel__text">
            "This is the hangout section of the project. You can add more details here."
        </p>
    }
}
