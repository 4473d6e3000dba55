//! Contribution panels for the visual, audio and story sub-tabs.
//!
//! Visual and story panels render skeleton placeholders; the audio panel
//! lists the placeholder tracks.

use leptos::prelude::*;

use crate::state::navigation::SubTab;
use crate::state::project::placeholder_tracks;

/// Renders the panel for exactly one contribution sub-tab.
#[component]
pub fn ContributionsPanel(sub_tab: SubTab) -> impl IntoView {
    match sub_tab {
        SubTab::Visual => view! { <VisualPanel/> }.into_any(),
        SubTab::Audio => view! { <AudioPanel/> }.into_any(),
        SubTab::Story => view! { <StoryPanel/> }.into_any(),
    }
}

#[component]
fn VisualPanel() -> impl IntoView {
    view! {
        <h2 class="panel__title">"Visual Assets"</h2>
        <div class="visual-grid">
            {(0..4).map(|_| view! { <div class="skeleton visual-grid__tile"></div> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn AudioPanel() -> impl IntoView {
    let tracks = placeholder_tracks()
        .into_iter()
        .map(|track| {
            let volume = format!("{:.0}%", track.volume * 100.0);
            let class = if track.is_muted { "track track--muted" } else { "track" };
            view! {
                <div class=class>
                    <div class="track__icon">
                        <i class="icon icon--music"></i>
                    </div>
                    <div class="track__body">
                        <span class="track__user">{track.user_name}</span>
                        <div class="track__waveform skeleton"></div>
                    </div>
                    <span class="track__volume">{volume}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <h2 class="panel__title">"Audio Tracks"</h2>
        <div class="tracks">{tracks}</div>
    }
}

#[component]
fn StoryPanel() -> impl IntoView {
    view! {
        <h2 class="panel__title">"Story Elements"</h2>
        <div class="story">
            {(0..2)
                .map(|_| {
                    view! {
                        <div class="story__element">
                            <div class="skeleton story__heading"></div>
                            <div class="skeleton story__line"></div>
                            <div class="skeleton story__line story__line--short"></div>
                            <div class="skeleton story__line story__line--shorter"></div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
