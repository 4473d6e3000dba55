//! Owner-only modal for editing project settings.
//!
//! Every input writes to the draft held in `SettingsModalState`; the live
//! project only changes when the page handles `on_save`.

use leptos::prelude::*;

use crate::state::settings::SettingsModalState;

#[component]
pub fn SettingsModal(
    settings: RwSignal<SettingsModalState>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let new_discipline = RwSignal::new(String::new());
    let new_invite = RwSignal::new(String::new());

    let title = move || settings.read().draft().map(|d| d.title.clone()).unwrap_or_default();
    let description = move || settings.read().draft().map(|d| d.description.clone()).unwrap_or_default();
    let is_public = move || settings.read().draft().is_some_and(|d| d.is_public);

    let add_discipline = move || {
        let value = new_discipline.get_untracked();
        settings.update(|s| {
            s.edit(|d| {
                d.add_discipline(&value);
            });
        });
        new_discipline.set(String::new());
    };

    let invite_user = move || {
        let value = new_invite.get_untracked();
        settings.update(|s| {
            s.edit(|d| {
                d.invite_user(&value);
            });
        });
        new_invite.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--settings"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Project Settings"</h2>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.edit(|d| d.title = value));
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__textarea"
                        prop:value=description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.edit(|d| d.description = value));
                        }
                    ></textarea>
                </label>

                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=is_public
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            settings.update(|s| s.edit(|d| d.is_public = checked));
                        }
                    />
                    "Public project"
                </label>

                <TagListEditor
                    label="Disciplines"
                    placeholder="Add a discipline"
                    items=Signal::derive(move || {
                        settings.read().draft().map(|d| d.disciplines.clone()).unwrap_or_default()
                    })
                    input=new_discipline
                    on_add=Callback::new(move |()| add_discipline())
                    on_remove=Callback::new(move |item: String| {
                        settings.update(|s| s.edit(|d| d.remove_discipline(&item)));
                    })
                />

                <TagListEditor
                    label="Invited Users"
                    placeholder="Invite by name"
                    items=Signal::derive(move || {
                        settings.read().draft().map(|d| d.invited_users.clone()).unwrap_or_default()
                    })
                    input=new_invite
                    on_add=Callback::new(move |()| invite_user())
                    on_remove=Callback::new(move |item: String| {
                        settings.update(|s| s.edit(|d| d.remove_invited_user(&item)));
                    })
                />

                <div class="dialog__actions">
                    <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                        "Delete Project"
                    </button>
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Editable list of short strings with per-item remove buttons.
#[component]
fn TagListEditor(
    label: &'static str,
    placeholder: &'static str,
    items: Signal<Vec<String>>,
    input: RwSignal<String>,
    on_add: Callback<()>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_add.run(());
        }
    };

    view! {
        <div class="tag-list">
            <span class="dialog__label">{label}</span>
            <ul class="tag-list__items">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let removed = item.clone();
                            view! {
                                <li class="tag-list__item">
                                    {item}
                                    <button
                                        class="tag-list__remove"
                                        title="Remove"
                                        on:click=move |_| on_remove.run(removed.clone())
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="tag-list__input-row">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn" on:click=move |_| on_add.run(())>"Add"</button>
            </div>
        </div>
    }
}
