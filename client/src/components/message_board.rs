//! Project message board with posting and upvotes.

use leptos::prelude::*;

use crate::state::message_board::MessageBoardState;
use crate::state::viewer::ViewerState;
use crate::util::clock;

/// Message list plus an input for posting as the current viewer.
#[component]
pub fn MessageBoard(board: RwSignal<MessageBoardState>) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get_untracked();
        let author = viewer.read_untracked().name.clone();
        let posted = board
            .try_update(|b| b.add_message(&author, &text, clock::now_ms()))
            .flatten();
        if posted.is_some() {
            input.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let messages = move || {
        board
            .read()
            .messages()
            .iter()
            .map(|msg| {
                let id = msg.id;
                view! {
                    <div class="message">
                        <div class="message__avatar">
                            <i class="icon icon--users"></i>
                        </div>
                        <div class="message__body">
                            <div class="message__header">
                                <span class="message__user">{msg.user.clone()}</span>
                                <button
                                    class="message__upvote"
                                    title="Upvote"
                                    on:click=move |_| board.update(|b| {
                                        b.upvote(id);
                                    })
                                >
                                    <i class="icon icon--arrow-up"></i>
                                    <span class="message__votes">{msg.votes}</span>
                                </button>
                            </div>
                            <p class="message__text">{msg.text.clone()}</p>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <h2 class="panel__title">"Message Board"</h2>
        <div class="message-board__messages">{messages}</div>
        <div class="message-board__input-row">
            <input
                class="message-board__input"
                type="text"
                placeholder="Type a message..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn message-board__send" title="Send" on:click=move |_| do_send()>
                <i class="icon icon--message-square"></i>
            </button>
        </div>
    }
}
