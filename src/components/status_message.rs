//! Transient status message shown under the signup form.

use leptos::prelude::*;

use crate::controller::BoardAction;
use crate::state::board::BoardState;

/// Message area; clicking it dismisses the message early.
#[component]
pub fn StatusMessage(board: RwSignal<BoardState>, on_action: Callback<BoardAction>) -> impl IntoView {
    view! {
        <div
            id="message"
            class=move || board.with(|b| b.status.css_class())
            role="status"
            on:click=move |_| on_action.run(BoardAction::DismissStatus)
        >
            {move || board.with(|b| b.status.text.clone())}
        </div>
    }
}
