//! Signup form: email input, activity select and submit button.

use leptos::prelude::*;

use crate::controller::BoardAction;
use crate::state::board::BoardState;

#[component]
pub fn SignupForm(board: RwSignal<BoardState>, on_action: Callback<BoardAction>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_action.run(BoardAction::SubmitSignup);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || board.with(|b| b.form.email.clone())
                    on:input=move |ev| on_action.run(BoardAction::EditEmail(event_target_value(&ev)))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || board.with(|b| b.form.activity.clone())
                    on:change=move |ev| on_action.run(BoardAction::SelectActivity(event_target_value(&ev)))
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        board
                            .with(|b| b.options.clone())
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
