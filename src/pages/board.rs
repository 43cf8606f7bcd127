//! Activity board page: activity list, signup form and status message.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It builds the `ActivityBoard` controller over the
//! shared `RwSignal<BoardState>` and turns every component callback into a
//! controller action; network actions run on `spawn_local`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCardView;
use crate::components::signup_form::SignupForm;
use crate::components::status_message::StatusMessage;
use crate::config::BoardConfig;
use crate::controller::{ActivityBoard, BoardAction};
use crate::net::api::HttpActivityApi;
use crate::state::board::BoardState;
use crate::timer::BrowserTimer;

#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let config = expect_context::<BoardConfig>();

    let controller = ActivityBoard::new(HttpActivityApi::new(config.api_base.clone()), board, BrowserTimer, config);

    let on_action = Callback::new(move |action: BoardAction| {
        if controller.apply_local(&action) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                controller.dispatch(action).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("ignoring {action:?} outside the browser");
        }
    });

    // Effects only run once mounted in the browser, so this is the initial fetch.
    Effect::new(move || on_action.run(BoardAction::Load));

    let activity_list = move || match board.with(BoardState::list_notice) {
        Some(notice) => view! { <p>{notice}</p> }.into_any(),
        None => board
            .with(|b| b.cards.clone())
            .into_iter()
            .map(|card| view! { <ActivityCardView card on_action/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <div id="activities-list">{activity_list}</div>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm board on_action/>
                <StatusMessage board on_action/>
            </section>
        </main>
    }
}
