//! Card for a single activity: details, availability and roster.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::controller::BoardAction;
use crate::state::board::ActivityCard;

/// Placeholder shown instead of an empty roster.
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// Remove button for one rendered participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteControl {
    pub email: String,
    pub activity: String,
    pub label: String,
    pub action: BoardAction,
}

/// One delete control per roster entry, bound to the pair captured at render time.
pub fn delete_controls(card: &ActivityCard) -> Vec<DeleteControl> {
    card.participants
        .iter()
        .map(|entry| DeleteControl {
            email: entry.email.clone(),
            activity: entry.activity.clone(),
            label: format!("Remove {}", entry.email),
            action: BoardAction::Unregister { email: entry.email.clone(), activity: entry.activity.clone() },
        })
        .collect()
}

/// Text replacing the roster when nobody has signed up.
pub fn empty_roster_notice(card: &ActivityCard) -> Option<&'static str> {
    card.participants.is_empty().then_some(NO_PARTICIPANTS_TEXT)
}

#[component]
pub fn ActivityCardView(card: ActivityCard, on_action: Callback<BoardAction>) -> impl IntoView {
    let roster = match empty_roster_notice(&card) {
        Some(notice) => view! { <p class="no-participants">{notice}</p> }.into_any(),
        None => {
            let items = delete_controls(&card)
                .into_iter()
                .map(|control| {
                    let DeleteControl { email, activity, label, action } = control;
                    view! {
                        <div class="participant-item" data-email=email.clone() data-activity=activity>
                            <span class="participant-email">{email.clone()}</span>
                            <button
                                class="delete-btn"
                                aria-label=label
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    on_action.run(action.clone());
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="participants-list">{items}</div> }.into_any()
        }
    };

    view! {
        <div class="activity-card">
            <h4>{card.name.clone()}</h4>
            <p>{card.description.clone()}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule.clone()}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {card.availability_label()}
            </p>
            <div class="participants">
                <h5>{card.roster_heading()}</h5>
                {roster}
            </div>
        </div>
    }
}
