//! Board state: the rendered activity list and the signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client keeps no authoritative copy of the roster. Every successful
//! fetch replaces `cards` and `options` wholesale; the only local edit is the
//! optimistic removal of one participant entry after an unregister.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::types::Activity;

use super::status::StatusState;

/// Shown in the list area while the first fetch is in flight.
pub const LOADING_TEXT: &str = "Loading activities...";

/// Shown in the list area after a failed fetch.
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Everything the board page renders.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub list: ListStatus,
    /// One card per activity, in response order.
    pub cards: Vec<ActivityCard>,
    /// Activity names offered by the signup select, in response order.
    pub options: Vec<String>,
    pub form: SignupForm,
    pub status: StatusState,
}

/// What the activity list area currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl BoardState {
    /// Replace cards and select options with a fresh server response.
    pub fn apply_activities(&mut self, activities: Vec<Activity>) {
        self.options = activities.iter().map(|a| a.name.clone()).collect();
        self.cards = activities.into_iter().map(ActivityCard::from).collect();
        self.list = ListStatus::Ready;
    }

    /// Swap the list area for the failure notice.
    pub fn mark_load_failed(&mut self) {
        self.cards.clear();
        self.list = ListStatus::Failed;
    }

    /// Drop the first rendered entry for `email` under `activity`.
    ///
    /// Returns `false` if no such entry is rendered.
    pub fn remove_participant(&mut self, activity: &str, email: &str) -> bool {
        let Some(card) = self.cards.iter_mut().find(|c| c.name == activity) else {
            return false;
        };
        match card.participants.iter().position(|p| p.email == email) {
            Some(idx) => {
                card.participants.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// Human-readable text for the list area when no cards are shown.
    pub fn list_notice(&self) -> Option<&'static str> {
        match self.list {
            ListStatus::Loading => Some(LOADING_TEXT),
            ListStatus::Failed => Some(LOAD_FAILED_TEXT),
            ListStatus::Ready => None,
        }
    }
}

/// Render-time projection of one activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<ParticipantEntry>,
}

impl From<Activity> for ActivityCard {
    fn from(activity: Activity) -> Self {
        let Activity { name, details } = activity;
        let participants = details
            .participants
            .into_iter()
            .map(|email| ParticipantEntry { email, activity: name.clone() })
            .collect();
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants,
        }
    }
}

impl ActivityCard {
    /// Capacity minus roster size. Not clamped: an over-full roster goes negative.
    pub fn spots_left(&self) -> i64 {
        let roster = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - roster
    }

    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left())
    }

    pub fn roster_heading(&self) -> String {
        format!("Current Participants ({}/{})", self.participants.len(), self.max_participants)
    }
}

/// One rendered participant, bound to the activity it was rendered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub email: String,
    pub activity: String,
}

/// Signup form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty means the placeholder option.
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}
