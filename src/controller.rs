//! Board controller: turns UI actions into API calls and state updates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never call the API directly. They emit a [`BoardAction`]; the
//! page hands it to [`ActivityBoard::apply_local`] for pure form/state edits
//! or spawns [`ActivityBoard::dispatch`] for anything that needs the network.
//!
//! CONCURRENCY
//! ===========
//! Operations run on the single browser thread but interleave at every
//! `.await`. Nothing is debounced or locked: two overlapping reloads both
//! write the store and the last one to complete wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::BoardConfig;
use crate::net::api::ActivityApi;
use crate::net::types::MutationOutcome;
use crate::state::board::BoardState;
use crate::state::status::StatusKind;
use crate::state::store::BoardStore;
use crate::timer::HideTimer;

pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_REJECTED_FALLBACK: &str = "Failed to unregister";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";

/// Everything the board UI can ask for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardAction {
    /// Refetch the activity list.
    Load,
    EditEmail(String),
    SelectActivity(String),
    /// Sign up using the current form inputs.
    SubmitSignup,
    Signup { email: String, activity: String },
    Unregister { email: String, activity: String },
    DismissStatus,
}

/// Activity board controller with explicit dependencies.
#[derive(Clone, Debug)]
pub struct ActivityBoard<A, S, T> {
    api: A,
    store: S,
    timer: T,
    config: BoardConfig,
}

impl<A, S, T> ActivityBoard<A, S, T>
where
    A: ActivityApi,
    S: BoardStore,
    T: HideTimer,
{
    pub fn new(api: A, store: S, timer: T, config: BoardConfig) -> Self {
        Self { api, store, timer, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply actions that need no network. Returns `false` for actions that
    /// must go through [`Self::dispatch`].
    pub fn apply_local(&self, action: &BoardAction) -> bool {
        match action {
            BoardAction::EditEmail(email) => {
                let email = email.clone();
                self.store.update_board(|b| b.form.email = email);
            }
            BoardAction::SelectActivity(activity) => {
                let activity = activity.clone();
                self.store.update_board(|b| b.form.activity = activity);
            }
            BoardAction::DismissStatus => self.store.update_board(|b| b.status.hide()),
            BoardAction::Load
            | BoardAction::SubmitSignup
            | BoardAction::Signup { .. }
            | BoardAction::Unregister { .. } => return false,
        }
        true
    }

    /// Run any action to completion.
    pub async fn dispatch(&self, action: BoardAction) {
        if self.apply_local(&action) {
            return;
        }
        match action {
            BoardAction::Load => self.load_activities().await,
            BoardAction::SubmitSignup => self.submit_signup().await,
            BoardAction::Signup { email, activity } => self.signup(&email, &activity).await,
            BoardAction::Unregister { email, activity } => self.unregister(&email, &activity).await,
            BoardAction::EditEmail(_) | BoardAction::SelectActivity(_) | BoardAction::DismissStatus => {}
        }
    }

    /// Fetch the full activity list and rebuild cards and select options.
    pub async fn load_activities(&self) {
        match self.api.fetch_activities().await {
            Ok(activities) => {
                log::debug!("loaded {} activities", activities.len());
                self.store.update_board(|b| b.apply_activities(activities));
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                self.store.update_board(BoardState::mark_load_failed);
            }
        }
    }

    /// Sign up with whatever the form currently holds.
    pub async fn submit_signup(&self) {
        let (email, activity) = self
            .store
            .with_board(|b| (b.form.email.clone(), b.form.activity.clone()));
        self.signup(&email, &activity).await;
    }

    pub async fn signup(&self, email: &str, activity: &str) {
        match self.api.signup(activity, email).await {
            Ok(MutationOutcome::Accepted { message }) => {
                let text = message.unwrap_or_else(|| format!("Signed up {email} for {activity}"));
                self.show_status(text, StatusKind::Success);
                self.store.update_board(|b| b.form.reset());
                self.load_activities().await;
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                log::debug!("signup rejected with status {status}");
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_owned());
                self.show_status(text, StatusKind::Error);
            }
            Err(e) => {
                log::error!("Error signing up: {e}");
                self.show_status(SIGNUP_FAILED_TEXT, StatusKind::Error);
            }
        }
    }

    pub async fn unregister(&self, email: &str, activity: &str) {
        match self.api.unregister(activity, email).await {
            Ok(MutationOutcome::Accepted { .. }) => {
                self.store.update_board(|b| {
                    b.remove_participant(activity, email);
                });
                self.show_status(format!("{email} has been unregistered from {activity}"), StatusKind::Success);
                self.load_activities().await;
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                log::debug!("unregister rejected with status {status}");
                let text = detail.unwrap_or_else(|| UNREGISTER_REJECTED_FALLBACK.to_owned());
                self.show_status(text, StatusKind::Error);
            }
            Err(e) => {
                log::error!("Error unregistering: {e}");
                self.show_status(UNREGISTER_FAILED_TEXT, StatusKind::Error);
            }
        }
    }

    /// Show a message and arm its hide timer. Earlier timers are left running.
    pub fn show_status(&self, text: impl Into<String>, kind: StatusKind) {
        let text = text.into();
        self.store.update_board(|b| b.status.show(text, kind));
        let store = self.store.clone();
        self.timer.schedule(
            self.config.message_timeout_ms,
            Box::new(move || store.update_board(|b| b.status.hide())),
        );
    }
}
