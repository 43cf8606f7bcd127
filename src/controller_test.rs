use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Activity, ActivityDetails};
use crate::state::board::{LOAD_FAILED_TEXT, ListStatus};
use crate::state::store::LocalBoard;
use crate::timer::ManualClock;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeServer {
    roster: Vec<Activity>,
    fetch_error: Option<ApiError>,
    next_signup: Option<Result<MutationOutcome, ApiError>>,
    next_unregister: Option<Result<MutationOutcome, ApiError>>,
    calls: Vec<String>,
}

/// In-memory stand-in for the activity backend.
#[derive(Clone, Default)]
struct FakeApi(Rc<RefCell<FakeServer>>);

impl FakeApi {
    fn with_roster(roster: Vec<Activity>) -> Self {
        let api = Self::default();
        api.0.borrow_mut().roster = roster;
        api
    }

    fn fail_fetch(&self, error: ApiError) {
        self.0.borrow_mut().fetch_error = Some(error);
    }

    fn reply_to_signup(&self, reply: Result<MutationOutcome, ApiError>) {
        self.0.borrow_mut().next_signup = Some(reply);
    }

    fn reply_to_unregister(&self, reply: Result<MutationOutcome, ApiError>) {
        self.0.borrow_mut().next_unregister = Some(reply);
    }

    fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }
}

impl ActivityApi for FakeApi {
    async fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let mut server = self.0.borrow_mut();
        server.calls.push("GET /activities".to_owned());
        match &server.fetch_error {
            Some(e) => Err(e.clone()),
            None => Ok(server.roster.clone()),
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError> {
        let mut server = self.0.borrow_mut();
        server.calls.push(format!("POST signup {activity} {email}"));
        if let Some(reply) = server.next_signup.take() {
            return reply;
        }
        let Some(entry) = server.roster.iter_mut().find(|a| a.name == activity) else {
            return Ok(rejected(404, "Activity not found"));
        };
        if entry.details.participants.iter().any(|p| p == email) {
            return Ok(rejected(400, "Student is already signed up"));
        }
        entry.details.participants.push(email.to_owned());
        Ok(MutationOutcome::Accepted { message: Some(format!("Signed up {email} for {activity}")) })
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError> {
        let mut server = self.0.borrow_mut();
        server.calls.push(format!("POST unregister {activity} {email}"));
        if let Some(reply) = server.next_unregister.take() {
            return reply;
        }
        let Some(entry) = server.roster.iter_mut().find(|a| a.name == activity) else {
            return Ok(rejected(404, "Activity not found"));
        };
        let before = entry.details.participants.len();
        entry.details.participants.retain(|p| p != email);
        if entry.details.participants.len() == before {
            return Ok(rejected(400, "Student is not signed up for this activity"));
        }
        Ok(MutationOutcome::Accepted { message: Some(format!("Unregistered {email} from {activity}")) })
    }
}

fn rejected(status: u16, detail: &str) -> MutationOutcome {
    MutationOutcome::Rejected { status, detail: Some(detail.to_owned()) }
}

fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
    Activity {
        name: name.to_owned(),
        details: ActivityDetails {
            description: format!("{name} description"),
            schedule: "Mondays".to_owned(),
            max_participants: max,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        },
    }
}

fn school_roster() -> Vec<Activity> {
    vec![
        activity("Chess Club", 12, &["michael@mergington.edu", "daniel@mergington.edu"]),
        activity("Programming Class", 20, &["emma@mergington.edu"]),
        activity("Art Studio", 15, &[]),
    ]
}

type TestBoard = ActivityBoard<FakeApi, LocalBoard, ManualClock>;

fn board_with(api: FakeApi) -> (TestBoard, LocalBoard, ManualClock) {
    let store = LocalBoard::default();
    let clock = ManualClock::default();
    let board = ActivityBoard::new(api, store.clone(), clock.clone(), BoardConfig::default());
    (board, store, clock)
}

fn loaded_board() -> (TestBoard, FakeApi, LocalBoard, ManualClock) {
    let api = FakeApi::with_roster(school_roster());
    let (board, store, clock) = board_with(api.clone());
    block_on(board.dispatch(BoardAction::Load));
    (board, api, store, clock)
}

fn emails(store: &LocalBoard, activity: &str) -> Vec<String> {
    store
        .snapshot()
        .card(activity)
        .map(|c| c.participants.iter().map(|p| p.email.clone()).collect())
        .unwrap_or_default()
}

fn fill_form(board: &TestBoard, email: &str, activity: &str) {
    assert!(board.apply_local(&BoardAction::EditEmail(email.to_owned())));
    assert!(board.apply_local(&BoardAction::SelectActivity(activity.to_owned())));
}

// =============================================================
// loadActivities
// =============================================================

#[test]
fn load_renders_one_card_per_activity_with_spots_left() {
    let (_board, _api, store, _clock) = loaded_board();
    let state = store.snapshot();

    assert_eq!(state.list, ListStatus::Ready);
    assert_eq!(state.cards.len(), 3);
    for (card, source) in state.cards.iter().zip(school_roster()) {
        let expected = i64::from(source.details.max_participants) - source.details.participants.len() as i64;
        assert_eq!(card.name, source.name);
        assert_eq!(card.spots_left(), expected);
    }
    assert_eq!(state.options, ["Chess Club", "Programming Class", "Art Studio"]);
}

#[test]
fn reload_drops_activities_absent_from_response() {
    let (board, api, store, _clock) = loaded_board();
    api.0.borrow_mut().roster.retain(|a| a.name != "Art Studio");

    block_on(board.load_activities());

    let state = store.snapshot();
    assert!(state.card("Art Studio").is_none());
    assert_eq!(state.options, ["Chess Club", "Programming Class"]);
}

#[test]
fn load_transport_failure_shows_notice_without_touching_status() {
    let api = FakeApi::default();
    api.fail_fetch(ApiError::Transport("connection refused".to_owned()));
    let (board, store, clock) = board_with(api);

    block_on(board.dispatch(BoardAction::Load));

    let state = store.snapshot();
    assert_eq!(state.list, ListStatus::Failed);
    assert_eq!(state.list_notice(), Some(LOAD_FAILED_TEXT));
    assert!(state.cards.is_empty());
    assert!(!state.status.visible);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn load_failure_after_success_replaces_cards_but_keeps_options() {
    let (board, api, store, _clock) = loaded_board();
    api.fail_fetch(ApiError::Decode("unexpected token".to_owned()));

    block_on(board.load_activities());

    let state = store.snapshot();
    assert_eq!(state.list, ListStatus::Failed);
    assert!(state.cards.is_empty());
    assert_eq!(state.options.len(), 3);
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_success_shows_message_resets_form_and_refetches() {
    let (board, api, store, _clock) = loaded_board();
    fill_form(&board, "new@mergington.edu", "Art Studio");

    block_on(board.dispatch(BoardAction::SubmitSignup));

    let state = store.snapshot();
    assert_eq!(state.status.text, "Signed up new@mergington.edu for Art Studio");
    assert_eq!(state.status.kind, StatusKind::Success);
    assert!(state.status.visible);
    assert!(state.form.email.is_empty());
    assert!(state.form.activity.is_empty());
    assert_eq!(emails(&store, "Art Studio"), ["new@mergington.edu"]);
    assert_eq!(state.card("Art Studio").unwrap().spots_left(), 14);
    assert_eq!(state.options, ["Chess Club", "Programming Class", "Art Studio"]);
    assert_eq!(
        api.calls(),
        [
            "GET /activities",
            "POST signup Art Studio new@mergington.edu",
            "GET /activities",
        ]
    );
}

#[test]
fn signup_success_without_message_uses_fallback_text() {
    let (board, api, store, _clock) = loaded_board();
    api.reply_to_signup(Ok(MutationOutcome::Accepted { message: None }));

    block_on(board.signup("a@mergington.edu", "Chess Club"));

    assert_eq!(store.snapshot().status.text, "Signed up a@mergington.edu for Chess Club");
}

#[test]
fn signup_rejection_shows_detail_and_keeps_form() {
    let (board, api, store, _clock) = loaded_board();
    fill_form(&board, "x@mergington.edu", "Chess Club");
    api.reply_to_signup(Ok(rejected(400, "X")));

    block_on(board.dispatch(BoardAction::SubmitSignup));

    let state = store.snapshot();
    assert_eq!(state.status.text, "X");
    assert_eq!(state.status.kind, StatusKind::Error);
    assert!(state.status.visible);
    assert_eq!(state.form.email, "x@mergington.edu");
    assert_eq!(state.form.activity, "Chess Club");
    assert_eq!(api.calls().iter().filter(|c| c.starts_with("GET")).count(), 1);
}

#[test]
fn signup_duplicate_is_rejected_by_server_detail() {
    let (board, _api, store, _clock) = loaded_board();

    block_on(board.signup("michael@mergington.edu", "Chess Club"));

    assert_eq!(store.snapshot().status.text, "Student is already signed up");
    assert_eq!(emails(&store, "Chess Club").len(), 2);
}

#[test]
fn signup_rejection_without_detail_uses_fallback() {
    let (board, api, store, _clock) = loaded_board();
    api.reply_to_signup(Ok(MutationOutcome::Rejected { status: 500, detail: None }));

    block_on(board.signup("a@mergington.edu", "Chess Club"));

    assert_eq!(store.snapshot().status.text, SIGNUP_REJECTED_FALLBACK);
}

#[test]
fn signup_transport_failure_shows_generic_error() {
    let (board, api, store, _clock) = loaded_board();
    fill_form(&board, "a@mergington.edu", "Chess Club");
    api.reply_to_signup(Err(ApiError::Transport("offline".to_owned())));

    block_on(board.dispatch(BoardAction::SubmitSignup));

    let state = store.snapshot();
    assert_eq!(state.status.text, SIGNUP_FAILED_TEXT);
    assert_eq!(state.status.kind, StatusKind::Error);
    assert_eq!(state.form.email, "a@mergington.edu");
}

#[test]
fn signup_does_not_validate_email_format() {
    let (board, api, store, _clock) = loaded_board();

    block_on(board.dispatch(BoardAction::Signup {
        email: "not-an-email".to_owned(),
        activity: "Art Studio".to_owned(),
    }));

    assert!(api.calls().contains(&"POST signup Art Studio not-an-email".to_owned()));
    assert_eq!(emails(&store, "Art Studio"), ["not-an-email"]);
}

// =============================================================
// unregister
// =============================================================

#[test]
fn unregister_success_removes_participant_and_refetches() {
    let (board, api, store, _clock) = loaded_board();

    block_on(board.dispatch(BoardAction::Unregister {
        email: "michael@mergington.edu".to_owned(),
        activity: "Chess Club".to_owned(),
    }));

    let state = store.snapshot();
    assert_eq!(emails(&store, "Chess Club"), ["daniel@mergington.edu"]);
    assert_eq!(state.status.text, "michael@mergington.edu has been unregistered from Chess Club");
    assert_eq!(state.status.kind, StatusKind::Success);
    assert_eq!(api.calls().last().map(String::as_str), Some("GET /activities"));
}

#[test]
fn unregister_success_message_survives_failed_reload() {
    let (board, api, store, _clock) = loaded_board();
    api.reply_to_unregister(Ok(MutationOutcome::Accepted { message: None }));
    api.fail_fetch(ApiError::Transport("offline".to_owned()));

    block_on(board.unregister("emma@mergington.edu", "Programming Class"));

    let state = store.snapshot();
    assert_eq!(state.list, ListStatus::Failed);
    assert_eq!(state.status.text, "emma@mergington.edu has been unregistered from Programming Class");
}

#[test]
fn unregister_rejection_keeps_entry_and_shows_detail() {
    let (board, api, store, _clock) = loaded_board();
    api.reply_to_unregister(Ok(rejected(404, "Activity not found")));

    block_on(board.unregister("emma@mergington.edu", "Programming Class"));

    let state = store.snapshot();
    assert_eq!(state.status.text, "Activity not found");
    assert_eq!(state.status.kind, StatusKind::Error);
    assert_eq!(emails(&store, "Programming Class"), ["emma@mergington.edu"]);
}

#[test]
fn unregister_rejection_without_detail_uses_fallback() {
    let (board, api, store, _clock) = loaded_board();
    api.reply_to_unregister(Ok(MutationOutcome::Rejected { status: 400, detail: None }));

    block_on(board.unregister("emma@mergington.edu", "Programming Class"));

    assert_eq!(store.snapshot().status.text, UNREGISTER_REJECTED_FALLBACK);
}

#[test]
fn unregister_transport_failure_shows_generic_error() {
    let (board, api, store, _clock) = loaded_board();
    api.reply_to_unregister(Err(ApiError::Decode("not json".to_owned())));

    block_on(board.unregister("emma@mergington.edu", "Programming Class"));

    let state = store.snapshot();
    assert_eq!(state.status.text, UNREGISTER_FAILED_TEXT);
    assert_eq!(emails(&store, "Programming Class"), ["emma@mergington.edu"]);
}

// =============================================================
// Status timing
// =============================================================

#[test]
fn status_hides_after_five_seconds_and_not_before() {
    let (board, _api, store, clock) = loaded_board();

    board.show_status("Saved", StatusKind::Success);
    clock.advance(4999);
    assert!(store.snapshot().status.visible);

    clock.advance(1);
    assert!(!store.snapshot().status.visible);
}

#[test]
fn submitted_signup_message_hides_exactly_at_timeout() {
    let (board, _api, store, clock) = loaded_board();
    fill_form(&board, "new@mergington.edu", "Art Studio");

    block_on(board.dispatch(BoardAction::SubmitSignup));
    assert_eq!(clock.pending(), 1);

    clock.advance(4999);
    let status = store.snapshot().status;
    assert!(status.visible);
    assert_eq!(status.css_class(), "success");

    clock.advance(1);
    let status = store.snapshot().status;
    assert!(!status.visible);
    assert_eq!(status.css_class(), "success hidden");
    assert_eq!(clock.pending(), 0);
}

#[test]
fn earlier_timer_still_hides_a_newer_message() {
    let (board, _api, store, clock) = loaded_board();

    board.show_status("first", StatusKind::Success);
    clock.advance(3000);
    board.show_status("second", StatusKind::Error);
    clock.advance(2000);

    let status = store.snapshot().status;
    assert_eq!(status.text, "second");
    assert!(!status.visible);
    assert_eq!(clock.pending(), 1);
}

#[test]
fn status_timeout_follows_config() {
    let store = LocalBoard::default();
    let clock = ManualClock::default();
    let config = BoardConfig { message_timeout_ms: 100, ..BoardConfig::default() };
    let board = ActivityBoard::new(FakeApi::default(), store.clone(), clock.clone(), config);

    board.show_status("quick", StatusKind::Success);
    clock.advance(100);

    assert!(!store.snapshot().status.visible);
}

#[test]
fn every_mutation_message_arms_a_hide_timer() {
    let (board, api, _store, clock) = loaded_board();
    api.reply_to_signup(Err(ApiError::Transport("offline".to_owned())));

    block_on(board.signup("a@mergington.edu", "Chess Club"));
    block_on(board.unregister("nobody@mergington.edu", "Chess Club"));

    assert_eq!(clock.pending(), 2);
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn form_edits_and_dismiss_are_local() {
    let (board, _api, store, _clock) = loaded_board();
    board.show_status("hello", StatusKind::Success);

    fill_form(&board, "a@mergington.edu", "Chess Club");
    assert!(board.apply_local(&BoardAction::DismissStatus));

    let state = store.snapshot();
    assert_eq!(state.form.email, "a@mergington.edu");
    assert_eq!(state.form.activity, "Chess Club");
    assert!(!state.status.visible);
}

#[test]
fn network_actions_are_not_local() {
    let (board, api, _store, _clock) = loaded_board();
    let before = api.calls().len();

    assert!(!board.apply_local(&BoardAction::Load));
    assert!(!board.apply_local(&BoardAction::SubmitSignup));
    assert_eq!(api.calls().len(), before);
}

#[test]
fn repeated_dispatch_is_not_debounced() {
    let (board, api, _store, _clock) = loaded_board();
    let unregister = BoardAction::Unregister {
        email: "michael@mergington.edu".to_owned(),
        activity: "Chess Club".to_owned(),
    };

    block_on(board.dispatch(unregister.clone()));
    block_on(board.dispatch(unregister));

    let posts = api.calls().iter().filter(|c| c.starts_with("POST unregister")).count();
    assert_eq!(posts, 2);
}
