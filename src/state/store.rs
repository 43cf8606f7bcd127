//! Storage seam between the controller and reactive UI state.
//!
//! In the app the store is the `RwSignal<BoardState>` provided via context, so
//! writes re-render the page. Tests swap in a plain shared cell.

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::board::BoardState;

/// Read/write access to the board state from async operations.
pub trait BoardStore: Clone + 'static {
    fn with_board<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R;
    fn update_board(&self, f: impl FnOnce(&mut BoardState));
}

impl BoardStore for RwSignal<BoardState> {
    fn with_board<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_board(&self, f: impl FnOnce(&mut BoardState)) {
        self.update(f);
    }
}

#[cfg(test)]
pub(crate) use local::LocalBoard;
