//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::BoardConfig;
use crate::pages::board::BoardPage;
use crate::state::board::BoardState;

/// Root application component.
///
/// Provides the board state signal and config to the page. There is no router:
/// the bundle is served as a single static page wherever the backend mounts it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(BoardState::default()));
    provide_context(BoardConfig::from_env());

    view! {
        <Title text="Mergington High School Activities"/>
        <BoardPage/>
    }
}
