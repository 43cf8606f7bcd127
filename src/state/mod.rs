//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `board` holds the rendered projection of the last activities response plus
//! the signup form, `status` the single transient message, and `store` the
//! seam that lets the controller write either a Leptos signal or a plain cell.

pub mod board;
pub mod status;
pub mod store;
