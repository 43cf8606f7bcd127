//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board state they are handed and report user intent as
//! `BoardAction`s through a callback; none of them touch the network.

pub mod activity_card;
pub mod signup_form;
pub mod status_message;
