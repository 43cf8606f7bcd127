//! Networking modules for the activity REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints and performs the HTTP calls, `types` defines the
//! wire schema, and `error` names the transport failures callers must absorb.

pub mod api;
pub mod error;
pub mod types;
