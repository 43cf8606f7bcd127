//! Transport-level failures for activity API calls.
//!
//! Application-level rejections (non-2xx with a `detail` body) are not errors
//! here; they travel as `MutationOutcome::Rejected` so the caller can show the
//! server's text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid api base url {base:?}: {message}")]
    Url { base: String, message: String },
    #[error("activity api not available outside the browser")]
    Unavailable,
}
