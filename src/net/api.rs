//! REST API client for the activity service.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures surface as `ApiError`. A non-2xx mutation
//! response is not an error: it becomes `MutationOutcome::Rejected` carrying
//! the server's `detail` text when one was sent.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use url::{Position, Url};

use super::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use super::types::MutationBody;
use super::types::{Activity, MutationOutcome};

/// Placeholder origin used to build origin-relative URLs.
const RELATIVE_ROOT: &str = "http://relative.invalid/";

/// Operations the board needs from the activity backend.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// `GET /activities`, in server order.
    async fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`.
    async fn signup(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError>;

    /// `POST /activities/{activity}/unregister?email={email}`.
    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError>;
}

/// URL for the activity collection.
///
/// # Errors
///
/// Returns `ApiError::Url` if `api_base` is not a usable absolute URL.
pub fn activities_endpoint(api_base: &str) -> Result<String, ApiError> {
    endpoint(api_base, &["activities"], None)
}

/// URL for signing `email` up to `activity`.
///
/// # Errors
///
/// Returns `ApiError::Url` if `api_base` is not a usable absolute URL.
pub fn signup_endpoint(api_base: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    endpoint(api_base, &["activities", activity, "signup"], Some(email))
}

/// URL for removing `email` from `activity`.
///
/// # Errors
///
/// Returns `ApiError::Url` if `api_base` is not a usable absolute URL.
pub fn unregister_endpoint(api_base: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    endpoint(api_base, &["activities", activity, "unregister"], Some(email))
}

fn endpoint(api_base: &str, segments: &[&str], email: Option<&str>) -> Result<String, ApiError> {
    let relative = api_base.is_empty();
    let root = if relative { RELATIVE_ROOT } else { api_base };
    let url_error = |message: String| ApiError::Url { base: api_base.to_owned(), message };

    let mut url = Url::parse(root).map_err(|e| url_error(e.to_string()))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| url_error("cannot be a base".to_owned()))?;
        path.pop_if_empty();
        path.extend(segments);
    }
    if let Some(email) = email {
        url.query_pairs_mut().append_pair("email", email);
    }

    if relative {
        Ok(url[Position::BeforePath..].to_owned())
    } else {
        Ok(url.into())
    }
}

/// Which responses must carry a decodable JSON body.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyPolicy {
    /// Body is decoded for every status; a bad body is a transport failure.
    Always,
    /// Body is only required when the server rejected the request.
    OnRejection,
}

/// Turn a mutation response into an outcome according to `policy`.
#[cfg(any(test, feature = "csr"))]
fn classify_mutation(
    ok: bool,
    status: u16,
    body: Result<MutationBody, ApiError>,
    policy: BodyPolicy,
) -> Result<MutationOutcome, ApiError> {
    if ok {
        let message = match policy {
            BodyPolicy::Always => body?.message,
            BodyPolicy::OnRejection => body.ok().and_then(|b| b.message),
        };
        return Ok(MutationOutcome::Accepted { message });
    }
    Ok(MutationOutcome::Rejected { status, detail: body?.detail })
}

/// Browser HTTP implementation of [`ActivityApi`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpActivityApi {
    api_base: String,
}

impl HttpActivityApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[cfg(feature = "csr")]
    async fn post_mutation(&self, url: String, policy: BodyPolicy) -> Result<MutationOutcome, ApiError> {
        log::debug!("POST {url}");
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp
            .json::<MutationBody>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
        classify_mutation(resp.ok(), resp.status(), body, policy)
    }
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = activities_endpoint(&self.api_base)?;
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let list = resp
                .json::<super::types::ActivityList>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(list.into_inner())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.api_base, activity, email)?;
            self.post_mutation(url, BodyPolicy::Always).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = unregister_endpoint(&self.api_base, activity, email)?;
            self.post_mutation(url, BodyPolicy::OnRejection).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }
}
