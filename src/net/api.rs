//! Identity check against the remote identity service.
//!
//! Client-side (hydrate): a credentialed `GET` via `gloo-net`, so the
//! browser attaches any existing session cookie.
//! Server-side (SSR): no session is visible to the renderer, so the source
//! reports [`IdentityError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every way the check can fail is a distinct [`IdentityError`] variant so it
//! can be logged precisely, but callers above the resolver never see them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::IdentityResponse;
use crate::config::ClientConfig;

/// Ways the identity check can fail to produce a response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The request never completed (network down, CORS, aborted).
    #[error("identity request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("identity service returned status {status}")]
    Status { status: u16 },

    /// The body was not a valid identity response.
    #[error("identity response malformed: {0}")]
    Decode(String),

    /// No transport exists in this build (server-side render).
    #[error("identity check not available in this environment")]
    Unavailable,
}

/// Something that can answer "who am I" for the current session.
#[allow(async_fn_in_trait)]
pub trait IdentitySource {
    /// Issue one identity request.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] when no well-formed response is received.
    async fn fetch_identity(&self) -> Result<IdentityResponse, IdentityError>;
}

/// Identity source backed by the browser `fetch` API.
#[derive(Debug, Clone)]
pub struct HttpIdentitySource {
    url: String,
}

impl HttpIdentitySource {
    pub fn new(config: &ClientConfig) -> Self {
        Self { url: config.identity_url() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl IdentitySource for HttpIdentitySource {
    async fn fetch_identity(&self) -> Result<IdentityResponse, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| IdentityError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(IdentityError::Status { status: resp.status() });
            }
            resp.json::<IdentityResponse>()
                .await
                .map_err(|e| IdentityError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(IdentityError::Unavailable)
        }
    }
}
