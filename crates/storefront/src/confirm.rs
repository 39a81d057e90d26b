//! Client for the remote pre-order confirm endpoint.
//!
//! One request: POST `{items, time, comment}` as JSON, expecting
//! `{ok: boolean, error?: string}` back. Any transport failure, non-success
//! status, or `ok != true` is a failure; a server-supplied `error` string
//! is kept for the user-facing banner.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use farmstand_core::ProductEntry;

/// Errors from submitting a pre-order.
#[derive(Debug, Error)]
pub enum ConfirmError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("confirm endpoint returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Endpoint answered 2xx but did not acknowledge the pre-order.
    #[error("pre-order rejected by server")]
    Rejected { message: Option<String> },
}

impl ConfirmError {
    /// The server-supplied error message, when one was returned.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http(_) => None,
            Self::Status { message, .. } | Self::Rejected { message } => message.as_deref(),
        }
    }
}

/// Request body for the confirm endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmRequest {
    /// The full pre-order collection, quantities normalized.
    pub items: Vec<ProductEntry>,
    /// Free-text pickup time.
    pub time: String,
    /// Free-text comment.
    pub comment: String,
}

/// Response body from the confirm endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmResponse {
    /// Explicit acknowledgement flag.
    pub ok: bool,
    /// Optional failure message.
    #[serde(default)]
    pub error: Option<String>,
}

/// Client for the pre-order confirm endpoint.
#[derive(Clone)]
pub struct ConfirmClient {
    inner: Arc<ConfirmClientInner>,
}

struct ConfirmClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl ConfirmClient {
    /// Create a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            inner: Arc::new(ConfirmClientInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// Submit a pre-order.
    ///
    /// The response body is decoded even on non-success statuses so a
    /// server-supplied `error` survives into the returned error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmError`] on transport failure, non-success status,
    /// or an unacknowledged (`ok != true`) response.
    pub async fn submit(&self, request: &ConfirmRequest) -> Result<(), ConfirmError> {
        debug!(items = request.items.len(), "submitting pre-order");

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<ConfirmResponse>().await.ok();

        if !status.is_success() {
            return Err(ConfirmError::Status {
                status: status.as_u16(),
                message: body.and_then(|b| b.error),
            });
        }

        match body {
            Some(body) if body.ok => Ok(()),
            Some(body) => Err(ConfirmError::Rejected { message: body.error }),
            // An unreadable success body is not an acknowledgement.
            None => Err(ConfirmError::Rejected { message: None }),
        }
    }
}
