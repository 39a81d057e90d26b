//! Integration tests for Farmstand.
//!
//! The tests drive a [`farmstand_storefront::CartManager`] end to end
//! against a local mock of the `POST /preorder/confirm` endpoint. The mock
//! binds an ephemeral port, answers with a scripted status and body, and
//! records every request it receives so tests can assert on the submitted
//! payload (or on the absence of any call at all).
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p farmstand-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use url::Url;

/// A running mock of the pre-order confirm endpoint.
pub struct MockConfirmServer {
    /// Full URL of the confirm endpoint.
    pub url: Url,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<serde_json::Value>>>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<serde_json::Value>,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<serde_json::Value>>>,
}

async fn confirm(State(state): State<MockState>, Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_request.lock().expect("request log poisoned") = Some(body);
    (state.status, Json((*state.body).clone()))
}

impl MockConfirmServer {
    /// Spawn a confirm endpoint answering with the given status and body.
    ///
    /// # Panics
    ///
    /// Panics when no local port can be bound.
    pub async fn spawn(status: StatusCode, body: serde_json::Value) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_request = Arc::new(Mutex::new(None));
        let state = MockState {
            status,
            body: Arc::new(body),
            hits: Arc::clone(&hits),
            last_request: Arc::clone(&last_request),
        };

        let app = Router::new()
            .route("/preorder/confirm", post(confirm))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock confirm server");
        let addr = listener.local_addr().expect("mock server has no address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("mock confirm server crashed");
        });

        let url = format!("http://{addr}/preorder/confirm")
            .parse()
            .expect("mock server URL is valid");
        Self {
            url,
            hits,
            last_request,
        }
    }

    /// How many confirm requests arrived.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// The most recent request body, if any arrived.
    ///
    /// # Panics
    ///
    /// Panics when the request log mutex is poisoned.
    #[must_use]
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.last_request
            .lock()
            .expect("request log poisoned")
            .clone()
    }
}
