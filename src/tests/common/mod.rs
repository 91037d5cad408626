// tests/common/mod.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use http::StatusCode;
use reqwest::Url;

use crate::auth::transport::{Transport, TransportResponse};
use crate::auth::SignInRequest;
use crate::error::TokenClientError;

pub const API_KEY: &str = "API_KEY";

/// Canned outcome returned by `MockTransport`.
#[derive(Clone)]
pub enum Reply {
    Response(StatusCode, String),
    Fail(&'static str),
}

/// In-memory transport recording every submitted request.
#[derive(Clone)]
pub struct MockTransport {
    reply: Reply,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(Url, Vec<u8>)>>>,
}

impl MockTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ok_json(body: serde_json::Value) -> Self {
        Self::new(Reply::Response(StatusCode::OK, body.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(Url, Vec<u8>)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Transport for MockTransport {
    async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<TransportResponse, TokenClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push((url.clone(), body));
        match &self.reply {
            Reply::Response(status, body) => Ok(TransportResponse::new(*status, body.as_bytes())),
            Reply::Fail(reason) => Err(TokenClientError::transport(*reason)),
        }
    }
}

pub fn valid_request() -> SignInRequest {
    SignInRequest::new("test@example.com", "secretPassword", true)
}
