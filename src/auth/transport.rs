use std::future::Future;
use std::time::Duration;

use http::header::CONTENT_TYPE;
use http::StatusCode;
use reqwest::{Client, Url};

use crate::config::settings::ClientConfig;
use crate::error::TokenClientError;
use crate::utils::constants::CONTENT_TYPE_JSON;

/// Status and fully read body of a response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Submits a JSON body and returns status plus body.
///
/// Implementations must drain the body before returning, whatever the status.
/// I/O failures are `TokenClientError::Transport`, except a body read failing
/// after a non-200 status, which yields that status with an empty body.
pub trait Transport: Send + Sync {
    fn post_json(
        &self,
        url: &Url,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<TransportResponse, TokenClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self, TokenClientError> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = cfg.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build().map_err(|err| {
            TokenClientError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self::new(client))
    }
}

impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<TransportResponse, TokenClientError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await
            .map_err(TokenClientError::transport)?;

        let status = response.status();
        // a rejected request stays rejected even when its body cannot be read
        let body = if status == StatusCode::OK {
            response.bytes().await.map_err(TokenClientError::transport)?
        } else {
            response.bytes().await.unwrap_or_default()
        };
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
