use http::StatusCode;
use tracing::debug;

use crate::auth::endpoint::Endpoint;
use crate::auth::payload::{SignInRequest, SignInResponse, UpstreamError};
use crate::auth::transport::{ReqwestTransport, Transport};
use crate::config::settings::ClientConfig;
use crate::error::TokenClientError;

/// Exchanges email/password credentials for an identity token.
///
/// Immutable after construction; one request per call, no retries.
#[derive(Debug, Clone)]
pub struct TokenClient<T = ReqwestTransport> {
    endpoint: Endpoint,
    transport: T,
}

impl TokenClient<ReqwestTransport> {
    /// Client over the default reqwest transport. Performs no network I/O.
    pub fn create(cfg: &ClientConfig) -> Result<Self, TokenClientError> {
        let endpoint = Endpoint::from_config(cfg)?;
        let transport = ReqwestTransport::from_config(cfg)?;
        Ok(Self { endpoint, transport })
    }
}

impl<T: Transport> TokenClient<T> {
    pub fn with_transport(cfg: &ClientConfig, transport: T) -> Result<Self, TokenClientError> {
        let endpoint = Endpoint::from_config(cfg)?;
        Ok(Self { endpoint, transport })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Identity token for `request`; may be empty when the upstream omits it.
    pub async fn token(&self, request: Option<&SignInRequest>) -> Result<String, TokenClientError> {
        let request = request.ok_or(TokenClientError::InvalidArgument("request body is nil"))?;
        self.sign_in(request).await.map(|response| response.id_token)
    }

    /// Same exchange as [`TokenClient::token`], returning the whole payload.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, TokenClientError> {
        let body = serde_json::to_vec(request).map_err(TokenClientError::Serialization)?;

        debug!(
            scheme = self.endpoint.scheme(),
            host = %self.endpoint.authority(),
            "submitting sign-in request"
        );
        let response = self.transport.post_json(self.endpoint.url(), body).await?;

        if response.status != StatusCode::OK {
            debug!(status = %response.status, "sign-in request rejected");
            return Err(TokenClientError::Authentication {
                status: response.status,
                upstream: UpstreamError::parse(&response.body),
            });
        }

        serde_json::from_slice(&response.body).map_err(TokenClientError::Deserialization)
    }
}
