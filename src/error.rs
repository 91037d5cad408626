//! Error taxonomy returned by the token client.

use http::StatusCode;
use thiserror::Error;

use crate::auth::payload::UpstreamError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum TokenClientError {
    /// Missing API key or an endpoint that cannot be built from the config.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("failed to serialize sign-in request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Any status other than 200. `upstream` is filled only when the body
    /// carried a decodable error payload.
    #[error("request did not succeed: {status}")]
    Authentication {
        status: StatusCode,
        upstream: Option<UpstreamError>,
    },

    #[error("failed to deserialize sign-in response: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl TokenClientError {
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        TokenClientError::Transport(err.into())
    }

    /// Upstream error message (e.g. `INVALID_PASSWORD`) for authentication failures.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            TokenClientError::Authentication {
                upstream: Some(upstream),
                ..
            } => Some(upstream.error.message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::payload::UpstreamErrorBody;

    #[test]
    fn authentication_error_keeps_coarse_message() {
        let err = TokenClientError::Authentication {
            status: StatusCode::BAD_REQUEST,
            upstream: Some(UpstreamError {
                error: UpstreamErrorBody {
                    code: 400,
                    message: "INVALID_PASSWORD".to_owned(),
                },
            }),
        };
        assert_eq!(err.to_string(), "request did not succeed: 400 Bad Request");
        assert_eq!(err.upstream_message(), Some("INVALID_PASSWORD"));
    }

    #[test]
    fn upstream_message_absent_for_other_errors() {
        let err = TokenClientError::InvalidArgument("request body is nil");
        assert_eq!(err.upstream_message(), None);
        assert_eq!(err.to_string(), "invalid argument: request body is nil");
    }
}
