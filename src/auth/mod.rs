//! Sign-in endpoint, wire payloads, transport and the token client itself.

pub mod endpoint;
pub mod payload;
pub mod token_client;
pub mod transport;

pub use endpoint::Endpoint;
pub use payload::{SignInRequest, SignInResponse, UpstreamError};
pub use token_client::TokenClient;
pub use transport::{ReqwestTransport, Transport, TransportResponse};
