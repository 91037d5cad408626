//! # Auth Token Client Library
//!
//! Exchanges an email/password pair for an identity token against the
//! Firebase Auth `accounts:signInWithPassword` endpoint, or a local auth
//! emulator when one is configured.
//!
//! Modules:
//! - `config` — client settings, logging settings and the YAML config loader
//! - `auth` — endpoint resolution, wire payloads, transport and `TokenClient`
//! - `error` — error taxonomy returned by the client
//! - `utils` — constants and logging initialisation

pub mod auth;
pub mod config;
pub mod error;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::auth::{Endpoint, SignInRequest, SignInResponse, TokenClient, Transport};
pub use crate::config::settings::ClientConfig;
pub use crate::error::TokenClientError;
