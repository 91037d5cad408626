//! Shared constants and invariants

// Environment variables read by `ClientConfig::from_env`
pub const FIREBASE_API_KEY_VAR: &str = "FIREBASE_API_KEY";
pub const FIREBASE_AUTH_EMULATOR_HOST_VAR: &str = "FIREBASE_AUTH_EMULATOR_HOST";
pub const FIREBASE_AUTH_TIMEOUT_MS_VAR: &str = "FIREBASE_AUTH_TIMEOUT_MS";

// Endpoint parts
pub const SCHEME_HTTP: &str = "http";
pub const SCHEME_HTTPS: &str = "https";
pub const FIREBASE_AUTH_HOST: &str = "identitytoolkit.googleapis.com";
pub const FIREBASE_SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";
pub const API_KEY_QUERY_PARAM: &str = "key";

pub const CONTENT_TYPE_JSON: &str = "application/json";
