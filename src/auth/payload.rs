use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `accounts:signInWithPassword`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, return_secure_token: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            return_secure_token,
        }
    }
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .field("return_secure_token", &self.return_secure_token)
            .finish()
    }
}

/// Successful sign-in payload. Absent or `null` fields decode to empty
/// values, fields of the wrong JSON type fail the decode.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token: String,
    /// seconds, string encoded (e.g. "3600")
    #[serde(deserialize_with = "null_as_default")]
    pub expires_in: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub registered: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SignInResponse {
    pub fn expires_in_seconds(&self) -> Option<u64> {
        self.expires_in.trim().parse().ok()
    }

    /// Expiration instant of the identity token issued at `issued_at`.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in_seconds()?).ok()?;
        issued_at.checked_add_signed(Duration::try_seconds(secs)?)
    }
}

/// Error payload the auth endpoint returns along with a non-200 status.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpstreamError {
    pub error: UpstreamErrorBody,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpstreamErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl UpstreamError {
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}
