use std::fmt;

use reqwest::Url;

use crate::config::settings::ClientConfig;
use crate::error::TokenClientError;
use crate::utils::constants::{
    API_KEY_QUERY_PARAM, FIREBASE_AUTH_HOST, FIREBASE_SIGN_IN_PATH, SCHEME_HTTP, SCHEME_HTTPS,
};

/// Resolved sign-in endpoint. Built once per client, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Production endpoint, redirected to `http://<emulator_host>` when an
    /// emulator host is configured.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self, TokenClientError> {
        let api_key = cfg
            .api_key()
            .ok_or_else(|| TokenClientError::Configuration("API key not specified".to_owned()))?;

        let (scheme, host) = match cfg.emulator_host() {
            Some(emulator_host) => (SCHEME_HTTP, emulator_host),
            None => (SCHEME_HTTPS, FIREBASE_AUTH_HOST),
        };
        Self::build(scheme, host, api_key)
    }

    fn build(scheme: &str, host: &str, api_key: &str) -> Result<Self, TokenClientError> {
        let raw = format!("{scheme}://{host}{FIREBASE_SIGN_IN_PATH}");
        let mut url = Url::parse(&raw).map_err(|err| {
            TokenClientError::Configuration(format!("invalid endpoint '{raw}': {err}"))
        })?;
        // guards against a host value smuggling its own path or query
        if url.path() != FIREBASE_SIGN_IN_PATH || url.query().is_some() {
            return Err(TokenClientError::Configuration(format!(
                "invalid endpoint host '{host}'"
            )));
        }
        url.query_pairs_mut().append_pair(API_KEY_QUERY_PARAM, api_key);
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host with port, e.g. `0.0.0.0:9099`.
    pub fn authority(&self) -> String {
        match (self.url.host_str(), self.url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_owned(),
            _ => String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_endpoint() {
        let endpoint = Endpoint::from_config(&ClientConfig::new("API_KEY")).unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=API_KEY"
        );
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.authority(), "identitytoolkit.googleapis.com");
    }

    #[test]
    fn emulator_endpoint() {
        let cfg = ClientConfig::new("API_KEY").with_emulator_host("0.0.0.0:9099");
        let endpoint = Endpoint::from_config(&cfg).unwrap();
        assert_eq!(
            endpoint.to_string(),
            "http://0.0.0.0:9099/v1/accounts:signInWithPassword?key=API_KEY"
        );
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.authority(), "0.0.0.0:9099");
    }

    #[test]
    fn empty_emulator_host_keeps_production() {
        let cfg = ClientConfig::new("API_KEY").with_emulator_host("");
        let endpoint = Endpoint::from_config(&cfg).unwrap();
        assert_eq!(endpoint.scheme(), "https");
    }

    #[test]
    fn missing_api_key_fails() {
        let err = Endpoint::from_config(&ClientConfig::default()).unwrap_err();
        assert!(matches!(err, TokenClientError::Configuration(ref msg) if msg == "API key not specified"));
    }

    #[test]
    fn api_key_is_query_encoded() {
        let endpoint = Endpoint::from_config(&ClientConfig::new("k&key=evil")).unwrap();
        assert_eq!(endpoint.url().query(), Some("key=k%26key%3Devil"));
        let pairs: Vec<_> = endpoint.url().query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, "k&key=evil");
    }

    #[test]
    fn invalid_emulator_host_fails() {
        for host in ["bad host:9099", "localhost:9099/other?x=1"] {
            let cfg = ClientConfig::new("API_KEY").with_emulator_host(host);
            assert!(
                matches!(Endpoint::from_config(&cfg), Err(TokenClientError::Configuration(_))),
                "host {host} should be rejected"
            );
        }
    }
}
