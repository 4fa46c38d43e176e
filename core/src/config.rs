//! Connection settings for a `CheckersClient`.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CheckersError;

/// Bytes left alone by `encodeURI`: the component set plus URI delimiters.
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Base URL and credential pair. Immutable after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    client_key: String,
    client_secret: String,
}

impl ClientConfig {
    /// Trailing slashes are stripped from `url` before it is URI-encoded.
    pub fn new(
        url: &str,
        client_key: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, CheckersError> {
        let trimmed = url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(CheckersError::InvalidConfig("base URL must not be empty".to_string()));
        }
        let client_key = client_key.into();
        if client_key.is_empty() {
            return Err(CheckersError::InvalidConfig("client key must not be empty".to_string()));
        }
        let client_secret = client_secret.into();
        if client_secret.is_empty() {
            return Err(CheckersError::InvalidConfig("client secret must not be empty".to_string()));
        }
        Ok(Self {
            base_url: utf8_percent_encode(trimmed, URI).to_string(),
            client_key,
            client_secret,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("client_key", &self.client_key)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
