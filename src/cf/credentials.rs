//! Token pair and UAA client identity held by the client

use serde::Deserialize;
use std::fmt;

use crate::config::uaa;

/// Credentials used to authenticate API requests
///
/// `access_token` and `refresh_token` are replaced together after a
/// successful refresh; `client_id` and `client_secret` never change.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
    refresh_token: String,
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials from a token pair and UAA client identity
    pub fn new(
        access_token: String,
        refresh_token: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            client_id,
            client_secret,
        }
    }

    /// Value sent verbatim in the `Authorization` header
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Swap in a freshly issued token pair
    pub(crate) fn replace_tokens(&mut self, tokens: TokenResponse) {
        self.access_token = format!("{} {}", uaa::TOKEN_TYPE_PREFIX, tokens.access_token);
        self.refresh_token = tokens.refresh_token;
    }
}

// Tokens and secrets stay out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Body of a successful UAA refresh-token grant
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}
