//! UAA refresh-token grant

use log::debug;
use reqwest::header::ACCEPT;

use crate::cf::client::CfClient;
use crate::cf::credentials::TokenResponse;
use crate::error::{body_snippet, CfError, Result};

impl CfClient {
    /// Exchange the refresh token for a new token pair
    ///
    /// `stale_token` is the access token the rejected request was sent with.
    /// The credentials lock is held for the whole exchange; if the stored token
    /// no longer matches `stale_token`, another request already refreshed and
    /// nothing is sent. On any failure the stored credentials are untouched.
    pub(crate) async fn refresh_access_token(&self, stale_token: &str) -> Result<()> {
        let mut creds = self.credentials_lock().lock().await;
        if creds.access_token() != stale_token {
            debug!("Access token already refreshed, skipping refresh");
            return Ok(());
        }

        let token_url = self.token_url();
        debug!("Refreshing access token via {}", token_url);

        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", creds.refresh_token()),
            ("client_id", creds.client_id()),
            ("client_secret", creds.client_secret()),
        ];

        let response = self
            .http()
            .post(token_url.clone())
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| CfError::AuthRefresh {
                message: format!("request to {} failed", token_url),
                source: Some(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .map(|b| body_snippet(&b))
                .unwrap_or_default();
            return Err(CfError::AuthRefresh {
                message: format!("UAA returned status {}: {}", status.as_u16(), body),
                source: None,
            });
        }

        let body = response.bytes().await.map_err(|e| CfError::AuthRefresh {
            message: "failed to read token response".to_string(),
            source: Some(e),
        })?;

        let tokens: TokenResponse = serde_json::from_slice(&body).map_err(|e| {
            CfError::ProtocolViolation(format!(
                "could not parse token response from {}: {}",
                token_url, e
            ))
        })?;

        creds.replace_tokens(tokens);
        debug!("Access token refreshed");
        Ok(())
    }
}
