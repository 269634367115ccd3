//! Cloud Controller HTTP client: authenticated GETs with one refresh-and-retry

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::cf::cf_config::CfConfig;
use crate::cf::credentials::Credentials;
use crate::config::{api, uaa};
use crate::error::{body_snippet, CfError, Result};

/// Successful response from an authenticated GET
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Body as text, lossily decoded
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Cloud Controller API client
///
/// Owns the transport and the current token pair. Requests on one client are
/// expected to run one at a time; if they do overlap, token refresh is still
/// serialized through the credentials lock.
pub struct CfClient {
    client: Client,
    api_url: Url,
    token_url: Url,
    credentials: Mutex<Credentials>,
}

impl CfClient {
    /// Create a client from resolved cf config
    pub fn new(config: CfConfig) -> Result<Self> {
        let api_url = parse_base_url(&config.target, "API target")?;
        let uaa_url = parse_base_url(&config.uaa_endpoint, "UAA endpoint")?;
        let token_url = join_path(&uaa_url, uaa::TOKEN_PATH)?;

        if config.allow_insecure_tls {
            warn!(
                "TLS certificate verification is disabled for {} and {}",
                api_url, uaa_url
            );
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(config.allow_insecure_tls)
            .build()?;

        Ok(Self {
            client,
            api_url,
            token_url,
            credentials: Mutex::new(Credentials::new(
                config.access_token,
                config.refresh_token,
                config.client_id,
                config.client_secret,
            )),
        })
    }

    /// UAA token endpoint used for refresh
    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Snapshot of the current credentials
    pub async fn credentials(&self) -> Credentials {
        self.credentials.lock().await.clone()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn credentials_lock(&self) -> &Mutex<Credentials> {
        &self.credentials
    }

    /// Resolve an API path or next-page reference to a full URL
    ///
    /// Paths are appended to the API base, with or without a leading `/`.
    /// Absolute URLs are accepted only on the API's own origin so the bearer
    /// token never leaves it.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        if path.starts_with('/') {
            return join_path(&self.api_url, path);
        }
        let before_query = path.split('?').next().unwrap_or(path);
        if !before_query.contains("://") {
            return join_path(&self.api_url, &format!("/{}", path));
        }

        let url = Url::parse(path)
            .map_err(|e| CfError::Config(format!("Invalid API path '{}': {}", path, e)))?;
        if url.origin() != self.api_url.origin() {
            return Err(CfError::Config(format!(
                "Refusing to follow '{}': outside API target {}",
                url, self.api_url
            )));
        }
        Ok(url)
    }

    /// Perform an authenticated GET against the API
    ///
    /// On 401/403 the access token is refreshed once and the request retried;
    /// a second rejection is an [`CfError::Authentication`]. Transport errors
    /// are returned as-is and never retried.
    pub async fn execute_get(&self, path: &str) -> Result<RawResponse> {
        let url = self.resolve_url(path)?;
        let mut auth_retries = 0;

        loop {
            let token = self.credentials.lock().await.access_token().to_string();
            debug!("GET {} (attempt {})", url, auth_retries + 1);

            let response = self
                .client
                .get(url.clone())
                .header(AUTHORIZATION, &token)
                .send()
                .await?;
            let status = response.status();

            if status.is_success() {
                let body = response.bytes().await?;
                return Ok(RawResponse {
                    status: status.as_u16(),
                    body: body.to_vec(),
                });
            }

            if is_auth_failure(status) {
                if auth_retries >= api::MAX_AUTH_RETRIES {
                    debug!("GET {} still rejected after token refresh", url);
                    return Err(CfError::Authentication {
                        status: status.as_u16(),
                    });
                }
                auth_retries += 1;
                debug!("GET {} returned {}, refreshing access token", url, status);
                self.refresh_access_token(&token).await?;
                continue;
            }

            let body = match response.bytes().await {
                Ok(bytes) => body_snippet(&bytes),
                Err(e) => format!("<failed to read response body: {}>", e),
            };
            return Err(CfError::Api {
                status: status.as_u16(),
                body,
            });
        }
    }

    /// GET a path and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T> {
        let response = self.execute_get(path).await?;
        response
            .json()
            .map_err(|e| CfError::Json(format!("Failed to parse {}: {}", context, e)))
    }
}

fn is_auth_failure(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

fn parse_base_url(raw: &str, label: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| CfError::Config(format!("Invalid {} '{}': {}", label, raw, e)))
}

/// Append a path to a base URL, keeping any path prefix the base already has
fn join_path(base: &Url, path: &str) -> Result<Url> {
    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|e| CfError::Config(format!("Invalid URL '{}': {}", joined, e)))
}

#[cfg(test)]
impl CfClient {
    /// Create a test client pointing API and UAA at mock servers
    pub fn test_client(api_uri: &str, uaa_uri: &str) -> Self {
        Self::new(CfConfig {
            target: api_uri.to_string(),
            uaa_endpoint: uaa_uri.to_string(),
            access_token: "bearer old-access".to_string(),
            refresh_token: "old-refresh".to_string(),
            client_id: "cf".to_string(),
            client_secret: "".to_string(),
            allow_insecure_tls: false,
        })
        .unwrap()
    }
}
