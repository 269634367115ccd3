//! cf CLI config resolution
//!
//! Produces the [`CfConfig`] the client is built from, reading the
//! `config.json` the `cf` CLI writes after `cf login`.

use log::debug;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{cf_config, uaa};
use crate::error::{CfError, Result};

/// Everything the client needs to talk to one Cloud Controller
#[derive(Clone)]
pub struct CfConfig {
    /// Cloud Controller API base URL
    pub target: String,
    /// UAA base URL (token endpoint lives under it)
    pub uaa_endpoint: String,
    /// Full `Authorization` header value, e.g. `bearer eyJ...`
    pub access_token: String,
    pub refresh_token: String,
    pub client_id: String,
    pub client_secret: String,
    /// Skip TLS certificate verification for both API and UAA
    pub allow_insecure_tls: bool,
}

impl std::fmt::Debug for CfConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CfConfig")
            .field("target", &self.target)
            .field("uaa_endpoint", &self.uaa_endpoint)
            .field("client_id", &self.client_id)
            .field("allow_insecure_tls", &self.allow_insecure_tls)
            .finish_non_exhaustive()
    }
}

/// Subset of the cf CLI `config.json` we care about
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct CfCliConfigFile {
    #[serde(default)]
    target: String,
    #[serde(default)]
    uaa_endpoint: String,
    #[serde(default)]
    authorization_endpoint: String,
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default, rename = "UAAOAuthClient")]
    uaa_oauth_client: String,
    #[serde(default, rename = "UAAOAuthClientSecret")]
    uaa_oauth_client_secret: String,
    #[serde(default, rename = "SSLDisabled")]
    ssl_disabled: bool,
}

/// Config resolution with fallback logic
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve config from multiple sources with fallback:
    /// 1. Explicit path (if provided)
    /// 2. `$CF_HOME/.cf/config.json`
    /// 3. `~/.cf/config.json`
    pub fn resolve(explicit_path: Option<&Path>) -> Result<CfConfig> {
        let cf_home = std::env::var(cf_config::HOME_ENV_VAR).ok();
        let path = Self::config_path(explicit_path, cf_home.as_deref())
            .ok_or_else(|| CfError::ConfigNotFound(Self::not_found_message(None)))?;
        Self::load(&path)
    }

    /// Read and validate a cf CLI config file
    pub fn load(path: &Path) -> Result<CfConfig> {
        debug!("Looking for cf CLI config at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CfError::ConfigNotFound(Self::not_found_message(Some(path))));
            }
            Err(e) => {
                return Err(CfError::Credentials(format!(
                    "Could not read cf CLI config {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let file: CfCliConfigFile = serde_json::from_str(&content).map_err(|e| {
            CfError::Credentials(format!(
                "Could not parse cf CLI config {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::into_config(file, path)
    }

    fn into_config(file: CfCliConfigFile, path: &Path) -> Result<CfConfig> {
        if file.target.is_empty() {
            return Err(CfError::Config(format!(
                "No API target in {}; run 'cf api <url>' first",
                path.display()
            )));
        }
        if file.access_token.is_empty() {
            return Err(CfError::Config(format!(
                "No access token in {}; run 'cf login' first",
                path.display()
            )));
        }

        let uaa_endpoint = if file.uaa_endpoint.is_empty() {
            file.authorization_endpoint
        } else {
            file.uaa_endpoint
        };
        if uaa_endpoint.is_empty() {
            return Err(CfError::Config(format!(
                "No UAA endpoint in {}",
                path.display()
            )));
        }

        let client_id = if file.uaa_oauth_client.is_empty() {
            uaa::DEFAULT_CLIENT_ID.to_string()
        } else {
            file.uaa_oauth_client
        };

        Ok(CfConfig {
            target: file.target,
            uaa_endpoint,
            access_token: file.access_token,
            refresh_token: file.refresh_token,
            client_id,
            client_secret: file.uaa_oauth_client_secret,
            allow_insecure_tls: file.ssl_disabled,
        })
    }

    /// Pick the config file location
    fn config_path(explicit_path: Option<&Path>, cf_home: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit_path {
            debug!("Using cf CLI config from CLI argument");
            return Some(path.to_path_buf());
        }
        if let Some(home) = cf_home.filter(|h| !h.is_empty()) {
            debug!("Using cf CLI config under {}", cf_config::HOME_ENV_VAR);
            return Some(Path::new(home).join(cf_config::FILE_PATH));
        }
        dirs::home_dir().map(|p| p.join(cf_config::FILE_PATH))
    }

    fn not_found_message(path: Option<&Path>) -> String {
        let checked = path
            .map(|p| format!(" (checked {})", p.display()))
            .unwrap_or_default();
        format!(
            "No cf CLI config found{}. Log in first:\n\
             \n\
             1. cf login -a <api-url>\n\
             2. or point at a config:  cfctl --config <path> ...\n\
             3. or set {} to the directory containing .cf/",
            checked,
            cf_config::HOME_ENV_VAR
        )
    }
}
