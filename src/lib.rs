//! cfctl - Explore Cloud Foundry Cloud Controller APIs
//!
//! A read-only client and CLI for paginated, token-authenticated
//! Cloud Controller (v2) APIs.
//!
//! # Features
//!
//! - Reuses the cf CLI login (`~/.cf/config.json`)
//! - Transparent access-token refresh, retried once per request
//! - Automatic pagination, merged into one result set
//! - Per-organization and per-space usage rollup
//! - Table or JSON output
//!
//! # Example
//!
//! ```bash
//! # List all organizations
//! cfctl get orgs
//!
//! # Spaces of one organization
//! cfctl get spaces --org my-org
//!
//! # Apps in a space as JSON
//! cfctl get apps --space dev -o json
//!
//! # App, audit event and binding counts per org and space
//! cfctl metrics --org my-org
//!
//! # Every route, all pages
//! cfctl list /v2/routes
//! ```

pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use cf::{
    run_curl_command, run_get_command, run_list_command, run_metrics_command, App, CfClient,
    CfConfig, CfPage, CfResource, ConfigResolver, Credentials, Event, Organization,
    PaginatedResponse, RawResponse, Resource, ServiceBinding, Space, UsageSummary,
};
pub use cli::{Cli, Command, GetResource, OutputFormat};
pub use error::{CfError, Result};
