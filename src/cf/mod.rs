//! Cloud Controller API client module
//!
//! Authenticated GETs with a single token-refresh retry, a sequential
//! pagination walker, per-endpoint resource decoders and the
//! per-org/space usage rollup.

pub mod apps;
mod cf_config;
mod client;
pub mod commands;
mod credentials;
pub mod events;
pub mod metrics;
pub mod models;
pub mod organizations;
mod pagination;
pub mod service_bindings;
pub mod spaces;
mod token;
pub mod traits;

pub use apps::{App, AppEntity};
pub use cf_config::{CfConfig, ConfigResolver};
pub use client::{CfClient, RawResponse};
pub use commands::{
    run_curl_command, run_get_command, run_list_command, run_metrics_command,
};
pub use credentials::Credentials;
pub use events::{event_types, Event, EventEntity};
pub use metrics::{summarize, SummaryScope, UsageCounts, UsageData, UsageSummary};
pub use models::{Metadata, Resource};
pub use organizations::{Organization, OrganizationEntity};
pub use service_bindings::{ServiceBinding, ServiceBindingEntity};
pub use spaces::{Space, SpaceEntity};
pub use traits::{CfPage, CfResource, PaginatedResponse};
