//! CLI argument parsing

mod common;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::defaults;

pub use common::{EventKind, OutputFormat};

/// Cloud Foundry resource explorer
#[derive(Parser, Debug)]
#[command(name = "cfctl")]
#[command(version)]
#[command(about = "Explore Cloud Foundry Cloud Controller resources", long_about = None)]
pub struct Cli {
    /// Path to a cf CLI config.json (default: $CF_HOME/.cf/config.json or ~/.cf/config.json)
    #[arg(long, global = true, env = "CFCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip TLS certificate verification (self-signed API/UAA endpoints)
    #[arg(short = 'k', long, global = true, default_value_t = false)]
    pub insecure: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress the progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Omit the table header row
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources of one kind
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
    /// Fetch every page of an API list endpoint and print the records as JSON
    List(ListArgs),
    /// Perform a single authenticated GET and print the response body
    Curl(CurlArgs),
    /// Count apps, app/space audit events and service bindings per org and space
    #[command(visible_alias = "summary")]
    Metrics(MetricsArgs),
}

/// Resource kinds for `get`
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Organizations
    #[command(visible_alias = "org")]
    Orgs(OrgArgs),
    /// Spaces
    #[command(visible_alias = "space")]
    Spaces(SpaceArgs),
    /// Applications
    #[command(visible_alias = "app")]
    Apps(AppArgs),
    /// Service bindings
    #[command(name = "service-bindings", visible_alias = "bindings")]
    ServiceBindings(BindingArgs),
    /// Audit events
    #[command(visible_alias = "event")]
    Events(EventArgs),
}

/// Output and filter options shared by every `get`
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Filter by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct OrgArgs {
    /// Show only the organization with this GUID
    pub guid: Option<String>,

    #[command(flatten)]
    pub common: OutputArgs,
}

#[derive(Args, Debug)]
pub struct SpaceArgs {
    /// Only spaces of this organization (name or GUID)
    #[arg(long)]
    pub org: Option<String>,

    #[command(flatten)]
    pub common: OutputArgs,
}

#[derive(Args, Debug)]
pub struct AppArgs {
    /// Only apps of this space (name or GUID)
    #[arg(long)]
    pub space: Option<String>,

    #[command(flatten)]
    pub common: OutputArgs,
}

#[derive(Args, Debug)]
pub struct BindingArgs {
    /// Only bindings of this app (name or GUID)
    #[arg(long)]
    pub app: Option<String>,

    #[command(flatten)]
    pub common: OutputArgs,
}

#[derive(Args, Debug)]
pub struct EventArgs {
    /// Only events of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub event_type: Option<EventKind>,

    #[command(flatten)]
    pub common: OutputArgs,
}

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Only this organization and its spaces (name or GUID)
    #[arg(long)]
    pub org: Option<String>,

    #[command(flatten)]
    pub common: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// API path, e.g. /v2/routes
    pub path: String,
}

#[derive(Args, Debug)]
pub struct CurlArgs {
    /// API path, e.g. /v2/info
    pub path: String,
}
