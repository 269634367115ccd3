//! Common CLI types shared across commands

use clap::ValueEnum;

use crate::cf::event_types;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Audit event types that can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventKind {
    AppCreate,
    AppStart,
    AppUpdate,
    SpaceCreate,
}

impl EventKind {
    /// Cloud Controller event type string
    pub fn as_api_str(&self) -> &'static str {
        match self {
            EventKind::AppCreate => event_types::APP_CREATE,
            EventKind::AppStart => event_types::APP_START,
            EventKind::AppUpdate => event_types::APP_UPDATE,
            EventKind::SpaceCreate => event_types::SPACE_CREATE,
        }
    }
}
