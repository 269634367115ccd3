//! Table rows for each resource kind

use super::TableRow;
use crate::cf::{
    App, CfResource, Event, Organization, ServiceBinding, Space, SummaryScope, UsageSummary,
};

impl TableRow for Organization {
    fn headers() -> &'static [&'static str] {
        &["Name", "GUID", "Status", "Created At"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.guid().to_string(),
            self.status().to_string(),
            self.created_at().to_string(),
        ]
    }
}

impl TableRow for Space {
    fn headers() -> &'static [&'static str] {
        &["Name", "GUID", "Org GUID", "Created At"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.guid().to_string(),
            self.organization_guid().to_string(),
            self.created_at().to_string(),
        ]
    }
}

impl TableRow for App {
    fn headers() -> &'static [&'static str] {
        &["Name", "GUID", "State", "Instances", "Memory", "Buildpack", "Space GUID"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.guid().to_string(),
            self.state().to_string(),
            self.instances().to_string(),
            format!("{}M", self.memory()),
            self.buildpack().to_string(),
            self.space_guid().to_string(),
        ]
    }
}

impl TableRow for ServiceBinding {
    fn headers() -> &'static [&'static str] {
        &["GUID", "Name", "App GUID", "Service Instance GUID"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.guid().to_string(),
            self.name().to_string(),
            self.app_guid().to_string(),
            self.service_instance_guid().to_string(),
        ]
    }
}

impl TableRow for Event {
    fn headers() -> &'static [&'static str] {
        &["Timestamp", "Type", "Actee", "Actee Name", "Actor", "Space GUID"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.timestamp().to_string(),
            self.event_type().to_string(),
            self.actee().to_string(),
            self.name().to_string(),
            self.actor_name().to_string(),
            self.space_guid().to_string(),
        ]
    }
}

impl TableRow for UsageSummary {
    fn headers() -> &'static [&'static str] {
        &[
            "Scope",
            "Name",
            "GUID",
            "Apps",
            "App Creates",
            "App Starts",
            "App Updates",
            "Space Creates",
            "Bindings",
        ]
    }

    fn row(&self) -> Vec<String> {
        let name = match self.scope {
            SummaryScope::Org => self.name.clone(),
            SummaryScope::Space => format!("  {}", self.name),
        };
        vec![
            self.scope.to_string(),
            name,
            self.guid.clone(),
            self.counts.apps.to_string(),
            self.counts.app_creates.to_string(),
            self.counts.app_starts.to_string(),
            self.counts.app_updates.to_string(),
            self.counts.space_creates.to_string(),
            self.counts.service_bindings.to_string(),
        ]
    }
}
