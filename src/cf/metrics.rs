//! Usage rollup per organization and space
//!
//! Apps, service bindings and the app/space lifecycle audit events are
//! fetched once and counted against the space they belong to and the
//! organization that owns that space.

use log::debug;
use serde::Serialize;
use std::collections::HashMap;

use crate::cf::events::event_types;
use crate::cf::traits::CfResource;
use crate::cf::{App, CfClient, Event, Organization, ServiceBinding, Space};
use crate::error::Result;

/// Whether a summary row covers a whole organization or one space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryScope {
    Org,
    Space,
}

impl std::fmt::Display for SummaryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryScope::Org => write!(f, "org"),
            SummaryScope::Space => write!(f, "space"),
        }
    }
}

/// Counts collected for one organization or space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UsageCounts {
    pub apps: usize,
    pub app_creates: usize,
    pub app_starts: usize,
    pub app_updates: usize,
    pub space_creates: usize,
    pub service_bindings: usize,
}

#[derive(Debug, Clone, Copy)]
enum Metric {
    Apps,
    AppCreates,
    AppStarts,
    AppUpdates,
    SpaceCreates,
    ServiceBindings,
}

impl UsageCounts {
    fn bump(&mut self, metric: Metric) {
        let slot = match metric {
            Metric::Apps => &mut self.apps,
            Metric::AppCreates => &mut self.app_creates,
            Metric::AppStarts => &mut self.app_starts,
            Metric::AppUpdates => &mut self.app_updates,
            Metric::SpaceCreates => &mut self.space_creates,
            Metric::ServiceBindings => &mut self.service_bindings,
        };
        *slot += 1;
    }
}

/// One row of the usage rollup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageSummary {
    pub scope: SummaryScope,
    pub name: String,
    pub guid: String,
    /// Owning organization; an org row carries its own GUID
    pub organization_guid: String,
    #[serde(flatten)]
    pub counts: UsageCounts,
}

impl CfResource for UsageSummary {
    fn guid(&self) -> &str {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Every list the rollup is computed from
#[derive(Debug, Default)]
pub struct UsageData {
    pub orgs: Vec<Organization>,
    pub spaces: Vec<Space>,
    pub apps: Vec<App>,
    pub app_creates: Vec<Event>,
    pub app_starts: Vec<Event>,
    pub app_updates: Vec<Event>,
    pub space_creates: Vec<Event>,
    pub service_bindings: Vec<ServiceBinding>,
}

impl CfClient {
    /// Fetch everything the usage rollup needs, one endpoint after another
    pub async fn get_usage_data(&self) -> Result<UsageData> {
        let orgs = self.get_organizations().await?;
        let spaces = self.get_spaces(None).await?;
        let apps = self.get_apps(None).await?;
        let app_creates = self.get_events(Some(event_types::APP_CREATE)).await?;
        let app_starts = self.get_events(Some(event_types::APP_START)).await?;
        let app_updates = self.get_events(Some(event_types::APP_UPDATE)).await?;
        let space_creates = self.get_events(Some(event_types::SPACE_CREATE)).await?;
        let service_bindings = self.get_service_bindings(None).await?;

        debug!(
            "Usage data: {} orgs, {} spaces, {} apps, {} bindings",
            orgs.len(),
            spaces.len(),
            apps.len(),
            service_bindings.len()
        );

        Ok(UsageData {
            orgs,
            spaces,
            apps,
            app_creates,
            app_starts,
            app_updates,
            space_creates,
            service_bindings,
        })
    }
}

/// Counts keyed by space and org GUID, plus the lookups needed to place records
struct Tally<'a> {
    space_orgs: HashMap<&'a str, &'a str>,
    app_spaces: HashMap<&'a str, &'a str>,
    by_space: HashMap<&'a str, UsageCounts>,
    by_org: HashMap<&'a str, UsageCounts>,
}

impl<'a> Tally<'a> {
    fn new(data: &'a UsageData) -> Self {
        Self {
            space_orgs: data
                .spaces
                .iter()
                .map(|s| (s.guid(), s.organization_guid()))
                .collect(),
            app_spaces: data
                .apps
                .iter()
                .map(|a| (a.guid(), a.space_guid()))
                .collect(),
            by_space: HashMap::new(),
            by_org: HashMap::new(),
        }
    }

    /// Count against a known space and its org; false if the space is unknown
    fn space(&mut self, space_guid: &'a str, metric: Metric) -> bool {
        match self.space_orgs.get(space_guid).copied() {
            Some(org_guid) => {
                self.by_space.entry(space_guid).or_default().bump(metric);
                self.by_org.entry(org_guid).or_default().bump(metric);
                true
            }
            None => false,
        }
    }

    fn org(&mut self, org_guid: &'a str, metric: Metric) {
        if !org_guid.is_empty() {
            self.by_org.entry(org_guid).or_default().bump(metric);
        }
    }

    /// App events of a space that is no longer listed still count for its org
    fn app_event(&mut self, event: &'a Event, metric: Metric) {
        if !self.space(event.space_guid(), metric) {
            self.org(event.organization_guid(), metric);
        }
    }

    // The created space is not its own parent, so these only count for the org
    fn space_created(&mut self, event: &'a Event) {
        let org_guid = match event.organization_guid() {
            "" => self
                .space_orgs
                .get(event.space_guid())
                .copied()
                .unwrap_or(""),
            guid => guid,
        };
        self.org(org_guid, Metric::SpaceCreates);
    }

    fn binding(&mut self, binding: &'a ServiceBinding) {
        if let Some(space_guid) = self.app_spaces.get(binding.app_guid()).copied() {
            self.space(space_guid, Metric::ServiceBindings);
        }
    }

    fn counts(map: &HashMap<&'a str, UsageCounts>, guid: &str) -> UsageCounts {
        map.get(guid).copied().unwrap_or_default()
    }
}

/// Build one row per organization, each followed by its spaces
///
/// Rows keep the API order of orgs and spaces. Spaces whose organization is
/// not listed are left out.
pub fn summarize(data: &UsageData) -> Vec<UsageSummary> {
    let mut tally = Tally::new(data);

    for app in &data.apps {
        tally.space(app.space_guid(), Metric::Apps);
    }
    for event in &data.app_creates {
        tally.app_event(event, Metric::AppCreates);
    }
    for event in &data.app_starts {
        tally.app_event(event, Metric::AppStarts);
    }
    for event in &data.app_updates {
        tally.app_event(event, Metric::AppUpdates);
    }
    for event in &data.space_creates {
        tally.space_created(event);
    }
    for binding in &data.service_bindings {
        tally.binding(binding);
    }

    let mut rows = Vec::with_capacity(data.orgs.len() + data.spaces.len());
    for org in &data.orgs {
        rows.push(UsageSummary {
            scope: SummaryScope::Org,
            name: org.name().to_string(),
            guid: org.guid().to_string(),
            organization_guid: org.guid().to_string(),
            counts: Tally::counts(&tally.by_org, org.guid()),
        });
        for space in data
            .spaces
            .iter()
            .filter(|s| s.organization_guid() == org.guid())
        {
            rows.push(UsageSummary {
                scope: SummaryScope::Space,
                name: space.name().to_string(),
                guid: space.guid().to_string(),
                organization_guid: org.guid().to_string(),
                counts: Tally::counts(&tally.by_space, space.guid()),
            });
        }
    }
    rows
}
