//! Common traits for Cloud Controller resources and pages

use serde::Deserialize;

/// Common trait for resources listed by the API (orgs, spaces, apps, ...)
pub trait CfResource {
    /// Get the resource GUID
    fn guid(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or GUID
    fn matches(&self, input: &str) -> bool {
        self.guid() == input || self.name() == input
    }

    /// Check if the name contains the given filter
    fn name_contains(&self, filter: &str) -> bool {
        self.name().contains(filter)
    }
}

/// Trait for one page of a paginated API response
///
/// Implement this for a page envelope to use it with
/// `CfClient::fetch_pages()`; the page's `Deserialize` impl is where
/// per-endpoint record decoding happens.
pub trait PaginatedResponse<T> {
    /// Consume self and return the records on this page
    fn into_resources(self) -> Vec<T>;
    /// Total number of pages the API claims
    fn total_pages(&self) -> u32;
    /// Reference to the next page, if any
    fn next_url(&self) -> Option<&str>;
}

/// Cloud Controller v2 list envelope
#[derive(Deserialize, Debug)]
pub struct CfPage<T> {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default = "single_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub prev_url: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    pub resources: Vec<T>,
}

fn single_page() -> u32 {
    1
}

impl<T> PaginatedResponse<T> for CfPage<T> {
    fn into_resources(self) -> Vec<T> {
        self.resources
    }

    fn total_pages(&self) -> u32 {
        self.total_pages
    }

    fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }
}
