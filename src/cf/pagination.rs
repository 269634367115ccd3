//! Sequential walk over paginated list endpoints

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::cf::client::CfClient;
use crate::cf::traits::{CfPage, PaginatedResponse};
use crate::error::{CfError, Result};

impl CfClient {
    /// Fetch every page of a list endpoint and concatenate the records
    ///
    /// Pages are requested one at a time, following each page's `next_url`.
    /// The walk stops when the page count reported by the first page is used
    /// up or when a page has no next reference, whichever comes first. Any
    /// error discards what was collected so far.
    ///
    /// # Type Parameters
    /// * `T` - The record type
    /// * `R` - The page envelope, which decides how records are decoded
    pub async fn fetch_pages<T, R>(&self, path: &str, context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let first: R = self.fetch_page(path, context, 1).await?;
        let total_pages = first.total_pages();
        let mut next = next_page_ref(first.next_url());
        let mut resources = first.into_resources();

        debug!(
            "Page 1/{} of {}: {} records",
            total_pages,
            context,
            resources.len()
        );

        let mut pages_fetched: u32 = 1;
        let mut pages_remaining = total_pages.saturating_sub(1);

        while pages_remaining > 0 {
            let Some(next_path) = next.take() else {
                break;
            };
            pages_fetched += 1;

            let page: R = self.fetch_page(&next_path, context, pages_fetched).await?;
            next = next_page_ref(page.next_url());
            let items = page.into_resources();
            debug!(
                "Page {}/{} of {}: {} records",
                pages_fetched,
                total_pages,
                context,
                items.len()
            );
            resources.extend(items);
            pages_remaining -= 1;
        }

        if pages_fetched < total_pages {
            warn!(
                "{}: API reported {} pages but the next-page chain ended after {}",
                context, total_pages, pages_fetched
            );
        } else if let Some(extra) = next {
            warn!(
                "{}: API reported {} pages but still links to '{}'; not following",
                context, total_pages, extra
            );
        }

        debug!("Fetched {} total records for {}", resources.len(), context);
        Ok(resources)
    }

    /// Fetch all pages of a Cloud Controller v2 list with serde-decoded records
    pub async fn fetch_all_pages<T>(&self, path: &str, context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.fetch_pages::<T, CfPage<T>>(path, context).await
    }

    /// Fetch all pages as opaque JSON records, then map each with `decode`
    ///
    /// A decode failure on any record fails the whole collection.
    pub async fn fetch_all_pages_with<T, F>(
        &self,
        path: &str,
        context: &str,
        decode: F,
    ) -> Result<Vec<T>>
    where
        F: Fn(serde_json::Value) -> Result<T>,
    {
        let raw = self
            .fetch_pages::<serde_json::Value, CfPage<serde_json::Value>>(path, context)
            .await?;
        raw.into_iter().map(decode).collect()
    }

    async fn fetch_page<R>(&self, path: &str, context: &str, page_num: u32) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!("Fetching page {} of {} from: {}", page_num, context, path);
        let response = self.execute_get(path).await?;
        response.json().map_err(|e| {
            CfError::Json(format!(
                "Failed to parse {} (page {}): {}",
                context, page_num, e
            ))
        })
    }
}

/// Normalise a next-page reference; empty strings mean "no next page"
fn next_page_ref(next_url: Option<&str>) -> Option<String> {
    next_url
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
