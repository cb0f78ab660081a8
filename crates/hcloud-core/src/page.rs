//! Pagination metadata and the page-until-exhausted fetch loop.
//!
//! Listing endpoints return their resources one page at a time together with
//! a `meta.pagination` block. [`ApiClient::list_all`] drives the cursor until
//! the remote reports no further page, so callers always receive the fully
//! materialized sequence.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The pagination block of a listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    #[serde(default)]
    pub page: u32,

    /// Results per page
    #[serde(default)]
    pub per_page: u32,

    /// Previous page number, absent on the first page
    #[serde(default)]
    pub previous_page: Option<u32>,

    /// Next page number; absent or zero when exhausted
    #[serde(default)]
    pub next_page: Option<u32>,

    /// Last page number, when known
    #[serde(default)]
    pub last_page: Option<u32>,

    /// Total number of entries across all pages, when known
    #[serde(default)]
    pub total_entries: Option<u64>,
}

impl Pagination {
    /// Whether the remote reports a further page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        matches!(self.next_page, Some(n) if n != 0)
    }
}

/// The `meta` block of a listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Pagination cursor state
    #[serde(default)]
    pub pagination: Pagination,
}

impl ApiClient {
    /// Fetch every page of a listing endpoint and return the concatenated
    /// resource sequence in page order.
    ///
    /// `key` names the pluralized top-level key the resource list lives
    /// under (`servers`, `firewalls`, `actions`, ...). `filters` are
    /// appended to the `page`/`per_page` parameters on every request.
    ///
    /// # Errors
    ///
    /// Propagates any transport or parse failure; partially accumulated
    /// results are discarded. Returns [`Error::PageLimitExceeded`] when the
    /// remote still reports a next page after the configured budget.
    pub async fn list_all<T>(
        &self,
        path: &str,
        key: &str,
        filters: &[(&'static str, String)],
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut results = Vec::new();
        let mut page: u32 = 0;

        loop {
            page += 1;
            if page > self.max_pages() {
                return Err(Error::PageLimitExceeded {
                    limit: self.max_pages(),
                });
            }

            let mut query: Vec<(&'static str, String)> = Vec::with_capacity(filters.len() + 2);
            query.push(("page", page.to_string()));
            query.push(("per_page", self.per_page().to_string()));
            query.extend_from_slice(filters);

            let envelope: Envelope = self.get_json(path, &query).await?;

            let mut items: Vec<T> = envelope.field(key)?.unwrap_or_default();
            results.append(&mut items);

            let exhausted = envelope
                .meta()
                .map_or(true, |meta| !meta.pagination.has_next());
            if exhausted {
                debug!(path, pages = page, total = results.len(), "listing complete");
                return Ok(results);
            }
        }
    }
}
