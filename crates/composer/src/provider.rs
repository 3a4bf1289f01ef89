//! State provider boundary.
//!
//! Bookmark and pin status come from storage and may be slow. Both lookups
//! run concurrently and are joined here, before any composition happens;
//! failures go back to the caller to report.

use std::collections::HashSet;

use actionsheet_sdk::prelude::*;
use async_trait::async_trait;
use tracing::debug;

use crate::error::{MenuError, MenuResult};

/// Source of per-URL bookmark and pinned-top-site status.
#[async_trait]
pub trait PageStatusSource: Send + Sync {
    async fn is_bookmarked(&self, url: &str) -> anyhow::Result<bool>;

    async fn is_pinned(&self, url: &str) -> anyhow::Result<bool>;
}

/// Parse a request snapshot. Values outside a closed enum, or malformed
/// JSON, are `InvalidState`.
pub fn parse_request(json: &str) -> MenuResult<MenuRequest> {
    Ok(MenuRequest::from_json(json)?)
}

/// Fetch bookmark and pin status for a URL concurrently.
pub async fn fetch_page_status<S>(source: &S, url: Option<&str>) -> MenuResult<PageStatus>
where
    S: PageStatusSource + ?Sized,
{
    let url = url.ok_or(MenuError::MissingData("page_url"))?;
    let (is_bookmarked, is_pinned) =
        tokio::try_join!(source.is_bookmarked(url), source.is_pinned(url))?;
    debug!(url = %url, is_bookmarked, is_pinned, "fetched page status");
    Ok(PageStatus {
        is_bookmarked,
        is_pinned,
    })
}

/// Fill in provider-owned fields of a request.
///
/// Requests without a page URL, and file URLs, pass through unchanged.
pub async fn prepare_request<S>(source: &S, request: MenuRequest) -> MenuResult<MenuRequest>
where
    S: PageStatusSource + ?Sized,
{
    if request.is_file_url || request.page_url.is_none() {
        return Ok(request);
    }
    let status = fetch_page_status(source, request.page_url.as_deref()).await?;
    Ok(request.with_page_status(status))
}

/// In-memory status source backed by fixed URL sets.
#[derive(Debug, Clone, Default)]
pub struct StaticPageStatus {
    bookmarks: HashSet<String>,
    pins: HashSet<String>,
}

impl StaticPageStatus {
    pub fn new<B, P>(bookmarks: B, pins: P) -> Self
    where
        B: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        Self {
            bookmarks: bookmarks.into_iter().collect(),
            pins: pins.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PageStatusSource for StaticPageStatus {
    async fn is_bookmarked(&self, url: &str) -> anyhow::Result<bool> {
        Ok(self.bookmarks.contains(url))
    }

    async fn is_pinned(&self, url: &str) -> anyhow::Result<bool> {
        Ok(self.pins.contains(url))
    }
}
