//! Input snapshot for menu composition.
//!
//! A [`MenuRequest`] is assembled by state providers and passed by value to
//! the composer. Every field has a default so providers can send sparse JSON;
//! a missing page URL just means the entries that need one are left out.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::{BlocklistCategory, TrackerGroup};

/// MIME type for which find-in-page is unavailable.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Content-blocker state of the current tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingBlockerState {
    /// Tracking protection is turned off globally.
    #[default]
    Disabled,
    /// Blocking with the default lists, whether or not anything was blocked yet.
    #[serde(alias = "allowing-all-blocked-by-default", alias = "no_blocked_urls")]
    Blocking,
    /// The current site is exempt from blocking.
    Whitelisted,
}

/// Sync account state, as reported by the account provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    #[default]
    SignedOut,
    NeedsVerification,
    NeedsPassword,
    NeedsUpgrade,
    Ready,
}

/// Profile details of a signed-in account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountProfile {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl AccountProfile {
    /// Display name, falling back to email. Blank values count as missing.
    pub fn label(&self) -> Option<&str> {
        [self.display_name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// Optional tab features, declared up front instead of probed at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// A content blocker is attached to the tab.
    pub tracking_protection: bool,
}

/// Domains blocked on the current page, by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockerStats {
    domains: BTreeMap<BlocklistCategory, BTreeSet<String>>,
}

impl BlockerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blocked domain.
    pub fn insert(&mut self, category: BlocklistCategory, domain: impl Into<String>) {
        self.domains
            .entry(category)
            .or_default()
            .insert(domain.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_domain(mut self, category: BlocklistCategory, domain: impl Into<String>) -> Self {
        self.insert(category, domain);
        self
    }

    /// Number of distinct domains blocked in a category.
    pub fn count(&self, category: BlocklistCategory) -> usize {
        self.domains.get(&category).map(|d| d.len()).unwrap_or(0)
    }

    /// Number of distinct domains blocked across a group's categories.
    ///
    /// A domain listed under several categories counts once, matching the
    /// length of [`domains_for`](Self::domains_for).
    pub fn group_count(&self, group: TrackerGroup) -> usize {
        self.domains_for(group).len()
    }

    /// Number of distinct blocked domains across all categories.
    pub fn total(&self) -> usize {
        self.domains.values().flatten().collect::<BTreeSet<_>>().len()
    }

    /// Blocked domains for a group, sorted and deduplicated.
    pub fn domains_for(&self, group: TrackerGroup) -> Vec<String> {
        let merged: BTreeSet<&String> = group
            .categories()
            .iter()
            .filter_map(|c| self.domains.get(c))
            .flatten()
            .collect();
        merged.into_iter().cloned().collect()
    }
}

/// Bookmark and pin status of the current page, fetched by providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStatus {
    pub is_bookmarked: bool,
    pub is_pinned: bool,
}

/// Everything the composer needs to know about the current tab and profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuRequest {
    /// Canonical URL of the page, if one is loaded.
    pub page_url: Option<String>,
    /// The tab shows a local file rather than a web page.
    pub is_file_url: bool,
    pub is_desktop_site: bool,
    pub is_bookmarked: bool,
    pub is_pinned: bool,
    /// Reader mode can be entered for this page.
    pub is_reader_available: bool,
    pub is_reader_active: bool,
    pub mime_type: Option<String>,
    pub tracking_blocker_state: TrackingBlockerState,
    pub blocked_domains: BlockerStats,
    /// The tab's content blocker is currently enabled.
    pub tracking_protection_enabled: bool,
    pub account_state: AccountState,
    pub account_profile: Option<AccountProfile>,
    pub night_mode_enabled: bool,
    pub no_image_mode_enabled: bool,
    pub capabilities: Capabilities,
}

impl MenuRequest {
    /// Parse a request snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether the loaded document is a PDF.
    pub fn is_pdf(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case(PDF_MIME_TYPE))
    }

    /// Length in bytes of the page URL (0 when there is none).
    pub fn url_len(&self) -> usize {
        self.page_url.as_deref().map(str::len).unwrap_or(0)
    }

    /// Apply provider-fetched bookmark and pin status.
    pub fn with_page_status(mut self, status: PageStatus) -> Self {
        self.is_bookmarked = status.is_bookmarked;
        self.is_pinned = status.is_pinned;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn sparse_json_uses_defaults() {
        let request = MenuRequest::from_json(r#"{"page_url": "https://example.com/"}"#).unwrap();
        assert_eq!(request.page_url.as_deref(), Some("https://example.com/"));
        assert!(!request.is_file_url);
        assert_eq!(request.tracking_blocker_state, TrackingBlockerState::Disabled);
        assert_eq!(request.account_state, AccountState::SignedOut);
        assert_eq!(request.blocked_domains.total(), 0);
    }

    #[test]
    fn blocking_state_accepts_aliases() {
        for name in ["blocking", "allowing-all-blocked-by-default", "no_blocked_urls"] {
            let json = format!(r#"{{"tracking_blocker_state": "{name}"}}"#);
            let request = MenuRequest::from_json(&json).unwrap();
            assert_eq!(request.tracking_blocker_state, TrackingBlockerState::Blocking);
        }
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result = MenuRequest::from_json(r#"{"account_state": "suspended"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn blocked_domains_parse_by_category() {
        let json = r#"{
            "blocked_domains": {
                "advertising": ["ads.example", "tracker.example"],
                "analytics": ["tracker.example", "stats.example"],
                "social": ["social.example"]
            }
        }"#;
        let request = MenuRequest::from_json(json).unwrap();
        let stats = &request.blocked_domains;

        assert_eq!(stats.count(BlocklistCategory::Advertising), 2);
        // tracker.example is listed twice but counted once.
        assert_eq!(stats.group_count(TrackerGroup::CrossSiteCookies), 3);
        assert_eq!(stats.total(), 4);
        assert_eq!(
            stats.domains_for(TrackerGroup::CrossSiteCookies),
            vec!["ads.example", "stats.example", "tracker.example"]
        );
        assert!(stats.domains_for(TrackerGroup::Cryptominers).is_empty());
    }

    #[test]
    fn pdf_detection_ignores_case() {
        let request = MenuRequest {
            mime_type: Some("Application/PDF".to_string()),
            ..Default::default()
        };
        assert!(request.is_pdf());
        assert!(!MenuRequest::default().is_pdf());
    }

    #[test]
    fn profile_label_prefers_display_name() {
        let profile = AccountProfile {
            display_name: Some("Sam".to_string()),
            email: Some("sam@example.com".to_string()),
            avatar_url: None,
        };
        assert_eq!(profile.label(), Some("Sam"));

        let profile = AccountProfile {
            display_name: Some("  ".to_string()),
            email: Some("sam@example.com".to_string()),
            avatar_url: None,
        };
        assert_eq!(profile.label(), Some("sam@example.com"));
        assert_eq!(AccountProfile::default().label(), None);
    }

    #[test]
    fn page_status_overrides_flags() {
        let request = MenuRequest::default().with_page_status(PageStatus {
            is_bookmarked: true,
            is_pinned: true,
        });
        assert!(request.is_bookmarked);
        assert!(request.is_pinned);
    }
}
