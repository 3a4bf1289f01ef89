//! actionsheet test utilities.
//!
//! Request builders and assertion helpers for composer tests.

use actionsheet_sdk::prelude::*;

/// Create a request for a loaded web page with default state.
pub fn test_page(url: &str) -> TestRequest {
    TestRequest {
        request: MenuRequest {
            page_url: Some(url.to_string()),
            ..Default::default()
        },
    }
}

/// Create a request for a local file.
pub fn test_file(url: &str) -> TestRequest {
    test_page(url).file()
}

/// Create a request with no page loaded.
pub fn blank_tab() -> TestRequest {
    TestRequest {
        request: MenuRequest::default(),
    }
}

/// A request builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestRequest {
    pub request: MenuRequest,
}

impl TestRequest {
    /// Mark as a local file.
    pub fn file(mut self) -> Self {
        self.request.is_file_url = true;
        self
    }

    pub fn desktop_site(mut self) -> Self {
        self.request.is_desktop_site = true;
        self
    }

    pub fn bookmarked(mut self) -> Self {
        self.request.is_bookmarked = true;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.request.is_pinned = true;
        self
    }

    /// Reader mode is available for the page.
    pub fn readable(mut self) -> Self {
        self.request.is_reader_available = true;
        self
    }

    /// Reader mode is showing the page.
    pub fn in_reader_mode(mut self) -> Self {
        self.request.is_reader_available = true;
        self.request.is_reader_active = true;
        self
    }

    pub fn with_mime_type(mut self, mime_type: &str) -> Self {
        self.request.mime_type = Some(mime_type.to_string());
        self
    }

    pub fn pdf(self) -> Self {
        self.with_mime_type(PDF_MIME_TYPE)
    }

    /// Attach a content blocker in the given state.
    pub fn with_blocker(mut self, state: TrackingBlockerState) -> Self {
        self.request.capabilities.tracking_protection = true;
        self.request.tracking_blocker_state = state;
        self.request.tracking_protection_enabled = state != TrackingBlockerState::Disabled;
        self
    }

    /// Record a blocked domain.
    pub fn blocked(mut self, category: BlocklistCategory, domain: &str) -> Self {
        self.request.blocked_domains.insert(category, domain);
        self
    }

    /// Record `count` distinct blocked domains in a category.
    pub fn blocked_count(mut self, category: BlocklistCategory, count: usize) -> Self {
        for i in 0..count {
            self.request
                .blocked_domains
                .insert(category, format!("tracker{i}.{category:?}.example").to_lowercase());
        }
        self
    }

    pub fn account(mut self, state: AccountState) -> Self {
        self.request.account_state = state;
        self
    }

    /// Signed-in account with a display name and email.
    pub fn signed_in_as(mut self, name: &str) -> Self {
        self.request.account_state = AccountState::Ready;
        self.request.account_profile = Some(AccountProfile {
            display_name: Some(name.to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            avatar_url: None,
        });
        self
    }

    pub fn night_mode(mut self) -> Self {
        self.request.night_mode_enabled = true;
        self
    }

    pub fn no_image_mode(mut self) -> Self {
        self.request.no_image_mode_enabled = true;
        self
    }

    pub fn build(self) -> MenuRequest {
        self.request
    }
}

/// Assertion helpers for composed menus.
pub mod assert {
    use actionsheet_sdk::prelude::*;

    /// Tokens of a group, in order.
    pub fn ids(entries: &[MenuEntry]) -> Vec<ActionId> {
        entries.iter().map(|e| e.id).collect()
    }

    /// Assert a group holds exactly these tokens, in order.
    pub fn group_ids(entries: &[MenuEntry], expected: &[ActionId]) {
        assert_eq!(
            ids(entries),
            expected,
            "Menu group mismatch:\nactual: {:?}\nexpected: {:?}",
            ids(entries),
            expected
        );
    }

    /// Assert no entry in any group carries a token.
    pub fn absent(groups: &[MenuGroup], id: ActionId) {
        assert!(
            groups.iter().flatten().all(|e| e.id != id),
            "Expected {:?} to be absent from menu: {:?}",
            id,
            groups.iter().map(|g| ids(g)).collect::<Vec<_>>()
        );
    }

    /// Assert every entry's `group` matches the index of its group.
    pub fn groups_numbered(groups: &[MenuGroup]) {
        for (index, group) in groups.iter().enumerate() {
            for entry in group {
                assert_eq!(
                    entry.group, index,
                    "Entry {:?} is in group {} but numbered {}",
                    entry.id, index, entry.group
                );
            }
        }
    }
}

/// JSON request fixtures.
pub mod fixtures {
    use serde_json::json;

    /// A page with a content blocker that blocked one domain per category.
    pub fn busy_news_page() -> serde_json::Value {
        json!({
            "page_url": "https://news.example/story",
            "is_reader_available": true,
            "mime_type": "text/html",
            "tracking_blocker_state": "allowing-all-blocked-by-default",
            "tracking_protection_enabled": true,
            "blocked_domains": {
                "advertising": ["ads.example"],
                "analytics": ["stats.example"],
                "social": ["social.example"],
                "fingerprinting": ["fp.example"],
                "cryptomining": ["miner.example"]
            },
            "capabilities": { "tracking_protection": true },
            "account_state": "ready",
            "account_profile": { "email": "reader@example.com" }
        })
    }
}
