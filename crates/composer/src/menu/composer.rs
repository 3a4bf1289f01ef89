//! The menu composer and the pieces shared between menus.

use actionsheet_sdk::prelude::*;

use crate::config::{Config, DEFAULT_URL_LENGTH_MAX};
use crate::error::MenuResult;
use crate::services::{StringKey, Strings};

/// Decides which menu entries appear, in what order, and in what state.
///
/// Holds only immutable settings; every `compose_*` method is a pure function
/// of its arguments, so one composer can be shared across threads.
#[derive(Debug, Clone)]
pub struct MenuComposer {
    strings: Strings,
    url_length_max: usize,
}

impl MenuComposer {
    /// Create a composer using the given string catalog and the default URL limit.
    pub fn new(strings: Strings) -> Self {
        Self {
            strings,
            url_length_max: DEFAULT_URL_LENGTH_MAX,
        }
    }

    /// Override the length (in bytes) above which a URL counts as too long.
    pub fn with_url_length_max(mut self, url_length_max: usize) -> Self {
        self.url_length_max = url_length_max;
        self
    }

    /// Build a composer from configuration, loading translations if configured.
    pub fn from_config(config: &Config) -> MenuResult<Self> {
        let strings = match &config.translations {
            Some(path) => Strings::load(path)?,
            None => Strings::english(),
        };
        Ok(Self::new(strings).with_url_length_max(config.url_length_max))
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn url_length_max(&self) -> usize {
        self.url_length_max
    }

    /// Whether the page URL is too long to bookmark or save for later.
    pub fn url_is_too_long(&self, req: &MenuRequest) -> bool {
        req.url_len() > self.url_length_max
    }

    pub(crate) fn text(&self, key: StringKey) -> String {
        self.strings.get(key)
    }

    /// Desktop/mobile site toggle, labelled with the mode it switches to.
    pub(crate) fn desktop_site_toggle(&self, req: &MenuRequest) -> MenuEntry {
        let key = if req.is_desktop_site {
            StringKey::ViewMobileSite
        } else {
            StringKey::ViewDesktopSite
        };
        MenuEntry::new(ActionId::ToggleDesktopSite, self.text(key)).icon("menu-RequestDesktopSite")
    }
}

impl Default for MenuComposer {
    fn default() -> Self {
        Self::new(Strings::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_long_is_strictly_greater_than_limit() {
        let composer = MenuComposer::default().with_url_length_max(20);
        let at_limit = MenuRequest {
            page_url: Some("https://example.com/".to_string()),
            ..Default::default()
        };
        assert_eq!(at_limit.url_len(), 20);
        assert!(!composer.url_is_too_long(&at_limit));

        let over = MenuRequest {
            page_url: Some("https://example.com/a".to_string()),
            ..Default::default()
        };
        assert!(composer.url_is_too_long(&over));
        assert!(!composer.url_is_too_long(&MenuRequest::default()));
    }

    #[test]
    fn desktop_toggle_names_target_mode() {
        let composer = MenuComposer::default();
        let mobile = composer.desktop_site_toggle(&MenuRequest::default());
        assert_eq!(mobile.title, "Request Desktop Site");

        let desktop = composer.desktop_site_toggle(&MenuRequest {
            is_desktop_site: true,
            ..Default::default()
        });
        assert_eq!(desktop.title, "Request Mobile Site");
        assert_eq!(desktop.id, ActionId::ToggleDesktopSite);
    }

    #[test]
    fn default_uses_english_and_default_limit() {
        let composer = MenuComposer::default();
        assert!(composer.strings().is_empty());
        assert_eq!(composer.url_length_max(), DEFAULT_URL_LENGTH_MAX);
    }
}
