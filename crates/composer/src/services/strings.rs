//! Menu string catalog.
//!
//! Every label the composer emits is named by a [`StringKey`]. Keys carry
//! their English source text; a [`Strings`] catalog translates them using
//! entries parsed from a gettext .po file, keyed by (context, source).

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use super::po_parser::parse_po;
use crate::error::{MenuError, MenuResult};

/// Labels used in composed menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    SharePage,
    AddBookmark,
    RemoveBookmark,
    AddToReadingList,
    SendToDevice,
    CopyUrl,
    FindInPage,
    ViewDesktopSite,
    ViewMobileSite,
    PinTopSite,
    RemovePinTopSite,
    OpenHomePage,
    OpenLibrary,
    NoImageMode,
    NightMode,
    Settings,
    Close,
    TrackingProtectionMoreInfo,
    EnableTrackingProtection,
    BlockedTrackers,
    NoTrackersBlocked,
    CrossSiteCookies,
    SocialTrackers,
    Fingerprinters,
    Cryptominers,
    CrossSiteCookiesDescription,
    SocialTrackersDescription,
    FingerprintersDescription,
    CryptominersDescription,
    ProtectionsOnForSite,
    ProtectionsOffForSite,
    ProtectionSettings,
    ReloadWithTrackingProtection,
    ReloadWithoutTrackingProtection,
    Back,
    SignInToSync,
    VerifyEmail,
    VerifyPassword,
    UpgradeToSync,
    PasteAndGo,
    Paste,
    CopyAddress,
}

impl StringKey {
    /// English source text, used as the msgid.
    pub fn source(self) -> &'static str {
        match self {
            StringKey::SharePage => "Share Page With…",
            StringKey::AddBookmark => "Bookmark This Page",
            StringKey::RemoveBookmark => "Remove Bookmark",
            StringKey::AddToReadingList => "Add to Reading List",
            StringKey::SendToDevice => "Send to Device",
            StringKey::CopyUrl => "Copy Link",
            StringKey::FindInPage => "Find in Page",
            StringKey::ViewDesktopSite => "Request Desktop Site",
            StringKey::ViewMobileSite => "Request Mobile Site",
            StringKey::PinTopSite => "Pin to Top Sites",
            StringKey::RemovePinTopSite => "Remove from Top Sites",
            StringKey::OpenHomePage => "Home",
            StringKey::OpenLibrary => "Your Library",
            StringKey::NoImageMode => "Block Images",
            StringKey::NightMode => "Enable Night Mode",
            StringKey::Settings => "Settings",
            StringKey::Close => "Close",
            StringKey::TrackingProtectionMoreInfo => {
                "Learn more about how Tracking Protection blocks online trackers that collect your browsing data across multiple websites."
            }
            StringKey::EnableTrackingProtection => "Enable Tracking Protection",
            StringKey::BlockedTrackers => "Blocked",
            StringKey::NoTrackersBlocked => "No trackers known to us were detected on this page.",
            StringKey::CrossSiteCookies => "Cross-Site Tracking Cookies",
            StringKey::SocialTrackers => "Social Media Trackers",
            StringKey::Fingerprinters => "Fingerprinters",
            StringKey::Cryptominers => "Cryptominers",
            StringKey::CrossSiteCookiesDescription => {
                "These cookies follow you from site to site to gather data about what you do online. They are set by third parties such as advertisers and analytics companies."
            }
            StringKey::SocialTrackersDescription => {
                "Social networks place trackers on other websites to build a more complete and targeted profile of you."
            }
            StringKey::FingerprintersDescription => {
                "The settings on your browser and computer are unique. Fingerprinters collect a variety of these unique settings to create a profile of you."
            }
            StringKey::CryptominersDescription => {
                "Cryptominers secretly use your system's computing power to mine digital money."
            }
            StringKey::ProtectionsOnForSite => "Protections are ON for this site",
            StringKey::ProtectionsOffForSite => "Protections are OFF for this site",
            StringKey::ProtectionSettings => "Protection Settings",
            StringKey::ReloadWithTrackingProtection => "Reload With Tracking Protection",
            StringKey::ReloadWithoutTrackingProtection => "Reload Without Tracking Protection",
            StringKey::Back => "Back",
            StringKey::SignInToSync => "Sign in to Sync",
            StringKey::VerifyEmail => "Verify your email address",
            StringKey::VerifyPassword => "Enter your password to connect",
            StringKey::UpgradeToSync => "Upgrade to connect",
            StringKey::PasteAndGo => "Paste & Go",
            StringKey::Paste => "Paste",
            StringKey::CopyAddress => "Copy Address",
        }
    }

    /// Translation context (msgctxt) the label is looked up under first.
    pub fn context(self) -> &'static str {
        match self {
            StringKey::TrackingProtectionMoreInfo
            | StringKey::EnableTrackingProtection
            | StringKey::BlockedTrackers
            | StringKey::NoTrackersBlocked
            | StringKey::CrossSiteCookies
            | StringKey::SocialTrackers
            | StringKey::Fingerprinters
            | StringKey::Cryptominers
            | StringKey::CrossSiteCookiesDescription
            | StringKey::SocialTrackersDescription
            | StringKey::FingerprintersDescription
            | StringKey::CryptominersDescription
            | StringKey::ProtectionsOnForSite
            | StringKey::ProtectionsOffForSite
            | StringKey::ProtectionSettings
            | StringKey::ReloadWithTrackingProtection
            | StringKey::ReloadWithoutTrackingProtection => "tracking",
            StringKey::SignInToSync
            | StringKey::VerifyEmail
            | StringKey::VerifyPassword
            | StringKey::UpgradeToSync => "account",
            _ => "menu",
        }
    }
}

/// Translated menu strings.
#[derive(Debug, Clone, Default)]
pub struct Strings {
    /// (context, source) → translation.
    translations: HashMap<(String, String), String>,
}

impl Strings {
    /// A catalog with no translations; every key resolves to its English source.
    pub fn english() -> Self {
        Self::default()
    }

    /// Build a catalog from .po file contents.
    pub fn from_po(content: &str) -> Self {
        let translations = parse_po(content)
            .into_iter()
            .map(|e| ((e.context, e.source), e.translation))
            .collect();
        Self { translations }
    }

    /// Load a catalog from a .po file on disk.
    pub fn load(path: &Path) -> MenuResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| MenuError::Catalog {
                path: path.to_path_buf(),
                source,
            })?;
        let strings = Self::from_po(&content);
        info!(path = %path.display(), count = strings.len(), "loaded menu translations");
        Ok(strings)
    }

    /// Resolve a key, falling back to the context-free translation and then
    /// to the English source.
    pub fn get(&self, key: StringKey) -> String {
        let source = key.source();
        self.lookup(key.context(), source)
            .or_else(|| self.lookup("", source))
            .unwrap_or(source)
            .to_string()
    }

    fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.translations
            .get(&(context.to_string(), source.to_string()))
            .map(String::as_str)
    }

    /// Number of translated strings.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_source() {
        let strings = Strings::english();
        assert!(strings.is_empty());
        assert_eq!(strings.get(StringKey::PasteAndGo), "Paste & Go");
        assert_eq!(strings.get(StringKey::BlockedTrackers), "Blocked");
    }

    #[test]
    fn context_translation_wins() {
        let strings = Strings::from_po(
            r#"
msgid "Blocked"
msgstr "Bloqué"

msgctxt "tracking"
msgid "Blocked"
msgstr "Bloqués"
"#,
        );
        assert_eq!(strings.len(), 2);
        assert_eq!(strings.get(StringKey::BlockedTrackers), "Bloqués");
    }

    #[test]
    fn context_free_translation_is_fallback() {
        let strings = Strings::from_po(
            r#"
msgid "Paste"
msgstr "Coller"
"#,
        );
        assert_eq!(strings.get(StringKey::Paste), "Coller");
        assert_eq!(strings.get(StringKey::CopyAddress), "Copy Address");
    }

    #[test]
    fn load_missing_file_is_catalog_error() {
        let err = Strings::load(Path::new("/nonexistent/menu.po")).unwrap_err();
        let MenuError::Catalog { path, source } = err else {
            panic!("expected a catalog error, got {err:?}");
        };
        assert_eq!(path, Path::new("/nonexistent/menu.po"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}
