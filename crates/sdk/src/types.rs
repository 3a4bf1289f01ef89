//! Menu entry and action token types.
//!
//! A composed menu is a list of groups (sections), each an ordered list of
//! entries. Entries never carry callbacks: the `id` token is resolved to a
//! concrete action by whoever presents the menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One section of a composed menu.
pub type MenuGroup = Vec<MenuEntry>;

/// Token naming the action a menu entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    SharePage,
    ShareFile,
    AddBookmark,
    RemoveBookmark,
    AddToReadingList,
    SendToDevice,
    CopyUrl,
    FindInPage,
    ToggleDesktopSite,
    PinTopSite,
    RemoveTopSitePin,
    OpenHomePage,
    OpenLibrary,
    ToggleNoImageMode,
    ToggleNightMode,
    OpenSettings,
    /// Opens the tracking protection support article.
    TrackingProtectionMoreInfo,
    EnableTrackingProtection,
    /// "Blocked" section header.
    BlockedTrackersHeader,
    NoTrackersBlocked,
    /// Drill down into the blocked domains of one tracker group.
    ShowBlockedDomains(TrackerGroup),
    ToggleSiteWhitelist,
    TrackingProtectionSettings,
    /// Explanatory text at the top of a blocked-domains sheet.
    TrackerGroupDescription,
    /// The domain list row of a blocked-domains sheet.
    BlockedDomainList,
    BackToTrackingMenu,
    /// Reload the page with tracking protection flipped.
    ToggleTrackingProtection,
    ShowAccount,
    PasteAndGo,
    Paste,
    CopyAddress,
}

impl ActionId {
    /// Whether selecting an entry with this token should trigger anything.
    ///
    /// Headers, descriptions, and list rows are display-only.
    pub fn is_actionable(self) -> bool {
        !matches!(
            self,
            ActionId::BlockedTrackersHeader
                | ActionId::NoTrackersBlocked
                | ActionId::TrackerGroupDescription
                | ActionId::BlockedDomainList
        )
    }
}

/// Trailing accessory shown on a menu row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    #[default]
    None,
    Switch,
    Disclosure,
    Text,
    Sync,
}

/// Icon shown on a menu row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IconRef {
    /// A bundled image asset.
    Image { name: String },
    /// A remote image, with a bundled asset to show until it loads.
    Remote { url: String, placeholder: String },
}

impl IconRef {
    pub fn image(name: impl Into<String>) -> Self {
        IconRef::Image { name: name.into() }
    }

    pub fn remote(url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        IconRef::Remote {
            url: url.into(),
            placeholder: placeholder.into(),
        }
    }

    /// The bundled asset name (the placeholder for remote icons).
    pub fn asset_name(&self) -> &str {
        match self {
            IconRef::Image { name } => name,
            IconRef::Remote { placeholder, .. } => placeholder,
        }
    }
}

/// A single row in a composed menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Action token resolved by the caller.
    pub id: ActionId,

    /// Primary label.
    pub title: String,

    /// Secondary text shown under or beside the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,

    /// Whether the row accepts interaction.
    pub enabled: bool,

    pub visible: bool,

    /// On/off state for switch rows.
    #[serde(default)]
    pub checked: bool,

    #[serde(default)]
    pub accessory: AccessoryKind,

    #[serde(default)]
    pub bold: bool,

    /// Asset name of a badge drawn over the menu button while this row is checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Index of the group this entry was emitted into.
    #[serde(default)]
    pub group: usize,
}

impl MenuEntry {
    /// Create an enabled, visible entry with no icon or accessory.
    pub fn new(id: ActionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            detail: None,
            icon: None,
            enabled: true,
            visible: true,
            checked: false,
            accessory: AccessoryKind::None,
            bold: false,
            badge: None,
            group: 0,
        }
    }

    /// Set a bundled image icon.
    pub fn icon(mut self, name: &str) -> Self {
        self.icon = Some(IconRef::image(name));
        self
    }

    pub fn icon_ref(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn accessory(mut self, accessory: AccessoryKind) -> Self {
        self.accessory = accessory;
        self
    }

    /// Make this a switch row with the given state.
    pub fn switch(mut self, on: bool) -> Self {
        self.accessory = AccessoryKind::Switch;
        self.checked = on;
        self
    }

    pub fn checked(mut self, on: bool) -> Self {
        self.checked = on;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn badge(mut self, name: &str) -> Self {
        self.badge = Some(name.to_string());
        self
    }

    /// Whether selecting this entry should reach an action handler.
    pub fn is_interactive(&self) -> bool {
        self.enabled && self.visible && self.id.is_actionable()
    }
}

/// Stamp every entry with the index of the group it sits in.
pub fn assign_groups(mut groups: Vec<MenuGroup>) -> Vec<MenuGroup> {
    for (index, group) in groups.iter_mut().enumerate() {
        for entry in group.iter_mut() {
            entry.group = index;
        }
    }
    groups
}

/// Content-blocker category a blocked request was attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlocklistCategory {
    Advertising,
    Analytics,
    Social,
    Fingerprinting,
    Cryptomining,
}

/// User-facing grouping of blocklist categories in the tracking menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerGroup {
    /// Advertising and analytics trackers.
    CrossSiteCookies,
    Social,
    Fingerprinters,
    Cryptominers,
}

impl TrackerGroup {
    /// Groups in menu order.
    pub const ALL: [TrackerGroup; 4] = [
        TrackerGroup::CrossSiteCookies,
        TrackerGroup::Social,
        TrackerGroup::Fingerprinters,
        TrackerGroup::Cryptominers,
    ];

    pub fn categories(self) -> &'static [BlocklistCategory] {
        match self {
            TrackerGroup::CrossSiteCookies => {
                &[BlocklistCategory::Advertising, BlocklistCategory::Analytics]
            }
            TrackerGroup::Social => &[BlocklistCategory::Social],
            TrackerGroup::Fingerprinters => &[BlocklistCategory::Fingerprinting],
            TrackerGroup::Cryptominers => &[BlocklistCategory::Cryptomining],
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TrackerGroup::CrossSiteCookies => "tp-cookie",
            TrackerGroup::Social => "tp-socialtracker",
            TrackerGroup::Fingerprinters => "tp-fingerprinter",
            TrackerGroup::Cryptominers => "tp-cryptominer",
        }
    }

    /// Machine name, as used on the command line and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackerGroup::CrossSiteCookies => "cross_site_cookies",
            TrackerGroup::Social => "social",
            TrackerGroup::Fingerprinters => "fingerprinters",
            TrackerGroup::Cryptominers => "cryptominers",
        }
    }
}

impl fmt::Display for TrackerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackerGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackerGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| format!("unknown tracker group: {s}"))
    }
}

/// Layout class of the device presenting the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceIdiom {
    #[default]
    Phone,
    Pad,
}

impl FromStr for DeviceIdiom {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phone" => Ok(DeviceIdiom::Phone),
            "pad" | "tablet" => Ok(DeviceIdiom::Pad),
            other => Err(format!("unknown device idiom: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rows_are_not_actionable() {
        assert!(!ActionId::BlockedTrackersHeader.is_actionable());
        assert!(!ActionId::NoTrackersBlocked.is_actionable());
        assert!(!ActionId::BlockedDomainList.is_actionable());
        assert!(ActionId::SharePage.is_actionable());
        assert!(ActionId::ShowBlockedDomains(TrackerGroup::Social).is_actionable());
    }

    #[test]
    fn disabled_entry_is_not_interactive() {
        let entry = MenuEntry::new(ActionId::ToggleSiteWhitelist, "Toggle").enabled(false);
        assert!(!entry.is_interactive());
    }

    #[test]
    fn assign_groups_stamps_indices() {
        let groups = assign_groups(vec![
            vec![MenuEntry::new(ActionId::SharePage, "Share")],
            vec![
                MenuEntry::new(ActionId::FindInPage, "Find"),
                MenuEntry::new(ActionId::PinTopSite, "Pin"),
            ],
        ]);
        assert_eq!(groups[0][0].group, 0);
        assert_eq!(groups[1][0].group, 1);
        assert_eq!(groups[1][1].group, 1);
    }

    #[test]
    fn cross_site_cookies_cover_ads_and_analytics() {
        let categories = TrackerGroup::CrossSiteCookies.categories();
        assert!(categories.contains(&BlocklistCategory::Advertising));
        assert!(categories.contains(&BlocklistCategory::Analytics));
    }

    #[test]
    fn tracker_group_parses_machine_names() {
        for group in TrackerGroup::ALL {
            assert_eq!(group.as_str().parse::<TrackerGroup>(), Ok(group));
        }
        assert!("ads".parse::<TrackerGroup>().is_err());
    }

    #[test]
    fn action_id_serializes_snake_case() {
        let json = serde_json::to_string(&ActionId::ShowBlockedDomains(TrackerGroup::Social))
            .unwrap_or_default();
        assert_eq!(json, r#"{"show_blocked_domains":"social"}"#);
        let json = serde_json::to_string(&ActionId::PasteAndGo).unwrap_or_default();
        assert_eq!(json, r#""paste_and_go""#);
    }

    #[test]
    fn idiom_parses_case_insensitively() {
        assert_eq!("Pad".parse::<DeviceIdiom>(), Ok(DeviceIdiom::Pad));
        assert_eq!("phone".parse::<DeviceIdiom>(), Ok(DeviceIdiom::Phone));
        assert!("watch".parse::<DeviceIdiom>().is_err());
    }
}
