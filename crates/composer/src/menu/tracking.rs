//! Tracking protection submenu and the blocked-domains drill-down.

use actionsheet_sdk::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MenuComposer;
use crate::services::StringKey;

/// The blocked-domains sheet for one tracker group.
///
/// The domain list is owned by the sheet; presenters render it as the
/// content of the [`ActionId::BlockedDomainList`] row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainListSheet {
    pub title: String,
    pub description: String,
    pub domains: Vec<String>,
    pub groups: Vec<MenuGroup>,
}

impl MenuComposer {
    /// Compose the tracking protection submenu for the current tab.
    ///
    /// Tabs without a content blocker get an empty menu.
    pub fn compose_tracking_sub_menu(&self, req: &MenuRequest) -> Vec<MenuGroup> {
        if !req.capabilities.tracking_protection {
            debug!("tab has no content blocker; no tracking menu");
            return Vec::new();
        }

        match req.tracking_blocker_state {
            TrackingBlockerState::Disabled => self.tracking_disabled_actions(),
            TrackingBlockerState::Blocking => self.tracking_enabled_actions(req, false),
            TrackingBlockerState::Whitelisted => self.tracking_enabled_actions(req, true),
        }
    }

    /// Compose the drill-down listing the domains blocked for `group`.
    ///
    /// Wide layouts put the back button on top; compact layouts at the bottom.
    pub fn compose_blocked_domains_sheet(
        &self,
        req: &MenuRequest,
        group: TrackerGroup,
        idiom: DeviceIdiom,
    ) -> DomainListSheet {
        let (title_key, description_key) = group_labels(group);
        let title = self.text(title_key);
        let description = self.text(description_key);
        let domains = req.blocked_domains.domains_for(group);

        let back = MenuEntry::new(ActionId::BackToTrackingMenu, self.text(StringKey::Back))
            .icon("goBack");
        let info = MenuEntry::new(ActionId::TrackerGroupDescription, description.clone());
        let list = MenuEntry::new(ActionId::BlockedDomainList, String::new())
            .detail(domains.len().to_string());

        let groups = match idiom {
            DeviceIdiom::Pad => vec![vec![back], vec![info], vec![list]],
            DeviceIdiom::Phone => vec![vec![info], vec![list], vec![back]],
        };

        DomainListSheet {
            title,
            description,
            domains,
            groups: assign_groups(groups),
        }
    }

    fn tracking_disabled_actions(&self) -> Vec<MenuGroup> {
        // The explanation is the row's text; it has no title of its own.
        let more_info = MenuEntry::new(ActionId::TrackingProtectionMoreInfo, String::new())
            .detail(self.text(StringKey::TrackingProtectionMoreInfo))
            .icon("menu-Info");

        let enable = MenuEntry::new(
            ActionId::EnableTrackingProtection,
            self.text(StringKey::EnableTrackingProtection),
        )
        .icon("menu-TrackingProtection");

        assign_groups(vec![vec![more_info], vec![enable]])
    }

    fn tracking_enabled_actions(&self, req: &MenuRequest, is_whitelisted: bool) -> Vec<MenuGroup> {
        if req.page_url.is_none() {
            debug!("no page url; no tracking menu");
            return Vec::new();
        }

        let stats = &req.blocked_domains;

        let mut blocked = vec![
            MenuEntry::new(
                ActionId::BlockedTrackersHeader,
                self.text(StringKey::BlockedTrackers),
            )
            .detail(stats.total().to_string())
            .accessory(AccessoryKind::Text)
            .bold(),
        ];

        for group in TrackerGroup::ALL {
            if stats.group_count(group) > 0 {
                let (title_key, _) = group_labels(group);
                blocked.push(
                    MenuEntry::new(ActionId::ShowBlockedDomains(group), self.text(title_key))
                        .icon(group.icon())
                        .accessory(AccessoryKind::Disclosure),
                );
            }
        }

        // Only the header: nothing was blocked.
        if blocked.len() == 1 {
            blocked = vec![
                MenuEntry::new(
                    ActionId::NoTrackersBlocked,
                    self.text(StringKey::NoTrackersBlocked),
                )
                .accessory(AccessoryKind::Text)
                .bold(),
            ];
        }

        let toggle_key = if is_whitelisted {
            StringKey::ProtectionsOffForSite
        } else {
            StringKey::ProtectionsOnForSite
        };
        let whitelist_toggle = MenuEntry::new(ActionId::ToggleSiteWhitelist, self.text(toggle_key))
            .switch(!is_whitelisted)
            .enabled(!is_whitelisted);

        let settings = MenuEntry::new(
            ActionId::TrackingProtectionSettings,
            self.text(StringKey::ProtectionSettings),
        )
        .icon("settings");

        assign_groups(vec![vec![whitelist_toggle], blocked, vec![settings]])
    }
}

fn group_labels(group: TrackerGroup) -> (StringKey, StringKey) {
    match group {
        TrackerGroup::CrossSiteCookies => (
            StringKey::CrossSiteCookies,
            StringKey::CrossSiteCookiesDescription,
        ),
        TrackerGroup::Social => (
            StringKey::SocialTrackers,
            StringKey::SocialTrackersDescription,
        ),
        TrackerGroup::Fingerprinters => (
            StringKey::Fingerprinters,
            StringKey::FingerprintersDescription,
        ),
        TrackerGroup::Cryptominers => (
            StringKey::Cryptominers,
            StringKey::CryptominersDescription,
        ),
    }
}
