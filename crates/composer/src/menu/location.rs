//! Long-press menus on the location bar and the reload button.

use actionsheet_sdk::prelude::*;

use super::MenuComposer;
use crate::services::StringKey;

impl MenuComposer {
    /// Location bar long-press: paste entries only when the clipboard has text.
    pub fn compose_long_press_location_bar_actions(&self, has_clipboard_text: bool) -> Vec<MenuEntry> {
        let copy_address = MenuEntry::new(ActionId::CopyAddress, self.text(StringKey::CopyAddress))
            .icon("menu-Copy-Link");

        if !has_clipboard_text {
            return vec![copy_address];
        }

        vec![
            MenuEntry::new(ActionId::PasteAndGo, self.text(StringKey::PasteAndGo))
                .icon("menu-PasteAndGo"),
            MenuEntry::new(ActionId::Paste, self.text(StringKey::Paste)).icon("menu-Paste"),
            copy_address,
        ]
    }

    /// Reload button long-press. Empty while reader mode is active or when no
    /// page is loaded.
    pub fn compose_refresh_long_press_menu(&self, req: &MenuRequest) -> Vec<MenuEntry> {
        if req.page_url.is_none() || req.is_reader_active {
            return Vec::new();
        }

        let mut entries = vec![self.desktop_site_toggle(req)];

        if req.capabilities.tracking_protection {
            let (key, icon) = if req.tracking_protection_enabled {
                (
                    StringKey::ReloadWithoutTrackingProtection,
                    "menu-TrackingProtection-Off",
                )
            } else {
                (
                    StringKey::ReloadWithTrackingProtection,
                    "menu-TrackingProtection",
                )
            };
            entries.push(
                MenuEntry::new(ActionId::ToggleTrackingProtection, self.text(key)).icon(icon),
            );
        }

        entries
    }
}
