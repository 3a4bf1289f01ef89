//! Per-tab page actions and the global browser menu.

use actionsheet_sdk::prelude::*;
use tracing::debug;

use super::MenuComposer;
use crate::services::StringKey;

impl MenuComposer {
    /// Compose the page action menu: sharing, saving and copying in the
    /// first group, page-level toggles in the second.
    ///
    /// Local files only get a share entry.
    pub fn compose_page_actions(&self, req: &MenuRequest) -> Vec<MenuGroup> {
        if req.is_file_url {
            let share_file = MenuEntry::new(ActionId::ShareFile, self.text(StringKey::SharePage))
                .icon("action_share");
            return assign_groups(vec![vec![share_file]]);
        }

        let has_url = req.page_url.is_some();
        if !has_url {
            debug!("no page url; omitting bookmark, reading list, copy and pin entries");
        }

        let mut main_actions = vec![
            MenuEntry::new(ActionId::SharePage, self.text(StringKey::SharePage))
                .icon("action_share"),
        ];

        if self.url_is_too_long(req) {
            debug!(
                url_len = req.url_len(),
                limit = self.url_length_max(),
                "url too long; omitting bookmark and reading list entries"
            );
        } else if has_url {
            main_actions.push(self.bookmark_toggle(req));

            if req.is_reader_available || req.is_reader_active {
                main_actions.push(
                    MenuEntry::new(
                        ActionId::AddToReadingList,
                        self.text(StringKey::AddToReadingList),
                    )
                    .icon("addToReadingList"),
                );
            }
        }

        main_actions.push(
            MenuEntry::new(ActionId::SendToDevice, self.text(StringKey::SendToDevice))
                .icon("menu-Send-to-Device"),
        );
        if has_url {
            main_actions.push(
                MenuEntry::new(ActionId::CopyUrl, self.text(StringKey::CopyUrl))
                    .icon("menu-Copy-Link"),
            );
        }

        let mut common_actions = vec![
            self.desktop_site_toggle(req)
                .checked(req.is_desktop_site)
                .badge("menuBadge"),
        ];
        if has_url {
            common_actions.push(self.pin_toggle(req));
        }

        if !req.is_pdf() {
            common_actions.insert(
                0,
                MenuEntry::new(ActionId::FindInPage, self.text(StringKey::FindInPage))
                    .icon("menu-FindInPage"),
            );
        }

        assign_groups(vec![main_actions, common_actions])
    }

    /// Home page and library shortcuts.
    pub fn compose_library_actions(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::new(ActionId::OpenHomePage, self.text(StringKey::OpenHomePage))
                .icon("menu-Home"),
            MenuEntry::new(ActionId::OpenLibrary, self.text(StringKey::OpenLibrary))
                .icon("menu-library"),
        ]
    }

    /// Global preference switches followed by settings.
    pub fn compose_other_panel_actions(&self, req: &MenuRequest) -> Vec<MenuEntry> {
        vec![
            MenuEntry::new(ActionId::ToggleNoImageMode, self.text(StringKey::NoImageMode))
                .icon("menu-NoImageMode")
                .switch(req.no_image_mode_enabled)
                .badge("menuBadge"),
            MenuEntry::new(ActionId::ToggleNightMode, self.text(StringKey::NightMode))
                .icon("menu-NightMode")
                .switch(req.night_mode_enabled),
            MenuEntry::new(ActionId::OpenSettings, self.text(StringKey::Settings))
                .icon("menu-Settings"),
        ]
    }

    fn bookmark_toggle(&self, req: &MenuRequest) -> MenuEntry {
        if req.is_bookmarked {
            MenuEntry::new(ActionId::RemoveBookmark, self.text(StringKey::RemoveBookmark))
                .icon("menu-Bookmark-Remove")
        } else {
            MenuEntry::new(ActionId::AddBookmark, self.text(StringKey::AddBookmark))
                .icon("menu-Bookmark")
        }
    }

    fn pin_toggle(&self, req: &MenuRequest) -> MenuEntry {
        if req.is_pinned {
            MenuEntry::new(ActionId::RemoveTopSitePin, self.text(StringKey::RemovePinTopSite))
                .icon("action_unpin")
        } else {
            MenuEntry::new(ActionId::PinTopSite, self.text(StringKey::PinTopSite))
                .icon("action_pin")
        }
    }
}
