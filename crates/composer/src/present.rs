//! Presenter input: how a composed menu should be shown.
//!
//! Nothing here renders. This bundles composed groups with the few decisions
//! a presenter needs: popover versus full-screen, the close button label,
//! and whether to show live sync status.

use actionsheet_sdk::prelude::*;
use serde::{Deserialize, Serialize};

use crate::menu::{DomainListSheet, MenuComposer};
use crate::services::StringKey;

/// How the sheet is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStyle {
    /// Anchored popover (wide layouts).
    Popover,
    /// Full-width sheet over the current content.
    OverCurrentContext,
}

impl PresentationStyle {
    /// Pads get a popover unless the caller suppresses it.
    pub fn for_idiom(idiom: DeviceIdiom, suppress_popover: bool) -> Self {
        match idiom {
            DeviceIdiom::Pad if !suppress_popover => PresentationStyle::Popover,
            _ => PresentationStyle::OverCurrentContext,
        }
    }
}

/// A composed menu ready to hand to a presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetPresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub groups: Vec<MenuGroup>,
    pub close_button_title: String,
    pub style: PresentationStyle,
    /// Reverse group order when the sheet is anchored at the bottom.
    pub autoreverse_actions: bool,
    /// Show live sync status; only meaningful for a ready account.
    pub show_sync_status: bool,
    /// Blocked domains rendered in the domain list row, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
}

impl SheetPresentation {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_autoreverse(mut self) -> Self {
        self.autoreverse_actions = false;
        self
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

impl MenuComposer {
    /// Wrap composed groups for presentation.
    pub fn present(
        &self,
        groups: Vec<MenuGroup>,
        style: PresentationStyle,
        account_state: AccountState,
    ) -> SheetPresentation {
        SheetPresentation {
            title: None,
            groups,
            close_button_title: self.text(StringKey::Close),
            style,
            autoreverse_actions: true,
            show_sync_status: account_state == AccountState::Ready,
            domains: Vec::new(),
        }
    }

    /// Wrap a blocked-domains sheet for presentation. Its groups keep their
    /// order regardless of anchoring.
    pub fn present_domain_list(
        &self,
        sheet: DomainListSheet,
        style: PresentationStyle,
        account_state: AccountState,
    ) -> SheetPresentation {
        let DomainListSheet {
            title,
            domains,
            groups,
            ..
        } = sheet;
        let mut presentation = self
            .present(groups, style, account_state)
            .with_title(title)
            .without_autoreverse();
        presentation.domains = domains;
        presentation
    }
}
