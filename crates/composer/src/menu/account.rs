//! Sync account entry.

use actionsheet_sdk::prelude::*;
use tracing::debug;

use super::MenuComposer;
use crate::services::StringKey;

const SYNC_ICON: &str = "menu-sync";
const WARNING_ICON: &str = "menu-warning";
const AVATAR_PLACEHOLDER: &str = "placeholder-avatar";

impl MenuComposer {
    /// Compose the sync status entry for the browser menu.
    ///
    /// Returns `None` only for a ready account whose profile has neither a
    /// display name nor an email.
    pub fn compose_sync_menu_entry(
        &self,
        state: AccountState,
        profile: Option<&AccountProfile>,
    ) -> Option<MenuEntry> {
        let warning = |key: StringKey| {
            MenuEntry::new(ActionId::ShowAccount, self.text(key))
                .icon(WARNING_ICON)
                .accessory(AccessoryKind::Sync)
        };

        match state {
            AccountState::SignedOut => Some(
                MenuEntry::new(ActionId::ShowAccount, self.text(StringKey::SignInToSync))
                    .icon(SYNC_ICON),
            ),
            AccountState::NeedsVerification => Some(warning(StringKey::VerifyEmail)),
            AccountState::NeedsPassword => Some(warning(StringKey::VerifyPassword)),
            AccountState::NeedsUpgrade => Some(warning(StringKey::UpgradeToSync)),
            AccountState::Ready => {
                let Some(title) = profile.and_then(AccountProfile::label) else {
                    debug!("ready account has no display name or email; omitting sync entry");
                    return None;
                };
                let icon = match profile.and_then(|p| p.avatar_url.as_deref()) {
                    Some(url) => IconRef::remote(url, AVATAR_PLACEHOLDER),
                    None => IconRef::image(AVATAR_PLACEHOLDER),
                };
                Some(
                    MenuEntry::new(ActionId::ShowAccount, title)
                        .icon_ref(icon)
                        .accessory(AccessoryKind::Sync),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AccountProfile {
        AccountProfile {
            display_name: Some("Robin".to_string()),
            email: Some("robin@example.com".to_string()),
            avatar_url: Some("https://profile.example/robin.png".to_string()),
        }
    }

    #[test]
    fn signed_out_invites_sign_in() {
        let entry = MenuComposer::default()
            .compose_sync_menu_entry(AccountState::SignedOut, None)
            .unwrap_or_else(|| panic!("signed out must produce an entry"));
        assert_eq!(entry.title, "Sign in to Sync");
        assert_eq!(entry.icon, Some(IconRef::image(SYNC_ICON)));
        assert_eq!(entry.accessory, AccessoryKind::None);
    }

    #[test]
    fn action_needed_states_warn() {
        let composer = MenuComposer::default();
        for (state, title) in [
            (AccountState::NeedsVerification, "Verify your email address"),
            (AccountState::NeedsPassword, "Enter your password to connect"),
            (AccountState::NeedsUpgrade, "Upgrade to connect"),
        ] {
            let entry = composer
                .compose_sync_menu_entry(state, None)
                .unwrap_or_else(|| panic!("{state:?} must produce an entry"));
            assert_eq!(entry.title, title);
            assert_eq!(entry.icon, Some(IconRef::image(WARNING_ICON)));
            assert_eq!(entry.accessory, AccessoryKind::Sync);
        }
    }

    #[test]
    fn ready_shows_profile_with_avatar() {
        let profile = profile();
        let entry = MenuComposer::default()
            .compose_sync_menu_entry(AccountState::Ready, Some(&profile))
            .unwrap_or_else(|| panic!("ready with a name must produce an entry"));
        assert_eq!(entry.title, "Robin");
        assert_eq!(
            entry.icon,
            Some(IconRef::remote("https://profile.example/robin.png", AVATAR_PLACEHOLDER))
        );
    }

    #[test]
    fn ready_without_avatar_uses_placeholder() {
        let profile = AccountProfile {
            display_name: None,
            avatar_url: None,
            ..profile()
        };
        let entry = MenuComposer::default()
            .compose_sync_menu_entry(AccountState::Ready, Some(&profile))
            .unwrap_or_else(|| panic!("ready with an email must produce an entry"));
        assert_eq!(entry.title, "robin@example.com");
        assert_eq!(entry.icon, Some(IconRef::image(AVATAR_PLACEHOLDER)));
    }

    #[test]
    fn ready_without_name_or_email_is_omitted() {
        let composer = MenuComposer::default();
        assert!(composer.compose_sync_menu_entry(AccountState::Ready, None).is_none());
        assert!(
            composer
                .compose_sync_menu_entry(AccountState::Ready, Some(&AccountProfile::default()))
                .is_none()
        );
    }
}
