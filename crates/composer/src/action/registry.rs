//! Action registry - resolves menu entry tokens to caller-supplied handlers.
//!
//! The composer only names actions. Whoever presents a menu registers a
//! handler per `ActionId` and dispatches the entry the user picked.

use std::collections::HashMap;

use actionsheet_sdk::prelude::*;
use tracing::{debug, warn};

use crate::error::{MenuError, MenuResult};

/// A handler invoked when an entry with its token is selected.
pub type ActionHandler = Box<dyn Fn(&MenuEntry) -> anyhow::Result<()> + Send + Sync>;

/// Outcome of dispatching a selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The registered handler ran successfully.
    Handled,
    /// The entry is disabled, hidden, or display-only.
    Ignored,
}

/// Registry of action handlers, keyed by token.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<ActionId, ActionHandler>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for a token, replacing any previous one.
    pub fn register<F>(&mut self, id: ActionId, handler: F)
    where
        F: Fn(&MenuEntry) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        if self.handlers.insert(id, Box::new(handler)).is_some() {
            debug!(action = ?id, "replaced action handler");
        }
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, id: ActionId, handler: F) -> Self
    where
        F: Fn(&MenuEntry) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register(id, handler);
        self
    }

    /// Run the handler for a selected entry.
    pub fn dispatch(&self, entry: &MenuEntry) -> MenuResult<Dispatch> {
        if !entry.is_interactive() {
            debug!(action = ?entry.id, "ignoring selection of non-interactive entry");
            return Ok(Dispatch::Ignored);
        }

        let Some(handler) = self.handlers.get(&entry.id) else {
            warn!(action = ?entry.id, "no handler registered for selected entry");
            return Err(MenuError::UnhandledAction(entry.id));
        };

        handler(entry).map_err(|source| MenuError::HandlerFailed {
            id: entry.id,
            source,
        })?;
        Ok(Dispatch::Handled)
    }

    /// Check if a handler is registered for a token.
    pub fn has_handler(&self, id: ActionId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Actionable tokens in a composed menu that have no handler, in menu order.
    pub fn unhandled(&self, groups: &[MenuGroup]) -> Vec<ActionId> {
        let mut missing = Vec::new();
        for entry in groups.iter().flatten() {
            if entry.id.is_actionable() && !self.has_handler(entry.id) && !missing.contains(&entry.id)
            {
                missing.push(entry.id);
            }
        }
        missing
    }

    /// Get handler count.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<String> = self.handlers.keys().map(|id| format!("{id:?}")).collect();
        ids.sort();
        f.debug_struct("ActionRegistry")
            .field("handlers", &ids)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn dispatch_runs_registered_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let registry = ActionRegistry::new().with(ActionId::CopyUrl, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let entry = MenuEntry::new(ActionId::CopyUrl, "Copy Link");
        assert_eq!(registry.dispatch(&entry).unwrap(), Dispatch::Handled);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disabled_and_display_rows_are_ignored() {
        let registry = ActionRegistry::new()
            .with(ActionId::ToggleSiteWhitelist, |_| Ok(()))
            .with(ActionId::NoTrackersBlocked, |_| Ok(()));

        let disabled = MenuEntry::new(ActionId::ToggleSiteWhitelist, "Toggle").enabled(false);
        assert_eq!(registry.dispatch(&disabled).unwrap(), Dispatch::Ignored);

        let notice = MenuEntry::new(ActionId::NoTrackersBlocked, "Nothing blocked");
        assert_eq!(registry.dispatch(&notice).unwrap(), Dispatch::Ignored);
    }

    #[test]
    fn missing_handler_is_an_error() {
        let registry = ActionRegistry::new();
        let err = registry
            .dispatch(&MenuEntry::new(ActionId::Paste, "Paste"))
            .unwrap_err();
        assert!(matches!(err, MenuError::UnhandledAction(ActionId::Paste)));
    }

    #[test]
    fn handler_failure_is_wrapped() {
        let registry =
            ActionRegistry::new().with(ActionId::SendToDevice, |_| Err(anyhow::anyhow!("no devices")));
        let err = registry
            .dispatch(&MenuEntry::new(ActionId::SendToDevice, "Send"))
            .unwrap_err();
        assert!(matches!(
            err,
            MenuError::HandlerFailed {
                id: ActionId::SendToDevice,
                ..
            }
        ));
    }

    #[test]
    fn unhandled_lists_each_missing_token_once() {
        let registry = ActionRegistry::new().with(ActionId::SharePage, |_| Ok(()));
        let groups = vec![
            vec![
                MenuEntry::new(ActionId::SharePage, "Share"),
                MenuEntry::new(ActionId::BlockedTrackersHeader, "Blocked"),
                MenuEntry::new(ActionId::CopyUrl, "Copy"),
            ],
            vec![MenuEntry::new(ActionId::CopyUrl, "Copy")],
        ];
        assert_eq!(registry.unhandled(&groups), vec![ActionId::CopyUrl]);
    }

    #[test]
    fn register_replaces_existing_handler() {
        let mut registry = ActionRegistry::new();
        registry.register(ActionId::Paste, |_| Err(anyhow::anyhow!("old")));
        registry.register(ActionId::Paste, |_| Ok(()));
        assert_eq!(registry.len(), 1);
        assert!(registry.has_handler(ActionId::Paste));
        assert_eq!(
            registry
                .dispatch(&MenuEntry::new(ActionId::Paste, "Paste"))
                .unwrap(),
            Dispatch::Handled
        );
    }
}
