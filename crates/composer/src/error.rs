//! Composer error types.
//!
//! Composition itself never fails: entries whose inputs are missing are left
//! out. These errors come from the layers around it (request parsing, the
//! translation catalog, provider lookups, action dispatch).

use std::path::PathBuf;

use actionsheet_sdk::types::ActionId;
use thiserror::Error;

/// Composer errors.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A field a provider needed was absent.
    #[error("missing data: {0}")]
    MissingData(&'static str),

    /// A value outside a closed domain; callers should treat this as a
    /// configuration fault.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("no handler registered for action {0:?}")]
    UnhandledAction(ActionId),

    #[error("handler for action {id:?} failed")]
    HandlerFailed {
        id: ActionId,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to read translation catalog {}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state provider error")]
    Provider(#[from] anyhow::Error),
}

impl From<serde_json::Error> for MenuError {
    fn from(e: serde_json::Error) -> Self {
        MenuError::InvalidState(e.to_string())
    }
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
