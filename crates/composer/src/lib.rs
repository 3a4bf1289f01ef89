//! actionsheet composer library
//!
//! Decides which browser menu entries appear, in what order, and in what
//! state. The `actionsheet` binary wraps it for composing menus from JSON
//! request snapshots.

pub mod action;
pub mod config;
pub mod error;
pub mod menu;
pub mod present;
pub mod provider;
pub mod services;

pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{DomainListSheet, MenuComposer};
pub use present::{PresentationStyle, SheetPresentation};
