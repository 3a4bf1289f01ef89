//! Menu composition.
//!
//! `MenuComposer` turns a `MenuRequest` snapshot into ordered groups of
//! entries for each browser menu:
//! - page actions, library shortcuts, and the global preference panel
//! - the tracking protection submenu and its blocked-domain drill-down
//! - the sync account entry
//! - location bar and reload button long-press menus

mod account;
mod composer;
mod location;
mod page;
mod tracking;

pub use composer::MenuComposer;
pub use tracking::DomainListSheet;
