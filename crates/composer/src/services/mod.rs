//! Supporting services for the composer.

pub mod po_parser;
pub mod strings;

pub use strings::{StringKey, Strings};
