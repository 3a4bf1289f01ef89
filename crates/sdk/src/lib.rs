//! actionsheet SDK
//!
//! Types shared between state providers, the menu composer, and presenters.
//! Providers fill in a [`request::MenuRequest`]; the composer turns it into
//! ordered groups of [`types::MenuEntry`]; presenters render those groups and
//! hand the chosen entry's [`types::ActionId`] back to the caller.

pub mod request;
pub mod types;

pub mod prelude {
    pub use crate::request::*;
    pub use crate::types::*;
}
