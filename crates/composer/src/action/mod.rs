//! Action token resolution.

mod registry;

pub use registry::{ActionHandler, ActionRegistry, Dispatch};
