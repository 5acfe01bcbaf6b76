//! Infrastructure configuration modules.

pub mod cache;
pub mod logging;
pub mod settings;
