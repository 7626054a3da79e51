//! # eventform-core
//!
//! Core types for the eventform toolkit: settings, logging setup, and
//! error types. This crate has no dependency on the forms layer and
//! provides the foundation for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Application settings with TOML loading
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{EventFormError, EventFormResult};
pub use settings::Settings;
