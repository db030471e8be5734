//! # named-routes-core
//!
//! Core types shared by the named-routes crates. This crate knows nothing about
//! HTTP routing; it provides the foundation the routing layer builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and result alias
//! - [`settings`] - Settings struct with defaults
//! - [`settings_loader`] - Loading settings from TOML/JSON and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{NamedRoutesError, NamedRoutesResult};
pub use settings::Settings;
