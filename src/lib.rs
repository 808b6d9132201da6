//! Local Notification Builder Library
//!
//! This library translates JSON-described notification requests into
//! fully configured, platform-neutral notification descriptors, wiring up
//! the click/clear callback tokens that route user interaction back into
//! the host app.

pub mod action;
pub mod builder;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod intents;
pub mod notification;
pub mod options;
pub mod platform;

// Re-export commonly used types for convenience
pub use action::Action;
pub use builder::Builder;
pub use config::{Config, ConfigManager};
pub use descriptor::Descriptor;
pub use errors::{AppError, AppResult};
pub use notification::Notification;
pub use options::Options;
pub use platform::Platform;
