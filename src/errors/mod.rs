//! Centralized error handling module
//!
//! This module provides a unified error handling approach for the
//! local-notify crate, with structured, typed errors for the library
//! surface and context-enhancement helpers for wrapping lower-level
//! failures.

pub mod context;
pub mod types;

pub use context::ErrorContextExt;
pub use types::{AppError, AppResult};
