//! Centralized error handling module
//!
//! Library code returns `AppResult`; the binary converts to `anyhow` at the
//! top level.

pub mod types;
pub mod context;

pub use types::{AppError, AppResult};
pub use context::ErrorContextExt;
