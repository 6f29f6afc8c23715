//! FCM topic push library
//!
//! Builds the FCM v1 request bodies for the `STUDENTS` topic, mints OAuth2
//! access tokens from a service account key and posts messages to
//! `messages:send`.

pub mod auth;
pub mod cli;
pub mod clients;
pub mod config;
pub mod errors;
pub mod message;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigManager, FcmConfig};
pub use errors::{AppError, AppResult};
pub use message::{build_common_message, build_override_message, FcmRequest, MessageKind};
