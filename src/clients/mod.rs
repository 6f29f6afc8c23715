//! HTTP clients for push services
//!
//! - **FcmClient**: posts a single message to the FCM HTTP v1 API
//! - **AccessTokenSource**: where the bearer token for that request comes from
//!
//! ```rust,no_run
//! use fcm_push::auth::StaticTokenSource;
//! use fcm_push::clients::{FcmClient, FcmClientConfig};
//! use fcm_push::message::build_common_message;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = FcmClient::new(FcmClientConfig::default())?;
//! let tokens = StaticTokenSource::new("ya29.example");
//! let outcome = client.send("pushapijava", &build_common_message(), &tokens).await?;
//! println!("{}", outcome.body());
//! # Ok(())
//! # }
//! ```

pub mod fcm;
pub mod traits;

pub use fcm::{FcmClient, FcmClientConfig};
pub use traits::{AccessTokenSource, SendOutcome};
