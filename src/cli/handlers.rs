//! Send command handler
//!
//! Builds the requested payload, echoes it, then hands it to FCM.

use super::CliContext;
use crate::auth::{resolve_credentials_path, ServiceAccountTokenSource, StaticTokenSource};
use crate::clients::{AccessTokenSource, FcmClient, FcmClientConfig, SendOutcome};
use crate::config::DEFAULT_PROJECT_ID;
use crate::message::MessageKind;
use anyhow::Result;
use tracing::{debug, error, info};

pub const USAGE: &str = "Invalid command. Please use one of the following commands:
fcm-push --message=common-message
fcm-push --message=override-message";

/// Handler for the single send operation
pub struct SendHandler<'a> {
    context: &'a CliContext,
}

impl<'a> SendHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    /// Resolve `--message`, print the body and send it unless `dry_run`
    ///
    /// An absent or unknown message kind prints usage and returns `Ok`.
    pub async fn handle_send(
        &self,
        message: Option<String>,
        dry_run: bool,
        access_token: Option<String>,
    ) -> Result<()> {
        let kind = match message.as_deref().map(str::parse::<MessageKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(e)) => {
                debug!("{e}");
                println!("{USAGE}");
                return Ok(());
            }
            None => {
                println!("{USAGE}");
                return Ok(());
            }
        };

        let request = kind.build();
        println!("{}", kind.heading());
        println!("{}", request.to_pretty_json()?);

        if dry_run {
            info!(kind = %kind, "Dry run - not sending to FCM");
            return Ok(());
        }

        let fcm = &self.context.config_manager.config().fcm;
        let client = FcmClient::new(FcmClientConfig::from(fcm))?;

        let (tokens, key_project_id): (Box<dyn AccessTokenSource>, Option<String>) = match access_token {
            Some(token) => (Box::new(StaticTokenSource::new(token)), None),
            None => {
                let path = resolve_credentials_path(&fcm.credentials_file);
                let source = ServiceAccountTokenSource::from_file(&path, fcm.scopes.clone()).await?;
                let project_id = source.project_id().map(str::to_string);
                (Box::new(source), project_id)
            }
        };

        let project_id = fcm
            .project_id
            .clone()
            .or(key_project_id)
            .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string());

        let outcome = client
            .send(&project_id, &request, tokens.as_ref())
            .await
            .inspect_err(|e| error!(category = e.category(), "Send failed: {e}"))?;

        match &outcome {
            SendOutcome::Delivered { body } => {
                println!("Message sent to Firebase for delivery, response:");
                println!("{body}");
            }
            SendOutcome::Rejected { status, body } => {
                debug!(%status, "Rejected by FCM");
                println!("Unable to send message to Firebase");
                println!("{body}");
            }
        }

        Ok(())
    }
}
