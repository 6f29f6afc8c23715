//! CLI module providing command-line interface functionality
//!
//! Parses arguments, builds the context and routes to the send handler.

pub mod commands;
pub mod handlers;
pub mod context;

use anyhow::Result;
use clap::Parser;

pub use commands::Cli;
pub use handlers::SendHandler;
pub use context::CliContext;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the request
    pub async fn run() -> Result<()> {
        let cli = Cli::parse();

        let context = CliContext::new(cli.config, cli.credentials, cli.project_id, cli.verbose)?;
        context.init_logging()?;

        SendHandler::new(&context)
            .handle_send(cli.message, cli.dry_run, cli.access_token)
            .await
    }
}
