//! CLI Context for dependency injection and shared state
//!
//! Resolves configuration once, applies command line overrides and owns
//! logging setup, so handlers only see the effective settings.

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;
use crate::config::ConfigManager;
use tracing_subscriber::EnvFilter;

/// CLI execution context containing shared dependencies and configuration
#[derive(Clone)]
pub struct CliContext {
    pub verbose: bool,
    pub config_manager: Arc<ConfigManager>,
}

impl CliContext {
    /// Load configuration and apply `--credentials` / `--project-id` on top of it
    pub fn new(
        config_path: Option<PathBuf>,
        credentials: Option<PathBuf>,
        project_id: Option<String>,
        verbose: bool,
    ) -> Result<Self> {
        let mut config_manager = ConfigManager::new(config_path)?;

        let fcm = &mut config_manager.config_mut().fcm;
        if let Some(path) = credentials {
            fcm.credentials_file = path;
        }
        if project_id.is_some() {
            fcm.project_id = project_id;
        }

        Ok(Self {
            verbose,
            config_manager: Arc::new(config_manager),
        })
    }

    /// Initialize logging subsystem based on verbosity and configuration
    ///
    /// `-v` forces debug, otherwise `RUST_LOG` wins over `logging.log_level`.
    pub fn init_logging(&self) -> Result<()> {
        let directives = Self::log_directives(
            self.verbose,
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            &self.config_manager.config().logging.log_level,
        );

        // stdout carries the request body and FCM's response
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();

        if self.verbose {
            tracing::debug!("Verbose logging enabled");
            tracing::debug!("Config path: {:?}", self.config_manager.config_path());
        }

        Ok(())
    }

    fn log_directives(verbose: bool, rust_log: Option<String>, config_level: &str) -> String {
        if verbose {
            return "debug".to_string();
        }
        match rust_log {
            Some(filter) if !filter.trim().is_empty() => filter,
            _ => config_level.to_string(),
        }
    }
}
