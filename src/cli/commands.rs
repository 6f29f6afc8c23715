//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "fcm-push")]
#[command(about = "Send a Firebase Cloud Messaging notification to the STUDENTS topic")]
#[command(version)]
pub struct Cli {
    /// Message to send: common-message or override-message
    #[arg(long, value_name = "KIND")]
    pub message: Option<String>,

    /// Print the request body without contacting FCM
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file (defaults to ./fcm-push.toml, then the user config dir)
    #[arg(long, env = "FCM_PUSH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Service account key file
    #[arg(long, env = "FCM_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Firebase project id
    #[arg(long, env = "FCM_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Use this bearer token instead of minting one from the key file
    #[arg(long, env = "FCM_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
