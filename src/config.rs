use crate::errors::{AppError, AppResult, ErrorContextExt};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "fcm-push.toml";
pub const DEFAULT_PROJECT_ID: &str = "pushapijava";
pub const DEFAULT_CREDENTIALS_FILE: &str = "pushapijava-firebase-adminsdk-ngjtn-2bc0730dfb.json";
pub const DEFAULT_BASE_URL: &str = "https://fcm.googleapis.com";
pub const FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

/// Main configuration structure for fcm-push
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fcm: FcmConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for reaching the FCM v1 API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcmConfig {
    /// When unset, the service account key's `project_id` is used, then
    /// `DEFAULT_PROJECT_ID`
    pub project_id: Option<String>,
    pub credentials_file: PathBuf,
    pub base_url: String,
    pub scopes: Vec<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            credentials_file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            base_url: DEFAULT_BASE_URL.to_string(),
            scopes: vec![FIREBASE_MESSAGING_SCOPE.to_string()],
            timeout_secs: Some(30),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration manager for fcm-push
///
/// Resolves and loads the TOML configuration file. Nothing is written to
/// disk: when no file is found the built-in defaults are used.
///
/// # Lookup order
///
/// 1. **Explicit**: the path given with `--config` (must exist)
/// 2. **Local**: `fcm-push.toml` in the current directory
/// 3. **User**: `config.toml` in the platform config directory for `fcm-push`
///
/// # Example
///
/// ```rust,no_run
/// use fcm_push::config::ConfigManager;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config_manager = ConfigManager::new(None)?;
///     println!("Base URL: {}", config_manager.config().fcm.base_url);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ConfigManager {
    config_path: Option<PathBuf>,
    config: Config,
}

impl ConfigManager {
    /// Creates a new ConfigManager instance
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path does not exist, or if the
    /// resolved file cannot be read or parsed.
    pub fn new(explicit_path: Option<PathBuf>) -> AppResult<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(AppError::ConfigNotFound { path });
            }
            return Self::from_path(path);
        }

        let candidates = [Some(PathBuf::from(CONFIG_FILE_NAME)), Self::user_config_path()];
        match candidates.into_iter().flatten().find(|p| p.exists()) {
            Some(path) => Self::from_path(path),
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::with_config(Config::default()))
            }
        }
    }

    /// Wraps an in-memory configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config_path: None,
            config,
        }
    }

    fn from_path(path: PathBuf) -> AppResult<Self> {
        let config = Self::load(&path)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(Self {
            config_path: Some(path),
            config,
        })
    }

    /// Platform config location, e.g. `~/.config/fcm-push/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fcm-push").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn load(path: &Path) -> AppResult<Config> {
        let content = fs::read_to_string(path).in_file_operation(path, "read config file")?;
        toml::from_str(&content)
            .map_err(|e| AppError::config_with_source(format!("Failed to parse {}", path.display()), e))
    }

    /// Path the configuration was loaded from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
