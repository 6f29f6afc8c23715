//! Access tokens for the FCM API
//!
//! Tokens are minted from a Google service account key with `yup-oauth2`.
//! A fixed token source is also provided for callers that already hold a
//! bearer token.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};

use crate::clients::AccessTokenSource;
use crate::errors::{AppError, AppResult};

/// Mints access tokens from a service account key file
pub struct ServiceAccountTokenSource {
    key: ServiceAccountKey,
    scopes: Vec<String>,
}

impl ServiceAccountTokenSource {
    /// Load the JSON key at `path`
    pub async fn from_file(path: &Path, scopes: Vec<String>) -> AppResult<Self> {
        let key = yup_oauth2::read_service_account_key(path)
            .await
            .map_err(|e| AppError::credentials_with_source(path, "cannot read service account key", e))?;

        debug!(
            path = %path.display(),
            client_email = %key.client_email,
            "Loaded service account key"
        );

        Ok(Self::from_key(key, scopes))
    }

    pub fn from_key(key: ServiceAccountKey, scopes: Vec<String>) -> Self {
        Self { key, scopes }
    }

    /// Firebase project the key belongs to, if the key records one
    pub fn project_id(&self) -> Option<&str> {
        self.key.project_id.as_deref()
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

#[async_trait]
impl AccessTokenSource for ServiceAccountTokenSource {
    async fn access_token(&self) -> AppResult<String> {
        let authenticator = ServiceAccountAuthenticator::builder(self.key.clone())
            .build()
            .await
            .map_err(|e| AppError::token_fetch_with_source("cannot build service account authenticator", e))?;

        let token = authenticator
            .token(self.scopes.as_slice())
            .await
            .map_err(|e| AppError::token_fetch_with_source("token request was refused", e))?;

        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| AppError::token_fetch("token response did not include an access token"))
    }
}

/// Hands out a token obtained elsewhere
#[derive(Debug, Clone)]
pub struct StaticTokenSource(String);

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl AccessTokenSource for StaticTokenSource {
    async fn access_token(&self) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

/// Locate the key file
///
/// Relative paths are looked up next to the executable first and then in
/// the current directory. Absolute paths are returned unchanged.
pub fn resolve_credentials_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)));

    match beside_exe {
        Some(candidate) if candidate.exists() => candidate,
        _ => path.to_path_buf(),
    }
}
