use reqwest::{Client, header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE}};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

use super::traits::{AccessTokenSource, SendOutcome};
use crate::config::{FcmConfig, DEFAULT_BASE_URL};
use crate::errors::{AppError, AppResult, ErrorContextExt};
use crate::message::FcmRequest;

/// Configuration for the FCM client
#[derive(Debug, Clone)]
pub struct FcmClientConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for FcmClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(30),
            user_agent: Some(concat!("fcm-push/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl From<&FcmConfig> for FcmClientConfig {
    fn from(config: &FcmConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            ..Default::default()
        }
    }
}

/// Client for the FCM HTTP v1 `messages:send` endpoint
#[derive(Clone)]
pub struct FcmClient {
    client: Client,
    base_url: Url,
}

impl FcmClient {
    /// Create a new FCM client with configuration
    pub fn new(config: FcmClientConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(30));
        let base_url = Url::parse(&config.base_url)?;

        let mut client_builder = Client::builder().timeout(timeout);

        if let Some(user_agent) = &config.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        }

        let client = client_builder
            .build()
            .map_err(|e| AppError::config_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client, base_url })
    }

    /// `{base}/v1/projects/{project_id}/messages:send`
    pub fn endpoint(&self, project_id: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config(format!("FCM base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v1", "projects", project_id, "messages:send"]);
        Ok(url)
    }

    fn build_headers(token: &str) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| AppError::TokenFetch {
                message: "access token is not a valid header value".to_string(),
                source: Some(Box::new(e)),
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Send one message to FCM
    ///
    /// Transport failures are errors; any HTTP response, successful or not,
    /// comes back as a `SendOutcome` carrying the response text.
    pub async fn send(
        &self,
        project_id: &str,
        request: &FcmRequest,
        tokens: &dyn AccessTokenSource,
    ) -> AppResult<SendOutcome> {
        let url = self.endpoint(project_id)?;
        let token = tokens.access_token().await?;
        let headers = Self::build_headers(&token)?;
        let body = serde_json::to_vec(request)?;

        debug!(%url, topic = %request.message.topic, "Posting message to FCM");
        let start = Instant::now();

        let response = self
            .client
            .post(url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::http_request_with_source("POST", url.as_str(), e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .with_context("Failed to read FCM response body")?;

        let elapsed_ms = elapsed_millis(start.elapsed());
        let outcome = SendOutcome::from_response(status, text);
        if outcome.is_delivered() {
            info!(%status, elapsed_ms, "FCM accepted message");
        } else {
            warn!(%status, elapsed_ms, "FCM rejected message");
        }

        Ok(outcome)
    }
}

fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
