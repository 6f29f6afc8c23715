use async_trait::async_trait;
use reqwest::StatusCode;

use crate::errors::AppResult;

/// Source of OAuth2 bearer tokens for FCM requests
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    /// Return a token valid for the FCM messaging scope
    async fn access_token(&self) -> AppResult<String>;
}

/// What FCM said about a single `messages:send` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// HTTP 200, the message was accepted for delivery
    Delivered { body: String },
    /// Any other status; the response body usually carries FCM's error JSON
    Rejected { status: StatusCode, body: String },
}

impl SendOutcome {
    pub fn from_response(status: StatusCode, body: String) -> Self {
        if status == StatusCode::OK {
            SendOutcome::Delivered { body }
        } else {
            SendOutcome::Rejected { status, body }
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, SendOutcome::Delivered { .. })
    }

    pub fn body(&self) -> &str {
        match self {
            SendOutcome::Delivered { body } | SendOutcome::Rejected { body, .. } => body,
        }
    }
}
