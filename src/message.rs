//! FCM v1 request bodies
//!
//! Builds the two notification payloads this tool knows how to send: a
//! common display notification for the `STUDENTS` topic, and the same
//! notification carrying Android and APNs overrides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

pub const TOPIC: &str = "STUDENTS";
pub const NOTIFICATION_TITLE: &str = "FCM Notification from Rust";
pub const NOTIFICATION_BODY: &str = "Rust sending to STUDENTS topic";
pub const ANDROID_CLICK_ACTION: &str = "android.intent.action.MAIN";
pub const APNS_BADGE: u32 = 1;
pub const APNS_PRIORITY: &str = "10";

/// Top-level body for `messages:send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcmRequest {
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMessage")]
pub struct Message {
    pub topic: String,
    pub notification: Notification,
    /// Android and APNs overrides travel together; either both keys are
    /// serialized or neither is.
    #[serde(flatten)]
    pub overrides: Option<PlatformOverrides>,
}

/// Wire shape of `Message`, checked before it becomes one
#[derive(Deserialize)]
struct RawMessage {
    topic: String,
    notification: Notification,
    android: Option<AndroidConfig>,
    apns: Option<ApnsConfig>,
}

impl TryFrom<RawMessage> for Message {
    type Error = AppError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let overrides = match (raw.android, raw.apns) {
            (Some(android), Some(apns)) => Some(PlatformOverrides { android, apns }),
            (None, None) => None,
            (android, _) => {
                let (present, missing) = if android.is_some() { ("android", "apns") } else { ("apns", "android") };
                return Err(AppError::JsonSerialization {
                    context: format!("message has {present} override but no {missing}"),
                    source: None,
                });
            }
        };

        Ok(Self {
            topic: raw.topic,
            notification: raw.notification,
            overrides,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformOverrides {
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidConfig {
    pub notification: AndroidNotification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidNotification {
    pub click_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApnsConfig {
    pub payload: ApnsPayload,
    pub headers: ApnsHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aps {
    pub badge: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApnsHeaders {
    #[serde(rename = "apns-priority")]
    pub apns_priority: String,
}

impl FcmRequest {
    pub fn has_overrides(&self) -> bool {
        self.message.overrides.is_some()
    }

    /// Render the body the way it is echoed before sending
    pub fn to_pretty_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::JsonSerialization {
            context: "rendering FCM request body".to_string(),
            source: Some(Box::new(e)),
        })
    }
}

/// Common notification sent to every app instance subscribed to the topic
pub fn build_common_message() -> FcmRequest {
    FcmRequest {
        message: Message {
            topic: TOPIC.to_string(),
            notification: Notification {
                title: NOTIFICATION_TITLE.to_string(),
                body: NOTIFICATION_BODY.to_string(),
            },
            overrides: None,
        },
    }
}

/// Common notification plus Android click action and iOS badge/priority
pub fn build_override_message() -> FcmRequest {
    let mut request = build_common_message();

    request.message.overrides = Some(PlatformOverrides {
        android: AndroidConfig {
            notification: AndroidNotification {
                click_action: ANDROID_CLICK_ACTION.to_string(),
            },
        },
        apns: ApnsConfig {
            payload: ApnsPayload {
                aps: Aps { badge: APNS_BADGE },
            },
            headers: ApnsHeaders {
                apns_priority: APNS_PRIORITY.to_string(),
            },
        },
    });

    request
}

/// Which predefined payload to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Common,
    Override,
}

impl MessageKind {
    pub const ALL: [MessageKind; 2] = [MessageKind::Common, MessageKind::Override];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Common => "common-message",
            MessageKind::Override => "override-message",
        }
    }

    pub fn build(&self) -> FcmRequest {
        match self {
            MessageKind::Common => build_common_message(),
            MessageKind::Override => build_override_message(),
        }
    }

    /// Heading printed above the echoed request body
    pub fn heading(&self) -> &'static str {
        match self {
            MessageKind::Common => "FCM request body for message using common notification object:",
            MessageKind::Override => "FCM request body for override message:",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::InvalidArgument {
                argument: "--message".to_string(),
                reason: format!("unknown message kind '{s}'"),
            })
    }
}
