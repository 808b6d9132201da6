//! The platform-neutral notification descriptor
//!
//! This is the "ready to post" artifact the external poster consumes. It
//! is serializable so the CLI can dump it and so posting subsystems can
//! hand it across process boundaries.

use serde::{Deserialize, Serialize};

use crate::intents::CallbackToken;
use crate::platform::{IconId, ImageRef};

/// Who can see the notification content on a locked device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Secret,
    Private,
    Public,
}

/// Semantic category hint for the host's ranking and DND handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Alarm,
    Call,
    Email,
    Message,
    Reminder,
}

/// Display priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Min,
    Low,
    Default,
    High,
    Max,
}

/// LED blink specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedSpec {
    pub color: u32,
    pub on_ms: u32,
    pub off_ms: u32,
}

/// One registered action button with its routing token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub icon: IconId,
    pub title: String,
    pub token: CallbackToken,
}

/// Fully configured notification descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub title: String,
    pub text: String,
    pub ticker: String,
    pub badge: u32,
    pub visibility: Visibility,
    pub category: Category,
    pub priority: Priority,
    pub auto_clear: bool,
    pub ongoing: bool,
    pub color: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lights: Option<LedSpec>,

    /// Sound URI; absent means silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    pub small_icon: IconId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<ImageRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_token: Option<CallbackToken>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_token: Option<CallbackToken>,
}

impl Descriptor {
    /// Serialize to a compact JSON string
    pub fn to_json(&self) -> crate::errors::AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a human-readable JSON string
    pub fn to_json_pretty(&self) -> crate::errors::AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
