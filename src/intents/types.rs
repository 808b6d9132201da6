//! Type definitions for intents and callback tokens
//!
//! Receiver and activity targets are symbolic keys looked up in the host
//! routing layer's capability table, not class references. The extras
//! carried by every intent are the serialized options blob plus a nullable
//! action-identifier slot; that pair is the de facto wire format for
//! round-tripping notification state back into the app.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic key identifying a registered interaction handler
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerKey(String);

impl HandlerKey {
    /// Create a handler key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The standard clear handler, wired unless explicitly removed
    pub fn default_clear() -> Self {
        Self::new("clear-receiver")
    }

    /// The standard click handler
    pub fn default_click() -> Self {
        Self::new("click-receiver")
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HandlerKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Extras payload bound into a callback token
///
/// `options` is the opaque serialized options blob; `action` is the
/// nullable action-identifier slot (null for plain notification taps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentExtras {
    pub options: String,
    pub action: Option<String>,
}

impl IntentExtras {
    /// Extras for a plain notification interaction
    pub fn plain(options: impl Into<String>) -> Self {
        Self {
            options: options.into(),
            action: None,
        }
    }

    /// Extras for an action-button interaction
    pub fn for_action(options: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            options: options.into(),
            action: Some(action.into()),
        }
    }
}

/// One routed interaction: target handler, routing action string, extras
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Capability-table key of the receiving handler
    pub target: HandlerKey,

    /// Routing action string; the notification id for clear events, the
    /// action identifier for buttons, absent for plain taps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    pub extras: IntentExtras,

    /// Keep the launched interaction out of the task history
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_history: bool,
}

impl Intent {
    /// Create an intent for the given target with the given extras
    pub fn new(target: HandlerKey, extras: IntentExtras) -> Self {
        Self {
            target,
            action: None,
            extras,
            no_history: false,
        }
    }

    /// Set the routing action string
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Mark the interaction as excluded from task history
    pub fn no_history(mut self) -> Self {
        self.no_history = true;
        self
    }
}

/// How the host delivers a redeemed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Delivered to a background receiver
    Broadcast,
    /// Delivered by bringing an activity to the foreground
    Activity,
}

/// What happens when a token is issued for an already-used request code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Replacement {
    /// Keep the existing token alive and swap in the new extras
    UpdateCurrent,
    /// Revoke the existing token, then issue a fresh one
    CancelCurrent,
}

/// An issued callback token
///
/// The host redeems the token later, possibly after the issuing process
/// has exited; the token may therefore outlive the Builder that made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackToken {
    pub request_code: i32,
    pub kind: TokenKind,
    pub replacement: Replacement,
    pub intent: Intent,
}
