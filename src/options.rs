//! Parsed notification options
//!
//! This module contains the Options collaborator: the typed view over the
//! JSON request describing one notification. The raw JSON value is kept
//! verbatim alongside the typed fields because its serialization is the
//! opaque payload embedded in every callback token's extras, and unknown
//! keys must survive the round trip through the host OS.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::warn;
use url::Url;

use crate::action::Action;
use crate::errors::AppResult;

/// Typed fields extracted from the options JSON
///
/// All keys are optional on the wire; missing ones fall back to the
/// defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OptionsData {
    id: i32,
    title: String,
    text: String,
    badge: u32,
    auto_clear: bool,
    ongoing: bool,
    color: Option<String>,
    led_color: Option<String>,
    led_on_time: u32,
    led_off_time: u32,
    sound: Option<String>,
    icon: Option<String>,
    small_icon: Option<String>,
    actions: Vec<Action>,
}

impl Default for OptionsData {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            text: String::new(),
            badge: 0,
            auto_clear: false,
            ongoing: false,
            color: None,
            led_color: None,
            led_on_time: 1000,
            led_off_time: 1000,
            sound: None,
            icon: None,
            small_icon: None,
            actions: Vec::new(),
        }
    }
}

/// Parsed configuration for one notification
///
/// Immutable once parsed; owned exclusively by one Builder invocation.
#[derive(Debug, Clone)]
pub struct Options {
    raw: Value,
    data: OptionsData,
}

impl Options {
    /// Parse options from a JSON value
    ///
    /// The value is retained verbatim; typed accessors read from the
    /// extracted fields. Fails only when a present key has the wrong
    /// JSON type, not when keys are missing.
    pub fn parse(value: Value) -> AppResult<Self> {
        let data: OptionsData = serde_json::from_value(value.clone())?;
        Ok(Self { raw: value, data })
    }

    /// Parse options from a JSON string
    pub fn from_json(input: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::parse(value)
    }

    /// Numeric notification id
    pub fn id(&self) -> i32 {
        self.data.id
    }

    /// Notification id rendered as the routing action string
    pub fn id_str(&self) -> String {
        self.data.id.to_string()
    }

    /// Notification title
    pub fn title(&self) -> &str {
        &self.data.title
    }

    /// Notification body text
    pub fn text(&self) -> &str {
        &self.data.text
    }

    /// Badge count shown on the app icon
    pub fn badge(&self) -> u32 {
        self.data.badge
    }

    /// Whether the notification clears itself when tapped
    pub fn is_auto_clear(&self) -> bool {
        self.data.auto_clear
    }

    /// Whether the notification is sticky
    pub fn is_ongoing(&self) -> bool {
        self.data.ongoing
    }

    /// Accent color as a packed RGB value, 0 when unset or unparseable
    pub fn color(&self) -> u32 {
        match self.data.color.as_deref() {
            Some(hex) => parse_hex_color(hex).unwrap_or_else(|| {
                warn!(value = hex, "ignoring unparseable accent color");
                0
            }),
            None => 0,
        }
    }

    /// LED color as a packed RGB value; 0 is the "unset" sentinel
    pub fn led_color(&self) -> u32 {
        match self.data.led_color.as_deref() {
            Some(hex) => parse_hex_color(hex).unwrap_or_else(|| {
                warn!(value = hex, "ignoring unparseable LED color");
                0
            }),
            None => 0,
        }
    }

    /// LED on-phase duration in milliseconds
    pub fn led_on_time(&self) -> u32 {
        self.data.led_on_time
    }

    /// LED off-phase duration in milliseconds
    pub fn led_off_time(&self) -> u32 {
        self.data.led_off_time
    }

    /// Sound reference, validated as a URI
    ///
    /// An unparseable reference degrades to a silent notification rather
    /// than failing the build.
    pub fn sound_uri(&self) -> Option<Url> {
        let raw = self.data.sound.as_deref()?;
        if raw.is_empty() {
            return None;
        }
        match Url::parse(raw) {
            Ok(uri) => Some(uri),
            Err(err) => {
                warn!(value = raw, %err, "ignoring unparseable sound reference");
                None
            }
        }
    }

    /// Icon resource name, if one was requested
    pub fn icon_name(&self) -> Option<&str> {
        self.data.icon.as_deref().filter(|name| !name.is_empty())
    }

    /// Small-icon override resource name
    ///
    /// Absence means the default app icon is used as the small icon.
    pub fn small_icon_name(&self) -> Option<&str> {
        self.data
            .small_icon
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Interactive actions in their original order
    pub fn actions(&self) -> &[Action] {
        &self.data.actions
    }

    /// The raw JSON value as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The opaque serialized form embedded in callback-token extras
    ///
    /// Serializes the raw value, so keys this component never reads are
    /// preserved for whoever redeems the token.
    pub fn payload(&self) -> String {
        self.raw.to_string()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Parse a hex color string like `"A1B2C3"`, `"#A1B2C3"` or `"FFA1B2C3"`
fn parse_hex_color(input: &str) -> Option<u32> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.is_empty() || digits.len() > 8 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
