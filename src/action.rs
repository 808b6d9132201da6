//! Interactive action buttons attached to a notification
//!
//! Each action describes one button: the identifier used for routing the
//! tap back into the host app, the button title, and an optional icon
//! resource name.

use serde::{Deserialize, Serialize};

/// One interactive notification button
///
/// Immutable once parsed; lives as long as the enclosing Options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Identifier used as the routing key when the button is tapped
    #[serde(default)]
    pub id: String,

    /// Button label shown to the user
    #[serde(default)]
    pub title: String,

    /// Icon resource name; resolved against the platform resource table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Action {
    /// Create a new action with the given identifier and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
        }
    }

    /// Routing identifier, falling back to the title when none was given
    pub fn identifier(&self) -> &str {
        if self.id.is_empty() {
            &self.title
        } else {
            &self.id
        }
    }
}
