//! Bridge context handed to the notification builder
//!
//! The Platform bundles everything the builder needs from the host side:
//! the app identity, the icon/image resource tables, the set of registered
//! interaction handlers, the callback-token table, and the request-code
//! allocation policy. Handler targets are resolved by capability-table
//! lookup; there is no reflective lookup of receiver classes.

use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::errors::AppResult;
use crate::intents::{
    CallbackToken, HandlerKey, Intent, RandomCodes, Replacement, RequestCodePolicy,
    SequentialCodes, TokenKind, TokenTable,
};

/// Numeric handle of an icon resource known to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub u32);

/// A resolved large-icon image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Resource name the image was resolved from
    pub name: String,
    /// Host-side source the image is loaded from
    pub source: String,
}

/// Icon and image resources registered with the host
#[derive(Debug, Clone)]
pub struct ResourceTable {
    app_icon: IconId,
    icons: HashMap<String, IconId>,
    images: HashMap<String, String>,
}

/// Resource name the default app icon is registered under
pub const APP_ICON_NAME: &str = "ic_launcher";

impl ResourceTable {
    /// Create a table containing only the default app icon
    pub fn new() -> Self {
        let app_icon = IconId(1);
        let mut icons = HashMap::new();
        icons.insert(APP_ICON_NAME.to_string(), app_icon);
        Self {
            app_icon,
            icons,
            images: HashMap::new(),
        }
    }

    /// Register an icon resource
    pub fn register_icon(&mut self, name: impl Into<String>, id: IconId) {
        self.icons.insert(name.into(), id);
    }

    /// Register an image resource for large-icon resolution
    pub fn register_image(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.images.insert(name.into(), source.into());
    }

    /// Register the default app icon under the given name
    pub fn set_app_icon(&mut self, name: impl Into<String>, id: IconId) {
        self.app_icon = id;
        self.icons.insert(name.into(), id);
    }

    /// The default app icon
    pub fn app_icon(&self) -> IconId {
        self.app_icon
    }

    /// Look up an icon by resource name
    pub fn resolve_icon(&self, name: &str) -> Option<IconId> {
        self.icons.get(name).copied()
    }

    /// Look up an icon by name, degrading to the app icon when unknown
    pub fn resolve_icon_or_app(&self, name: &str) -> IconId {
        self.resolve_icon(name).unwrap_or_else(|| {
            warn!(icon = name, "unknown icon resource, using app icon");
            self.app_icon
        })
    }

    /// Resolve an image for large-icon use
    pub fn resolve_image(&self, name: &str) -> Option<ImageRef> {
        match self.images.get(name) {
            Some(source) => Some(ImageRef {
                name: name.to_string(),
                source: source.clone(),
            }),
            None => {
                warn!(image = name, "unknown image resource, omitting large icon");
                None
            }
        }
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The bridge context for one host app
pub struct Platform {
    app: String,
    resources: ResourceTable,
    handlers: HashSet<HandlerKey>,
    tokens: TokenTable,
    codes: Box<dyn RequestCodePolicy>,
}

impl Platform {
    /// Create a platform with default resources, random request codes,
    /// and the standard clear/click handlers registered
    pub fn new(app: impl Into<String>) -> Self {
        let mut handlers = HashSet::new();
        handlers.insert(HandlerKey::default_clear());
        handlers.insert(HandlerKey::default_click());

        Self {
            app: app.into(),
            resources: ResourceTable::new(),
            handlers,
            tokens: TokenTable::new(),
            codes: Box::new(RandomCodes::new()),
        }
    }

    /// Build a platform from host-side configuration
    pub fn from_config(config: &Config) -> Self {
        let mut resources = ResourceTable::new();
        for (name, id) in &config.resources.icons {
            resources.register_icon(name.clone(), IconId(*id));
        }
        for (name, source) in &config.resources.images {
            resources.register_image(name.clone(), source.clone());
        }
        if let Some(id) = config.resources.icons.get(&config.app.icon) {
            resources.set_app_icon(config.app.icon.clone(), IconId(*id));
        }

        let codes: Box<dyn RequestCodePolicy> = match config.codes.policy.as_str() {
            "sequential" => Box::new(SequentialCodes::default()),
            _ => Box::new(RandomCodes::new()),
        };

        let mut platform = Self::new(config.app.name.clone())
            .with_resources(resources)
            .with_codes(codes)
            .with_token_capacity(config.tokens.capacity);
        platform.register_handler(HandlerKey::new(config.handlers.clear.clone()));
        platform.register_handler(HandlerKey::new(config.handlers.click.clone()));
        platform
    }

    /// Replace the resource table
    pub fn with_resources(mut self, resources: ResourceTable) -> Self {
        self.resources = resources;
        self
    }

    /// Replace the request-code policy
    pub fn with_codes(mut self, codes: Box<dyn RequestCodePolicy>) -> Self {
        self.codes = codes;
        self
    }

    /// Replace the token table with one of the given capacity
    pub fn with_token_capacity(mut self, capacity: usize) -> Self {
        self.tokens = TokenTable::with_capacity(capacity);
        self
    }

    /// Register an interaction handler key
    pub fn register_handler(&mut self, key: HandlerKey) {
        self.handlers.insert(key);
    }

    /// App identity
    pub fn app(&self) -> &str {
        &self.app
    }

    /// The registered resources
    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    /// The callback-token table
    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// Draw the next request code from the active policy
    pub fn next_request_code(&self) -> i32 {
        self.codes.next()
    }

    /// Issue a callback token for the given intent
    ///
    /// An unregistered target key is logged but does not fail the issue:
    /// the routing layer will drop delivery, and a degraded notification
    /// is still preferable to a dropped one.
    pub fn issue_token(
        &self,
        request_code: i32,
        kind: TokenKind,
        replacement: Replacement,
        intent: Intent,
    ) -> AppResult<CallbackToken> {
        if !self.handlers.contains(&intent.target) {
            warn!(
                handler = %intent.target,
                "issuing token for unregistered handler, delivery will be dropped"
            );
        }
        self.tokens.issue(request_code, kind, replacement, intent)
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("app", &self.app)
            .field("handlers", &self.handlers)
            .field("tokens_issued", &self.tokens.issued())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::IntentExtras;

    #[test]
    fn test_resource_table_resolves_registered_icons() {
        let mut resources = ResourceTable::new();
        resources.register_icon("ic_alarm", IconId(7));

        assert_eq!(resources.resolve_icon("ic_alarm"), Some(IconId(7)));
        assert_eq!(resources.resolve_icon(APP_ICON_NAME), Some(IconId(1)));
        assert_eq!(resources.resolve_icon("missing"), None);
    }

    #[test]
    fn test_unknown_icon_degrades_to_app_icon() {
        let resources = ResourceTable::new();
        assert_eq!(resources.resolve_icon_or_app("missing"), resources.app_icon());
    }

    #[test]
    fn test_unknown_image_is_omitted() {
        let resources = ResourceTable::new();
        assert!(resources.resolve_image("missing").is_none());
    }

    #[test]
    fn test_platform_issues_tokens_for_unregistered_handlers() {
        let platform = Platform::new("demo");
        let intent = Intent::new(HandlerKey::new("unknown"), IntentExtras::plain("{}"));
        let token = platform
            .issue_token(3, TokenKind::Broadcast, Replacement::UpdateCurrent, intent)
            .unwrap();

        assert_eq!(token.request_code, 3);
        assert_eq!(platform.tokens().issued(), 1);
    }

    #[test]
    fn test_platform_from_config_registers_configured_handlers() {
        let mut config = Config::default();
        config.handlers.clear = "my-clear".to_string();
        config.codes.policy = "sequential".to_string();

        let platform = Platform::from_config(&config);
        assert_eq!(platform.next_request_code(), 1);
        assert_eq!(platform.next_request_code(), 2);

        let intent = Intent::new(HandlerKey::new("my-clear"), IntentExtras::plain("{}"));
        assert!(platform
            .issue_token(1, TokenKind::Broadcast, Replacement::UpdateCurrent, intent)
            .is_ok());
    }
}
