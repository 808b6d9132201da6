//! Builder for local notifications
//!
//! Translates parsed Options into a fully configured notification
//! descriptor and wires up the click/clear callback tokens. Build order
//! mirrors the host API: base fields, then the LED, sound, and icon
//! branches, then the delete and content tokens.

use tracing::{debug, warn};

use crate::action::Action;
use crate::descriptor::{Button, Category, Descriptor, LedSpec, Priority, Visibility};
use crate::errors::AppResult;
use crate::intents::{CallbackToken, HandlerKey, Intent, IntentExtras, Replacement, TokenKind};
use crate::notification::Notification;
use crate::options::Options;
use crate::platform::{Platform, APP_ICON_NAME};

/// Request code of the delete token
///
/// Fixed at zero: every notification's clear token shares it, relying on
/// the routing action string (the notification id) to disambiguate.
const DELETE_REQUEST_CODE: i32 = 0;

/// Single-shot builder producing one Notification per invocation
///
/// Reentrant-safe: each build call is independent and the Options are
/// never mutated. The only shared resource it touches is the platform's
/// callback-token table.
pub struct Builder<'a> {
    platform: &'a Platform,
    options: Options,

    // Stored for the caller's later scheduling use; unused at build time.
    trigger_receiver: Option<HandlerKey>,

    clear_receiver: Option<HandlerKey>,
    click_target: Option<HandlerKey>,
}

impl<'a> Builder<'a> {
    /// Create a builder with the standard clear and click handlers wired
    pub fn new(platform: &'a Platform, options: Options) -> Self {
        Self {
            platform,
            options,
            trigger_receiver: None,
            clear_receiver: Some(HandlerKey::default_clear()),
            click_target: Some(HandlerKey::default_click()),
        }
    }

    /// Set the trigger receiver stored on the built notification
    pub fn trigger_receiver(mut self, receiver: HandlerKey) -> Self {
        self.trigger_receiver = Some(receiver);
        self
    }

    /// Override the clear receiver; `None` drops the delete token entirely
    pub fn clear_receiver(mut self, receiver: Option<HandlerKey>) -> Self {
        self.clear_receiver = receiver;
        self
    }

    /// Override the click target; `None` drops the content token and all
    /// action buttons
    pub fn click_target(mut self, target: Option<HandlerKey>) -> Self {
        self.click_target = target;
        self
    }

    /// Create the notification with all its configured options
    pub fn build(self) -> AppResult<Notification> {
        let options = &self.options;
        let led_color = options.led_color();

        debug!(id = options.id(), "building notification");

        let mut descriptor = Descriptor {
            title: options.title().to_string(),
            text: options.text().to_string(),
            ticker: options.text().to_string(),
            badge: options.badge(),
            visibility: Visibility::Public,
            category: Category::Alarm,
            priority: Priority::Max,
            auto_clear: options.is_auto_clear(),
            ongoing: options.is_ongoing(),
            color: options.color(),
            lights: None,
            sound: None,
            small_icon: self.platform.resources().app_icon(),
            large_icon: None,
            buttons: Vec::new(),
            content_token: None,
            delete_token: None,
        };

        if led_color != 0 {
            descriptor.lights = Some(LedSpec {
                color: led_color,
                on_ms: options.led_on_time(),
                off_ms: options.led_off_time(),
            });
        }

        if let Some(sound) = options.sound_uri() {
            descriptor.sound = Some(sound.to_string());
        }

        self.apply_icons(&mut descriptor);
        self.apply_delete_token(&mut descriptor)?;
        self.apply_content_token(&mut descriptor)?;

        Ok(Notification::new(
            self.options,
            descriptor,
            self.trigger_receiver,
        ))
    }

    /// Resolve the small/large icon pair
    ///
    /// Without a small-icon override the app icon (or the named default
    /// icon) becomes the small icon. With an override, the override is the
    /// small icon and the default icon is separately resolved as the large
    /// icon image. The two branches are mutually exclusive.
    fn apply_icons(&self, descriptor: &mut Descriptor) {
        let resources = self.platform.resources();

        let override_icon = self.options.small_icon_name().and_then(|name| {
            let resolved = resources.resolve_icon(name);
            if resolved.is_none() {
                warn!(icon = name, "unknown small-icon override, using default icon");
            }
            resolved
        });

        match override_icon {
            None => {
                descriptor.small_icon = match self.options.icon_name() {
                    Some(name) => resources.resolve_icon_or_app(name),
                    None => resources.app_icon(),
                };
            }
            Some(small_icon) => {
                descriptor.small_icon = small_icon;
                let image_name = self.options.icon_name().unwrap_or(APP_ICON_NAME);
                descriptor.large_icon = resources.resolve_image(image_name);
            }
        }
    }

    /// Wire the delete token handling the clear event
    ///
    /// Will let the clear receiver clean up persisted state. Skipped
    /// entirely when the clear receiver was explicitly removed.
    fn apply_delete_token(&self, descriptor: &mut Descriptor) -> AppResult<()> {
        let Some(target) = self.clear_receiver.clone() else {
            return Ok(());
        };

        let intent = Intent::new(target, IntentExtras::plain(self.options.payload()))
            .with_action(self.options.id_str());

        let token = self.platform.issue_token(
            DELETE_REQUEST_CODE,
            TokenKind::Broadcast,
            Replacement::UpdateCurrent,
            intent,
        )?;

        descriptor.delete_token = Some(token);
        Ok(())
    }

    /// Wire the content token handling the click event, plus one token per
    /// action button
    ///
    /// Will bring the app to the foreground. The content token's extras
    /// carry a null action slot so the click handler can tell a plain tap
    /// from a button press.
    fn apply_content_token(&self, descriptor: &mut Descriptor) -> AppResult<()> {
        let Some(target) = self.click_target.clone() else {
            return Ok(());
        };

        let intent = Intent::new(target.clone(), IntentExtras::plain(self.options.payload()))
            .no_history();

        let request_code = self.platform.next_request_code();
        let content_token = self.platform.issue_token(
            request_code,
            TokenKind::Activity,
            Replacement::UpdateCurrent,
            intent,
        )?;

        for action in self.options.actions() {
            let token = self.token_for_action(&target, action)?;
            let icon = match action.icon.as_deref() {
                Some(name) => self.platform.resources().resolve_icon_or_app(name),
                None => self.platform.resources().app_icon(),
            };
            descriptor.buttons.push(Button {
                icon,
                title: action.title.clone(),
                token,
            });
        }

        descriptor.content_token = Some(content_token);
        Ok(())
    }

    /// Issue a callback token for a notification action, including the
    /// action's identifier in both the routing key and the extras
    fn token_for_action(&self, target: &HandlerKey, action: &Action) -> AppResult<CallbackToken> {
        let identifier = action.identifier();

        let intent = Intent::new(
            target.clone(),
            IntentExtras::for_action(self.options.payload(), identifier),
        )
        .with_action(identifier);

        let request_code = self.platform.next_request_code();
        self.platform.issue_token(
            request_code,
            TokenKind::Broadcast,
            Replacement::CancelCurrent,
            intent,
        )
    }
}
