//! The built notification artifact
//!
//! Wraps the ready-to-post descriptor together with the originating
//! options and the trigger-receiver key the scheduling subsystem will
//! need later. Consumed by the posting subsystem; destroyed when the
//! notification is canceled or cleared.

use crate::descriptor::Descriptor;
use crate::intents::HandlerKey;
use crate::options::Options;

/// A fully built local notification
#[derive(Debug, Clone)]
pub struct Notification {
    options: Options,
    descriptor: Descriptor,
    trigger_receiver: Option<HandlerKey>,
}

impl Notification {
    /// Wrap the build result
    pub fn new(
        options: Options,
        descriptor: Descriptor,
        trigger_receiver: Option<HandlerKey>,
    ) -> Self {
        Self {
            options,
            descriptor,
            trigger_receiver,
        }
    }

    /// Notification id from the originating options
    pub fn id(&self) -> i32 {
        self.options.id()
    }

    /// The originating options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The descriptor the poster submits to the host
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Handler key for the scheduled-delivery event, if one was set
    pub fn trigger_receiver(&self) -> Option<&HandlerKey> {
        self.trigger_receiver.as_ref()
    }

    /// Split into descriptor and options for posting and persistence
    pub fn into_parts(self) -> (Descriptor, Options) {
        (self.descriptor, self.options)
    }
}
