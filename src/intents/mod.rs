//! Callback-token wiring between notifications and the host app
//!
//! This module models the side channel a posted notification uses to route
//! user interaction back into the app: symbolic handler keys resolved by
//! the host routing layer, intents with an opaque options payload, the
//! request-code allocation policy, and the system-wide token table with
//! its overwrite semantics.

pub mod codes;
pub mod table;
pub mod types;

pub use codes::{FixedCodes, RandomCodes, RequestCodePolicy, SequentialCodes};
pub use table::TokenTable;
pub use types::{CallbackToken, HandlerKey, Intent, IntentExtras, Replacement, TokenKind};
