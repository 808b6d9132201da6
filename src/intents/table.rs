//! System-wide callback-token table
//!
//! Issued tokens are a real host resource with a platform-imposed limit.
//! The table is keyed by request code alone: issuing against an occupied
//! code does not fail. With update-current the existing registration is
//! kept and its intent payload replaced; with cancel-current the existing
//! registration is revoked and a fresh one issued in its place. Callers
//! that reuse a request code across unrelated notifications therefore
//! silently clobber each other's delivery; that overwrite behavior is
//! load-bearing and kept as is.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use super::types::{CallbackToken, Intent, Replacement, TokenKind};
use crate::errors::{AppError, AppResult};

/// Default number of distinct tokens the host allows per app
pub const DEFAULT_TOKEN_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
struct Registration {
    kind: TokenKind,
    intent: Intent,
    generation: u64,
}

/// The host's callback-token table
#[derive(Debug)]
pub struct TokenTable {
    entries: Mutex<HashMap<i32, Registration>>,
    capacity: usize,
}

impl TokenTable {
    /// Create a table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TOKEN_CAPACITY)
    }

    /// Create a table with an explicit capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    /// Issue a callback token for the given intent
    ///
    /// Fails only when a fresh request code would exceed the table
    /// capacity; reuse of an occupied code always succeeds via the
    /// replacement semantics above.
    pub fn issue(
        &self,
        request_code: i32,
        kind: TokenKind,
        replacement: Replacement,
        intent: Intent,
    ) -> AppResult<CallbackToken> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::token("token table lock poisoned"))?;

        if !entries.contains_key(&request_code) && entries.len() >= self.capacity {
            return Err(AppError::TokenLimit {
                capacity: self.capacity,
            });
        }

        match entries.entry(request_code) {
            Entry::Occupied(mut occupied) => {
                let generation = match replacement {
                    Replacement::UpdateCurrent => occupied.get().generation,
                    Replacement::CancelCurrent => occupied.get().generation + 1,
                };
                debug!(
                    request_code,
                    ?replacement,
                    "request code already registered, replacing"
                );
                occupied.insert(Registration {
                    kind,
                    intent: intent.clone(),
                    generation,
                });
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Registration {
                    kind,
                    intent: intent.clone(),
                    generation: 0,
                });
            }
        }

        Ok(CallbackToken {
            request_code,
            kind,
            replacement,
            intent,
        })
    }

    /// Number of distinct tokens currently registered
    pub fn issued(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether a token is registered under the given request code
    pub fn contains(&self, request_code: i32) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(&request_code))
            .unwrap_or(false)
    }

    /// The intent currently bound to a request code
    pub fn intent_for(&self, request_code: i32) -> Option<Intent> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(&request_code).map(|r| r.intent.clone()))
    }

    /// How many times the registration under this code has been revoked
    /// and re-issued
    pub fn generation(&self, request_code: i32) -> Option<u64> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(&request_code).map(|r| r.generation))
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::types::{HandlerKey, IntentExtras};

    fn intent(payload: &str) -> Intent {
        Intent::new(HandlerKey::default_click(), IntentExtras::plain(payload))
    }

    #[test]
    fn test_issue_registers_token() {
        let table = TokenTable::new();
        let token = table
            .issue(
                5,
                TokenKind::Activity,
                Replacement::UpdateCurrent,
                intent("{\"id\":1}"),
            )
            .unwrap();

        assert_eq!(token.request_code, 5);
        assert_eq!(table.issued(), 1);
        assert!(table.contains(5));
    }

    #[test]
    fn test_update_current_replaces_payload_in_place() {
        let table = TokenTable::new();
        table
            .issue(9, TokenKind::Broadcast, Replacement::UpdateCurrent, intent("first"))
            .unwrap();
        table
            .issue(9, TokenKind::Broadcast, Replacement::UpdateCurrent, intent("second"))
            .unwrap();

        assert_eq!(table.issued(), 1);
        assert_eq!(table.intent_for(9).unwrap().extras.options, "second");
        assert_eq!(table.generation(9), Some(0));
    }

    #[test]
    fn test_cancel_current_revokes_then_reissues() {
        let table = TokenTable::new();
        table
            .issue(9, TokenKind::Broadcast, Replacement::CancelCurrent, intent("first"))
            .unwrap();
        table
            .issue(9, TokenKind::Broadcast, Replacement::CancelCurrent, intent("second"))
            .unwrap();

        assert_eq!(table.issued(), 1);
        assert_eq!(table.intent_for(9).unwrap().extras.options, "second");
        assert_eq!(table.generation(9), Some(1));
    }

    #[test]
    fn test_capacity_limit_applies_to_fresh_codes_only() {
        let table = TokenTable::with_capacity(2);
        table
            .issue(1, TokenKind::Broadcast, Replacement::UpdateCurrent, intent("a"))
            .unwrap();
        table
            .issue(2, TokenKind::Broadcast, Replacement::UpdateCurrent, intent("b"))
            .unwrap();

        let err = table
            .issue(3, TokenKind::Broadcast, Replacement::UpdateCurrent, intent("c"))
            .unwrap_err();
        match err {
            AppError::TokenLimit { capacity } => assert_eq!(capacity, 2),
            _ => panic!("Wrong error type"),
        }

        // Reusing an occupied code still works at capacity.
        assert!(table
            .issue(2, TokenKind::Broadcast, Replacement::UpdateCurrent, intent("b2"))
            .is_ok());
        assert_eq!(table.intent_for(2).unwrap().extras.options, "b2");
    }
}
