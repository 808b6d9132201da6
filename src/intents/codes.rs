//! Request-code allocation policies
//!
//! Request codes distinguish callback tokens in the system-wide token
//! table. Production uses independent random draws per call; uniqueness is
//! best-effort, not required for correctness, since a collision merely
//! overwrites the earlier registration. Tests inject a deterministic
//! policy instead.

use rand::Rng;
use std::sync::atomic::{AtomicI32, Ordering};

/// Pluggable allocation strategy for callback-token request codes
pub trait RequestCodePolicy: Send + Sync {
    /// Produce the next request code
    fn next(&self) -> i32;
}

/// Independent random codes, the production default
///
/// No coordination across calls; collisions are tolerated and resolved by
/// the token table's overwrite semantics.
#[derive(Debug, Default)]
pub struct RandomCodes;

impl RandomCodes {
    pub fn new() -> Self {
        Self
    }
}

impl RequestCodePolicy for RandomCodes {
    fn next(&self) -> i32 {
        rand::thread_rng().gen()
    }
}

/// Monotonically increasing codes for deterministic tests
#[derive(Debug)]
pub struct SequentialCodes {
    next: AtomicI32,
}

impl SequentialCodes {
    /// Start counting from the given code
    pub fn starting_at(start: i32) -> Self {
        Self {
            next: AtomicI32::new(start),
        }
    }
}

impl Default for SequentialCodes {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl RequestCodePolicy for SequentialCodes {
    fn next(&self) -> i32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Always the same code; used to exercise collision handling
#[derive(Debug)]
pub struct FixedCodes(pub i32);

impl RequestCodePolicy for FixedCodes {
    fn next(&self) -> i32 {
        self.0
    }
}
