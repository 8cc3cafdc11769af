//! Soft wall-clock limit shared by every step of one diff

use std::time::{Duration, Instant};

/// Absolute wall-clock limit for one top-level diff
///
/// Computed once from the configured timeout and passed by value into every
/// recursive call, so the whole call tree shares a single budget. `Deadline::none()`
/// never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    /// Deadline `timeout` from now; `None` means unconstrained
    pub fn after(timeout: Option<Duration>) -> Self {
        match timeout {
            Some(timeout) => Self(Instant::now().checked_add(timeout)),
            None => Self(None),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|instant| Instant::now() >= instant)
    }
}
