//! Caller-tunable diff parameters

use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_EDIT_COST: usize = 4;

/// Configuration shared by every diff a [`Differ`](crate::Differ) computes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// How long a diff may search before settling for a non-minimal script.
    /// `None` searches until the optimal script is found.
    pub timeout: Option<Duration>,
    /// Cost of an extra edit operation in chars, used by efficiency cleanup
    pub edit_cost: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            edit_cost: DEFAULT_EDIT_COST,
        }
    }
}

impl DiffOptions {
    /// Options with no time limit
    pub fn unbounded() -> Self {
        Self {
            timeout: None,
            ..Self::default()
        }
    }

    /// Set the timeout in seconds; zero, negative, non-finite or out-of-range
    /// values remove the limit
    pub fn with_timeout_secs(self, secs: f32) -> Self {
        let timeout = (secs > 0.0)
            .then(|| Duration::try_from_secs_f32(secs).ok())
            .flatten();
        Self { timeout, ..self }
    }

    pub fn with_timeout(self, timeout: Option<Duration>) -> Self {
        Self { timeout, ..self }
    }

    pub fn with_edit_cost(self, edit_cost: usize) -> Self {
        Self { edit_cost, ..self }
    }
}
