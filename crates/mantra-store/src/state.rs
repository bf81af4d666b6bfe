//! Counter state persisted between hook invocations

use crate::{atomic_write, StoreError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of prompts seen since the last context refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub count: u64,
}

impl CounterState {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    /// Advance by one prompt, wrapping to zero when `interval` is reached.
    ///
    /// An interval of zero is not a meaningful configuration; it wraps on
    /// every call rather than panicking.
    pub fn advance(self, interval: u64) -> Self {
        let next = self.count.saturating_add(1);
        Self {
            count: next.checked_rem(interval).unwrap_or(0),
        }
    }

    /// True when the counter sits at the refresh point
    pub fn is_refresh(&self) -> bool {
        self.count == 0
    }
}

/// Load counter state, treating a missing or malformed file as a fresh project
pub fn load_state(path: &Path) -> CounterState {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable state, starting at 0");
            return CounterState::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(state) => state,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "malformed state, starting at 0");
            CounterState::default()
        }
    }
}

/// Persist counter state, creating parent directories as needed
pub fn save_state(path: &Path, state: &CounterState) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(state)?;
    atomic_write(path, json.as_bytes())?;
    Ok(())
}
