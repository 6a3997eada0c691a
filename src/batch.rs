//! Batch entry limits.
//!
//! In batch mode the input holds several identifiers separated by commas.
//! [`BatchLimit`] caps how many of them may be entered at once.

use serde::Deserialize;
use thiserror::Error;

/// Default maximum number of comma separated entries.
pub const DEFAULT_BATCH_MAX: usize = 200;

/// Separator between batch entries.
pub const SEPARATOR: char = ',';

/// Why a batch value was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// More entries than the configured maximum.
    #[error("too many entries: {count} exceeds the batch maximum of {max}")]
    TooManyEntries {
        /// Entries in the refused value.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Number of comma separated segments in `value`.
///
/// Empty segments count, so `"a,"` has two.
pub fn segment_count(value: &str) -> usize {
    value.split(SEPARATOR).count()
}

/// Batch mode switch and entry cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchLimit {
    /// Whether the cap is enforced.
    pub enabled: bool,
    /// Maximum number of entries.
    pub max: usize,
}

impl Default for BatchLimit {
    fn default() -> Self {
        Self {
            enabled: false,
            max: DEFAULT_BATCH_MAX,
        }
    }
}

impl BatchLimit {
    /// An enforced limit of `max` entries.
    pub fn new(max: usize) -> Self {
        Self { enabled: true, max }
    }

    /// A limit that accepts everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Accepts `value` unless batch mode is on, it contains a comma, and it
    /// has more segments than allowed.
    ///
    /// ```rust
    /// use bubbletea_user_input::batch::{BatchError, BatchLimit};
    ///
    /// let limit = BatchLimit::new(2);
    /// assert!(limit.check("a,b").is_ok());
    /// assert_eq!(
    ///     limit.check("a,b,c"),
    ///     Err(BatchError::TooManyEntries { count: 3, max: 2 })
    /// );
    /// ```
    pub fn check(&self, value: &str) -> Result<(), BatchError> {
        if !self.enabled || !value.contains(SEPARATOR) {
            return Ok(());
        }
        let count = segment_count(value);
        if count > self.max {
            return Err(BatchError::TooManyEntries {
                count,
                max: self.max,
            });
        }
        Ok(())
    }
}
