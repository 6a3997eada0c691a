//! Where refused input is reported.
//!
//! The user input never returns an error for an edit that breaks the batch
//! limit; it hands the [`BatchError`] to a [`Reporter`] and drops the edit.
//! The reporter is passed to the component explicitly, so hosts can route it
//! to a status line, a toast, or a test recorder.

use crate::batch::BatchError;

/// Receives rejected edits.
pub trait Reporter: Send {
    /// Called once for every refused edit.
    fn report(&self, err: &BatchError);
}

/// Default reporter: emits a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, err: &BatchError) {
        match err {
            BatchError::TooManyEntries { count, max } => {
                tracing::error!(
                    target: "bubbletea_user_input",
                    count = *count,
                    max = *max,
                    "{}",
                    err
                );
            }
        }
    }
}

impl<F> Reporter for F
where
    F: Fn(&BatchError) + Send,
{
    fn report(&self, err: &BatchError) {
        self(err)
    }
}
