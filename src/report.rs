//! Diagnostics sink for non-fatal errors.
//!
//! Helpers that keep going after a failure (a stat error during an existence
//! check, an unreadable directory entry, a failed generation step) hand the
//! error to a [`Reporter`] instead of printing it themselves.

use crate::error::Error;

/// Receives errors that were handled but should still be surfaced.
pub trait Reporter {
    fn report(&self, err: &Error);
}

/// Reporter forwarding every error to the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn report(&self, err: &Error) {
        log::error!("{err}");
    }
}
