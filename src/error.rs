use std::fmt::Display;

use thiserror::Error;

/// The operating system's entropy source refused or failed a draw.
///
/// Returned by [`secure_chance`](crate::chance::secure_chance), which never
/// falls back to a weaker generator or a default outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("secure random source failed: {reason}")]
pub struct EntropyError {
    reason: String,
}

impl EntropyError {
    pub(crate) fn from_source(source: impl Display) -> Self {
        Self {
            reason: source.to_string(),
        }
    }

    /// The failure reported by the entropy source.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
