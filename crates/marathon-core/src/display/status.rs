//! Status messages for operation feedback.

use std::fmt;

/// One-line note shown after an operation that has nothing else to report.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create an informational note.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Note: {}", self.message)
    }
}
