/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message (form loaded, edit mode entered).
    Info,

    /// An operation completed (submission, deletion).
    Success,

    /// An operation was rejected (validation failure).
    Error,
}

/// A transient message for the notification surface.
///
/// The controller pushes one of these for each operation; view layers drain
/// the queue and decide how to present them.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    severity: Severity,
    message: String,
}

impl Notification {
    /// Create an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Create a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Create an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Get the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}
