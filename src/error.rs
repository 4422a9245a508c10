//! Error handling for domain-finder

use std::time::Duration;
use thiserror::Error;

/// Main error type for domain-finder
#[derive(Error, Debug, Clone)]
pub enum DomainFinderError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Required tool '{tool}' is not installed")]
    ToolMissing { tool: String },

    #[error("Failed to start '{tool}': {message}")]
    Spawn { tool: String, message: String },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl DomainFinderError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing-tool error
    pub fn tool_missing(tool: impl Into<String>) -> Self {
        Self::ToolMissing { tool: tool.into() }
    }

    /// Create an error for a tool that exists but could not be started
    pub fn spawn(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Spawn {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs: timeout.as_secs(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Whether the driver loop must stop on this error.
    ///
    /// A timed-out generator turns into an empty batch and is retried;
    /// a tool that is missing or cannot be started ends the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Timeout { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}", message)
            }
            Self::ToolMissing { tool } => {
                format!("❌ Error: '{}' CLI not found.\n💡 Install it first and make sure it is on your PATH", tool)
            }
            Self::Spawn { tool, message } => {
                format!("❌ Could not start '{}': {}\n💡 Check that it is executable", tool, message)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  '{}' timed out after {}s", operation, timeout_secs)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainFinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(DomainFinderError::tool_missing("claude").is_fatal());
        assert!(!DomainFinderError::timeout("claude", Duration::from_secs(60)).is_fatal());
        assert!(DomainFinderError::spawn("claude", "Permission denied").is_fatal());
    }

    #[test]
    fn test_user_messages() {
        let msg = DomainFinderError::tool_missing("claude").user_message();
        assert!(msg.contains("'claude' CLI not found"));

        let msg = DomainFinderError::spawn("claude", "Permission denied").user_message();
        assert!(msg.contains("Could not start 'claude'"));
        assert!(msg.contains("Permission denied"));

        let msg = DomainFinderError::timeout("whois", Duration::from_secs(10)).to_string();
        assert_eq!(msg, "Timeout error: whois timed out after 10s");
    }
}
