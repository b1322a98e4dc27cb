//! Preference store error types.
//!
//! Every store operation returns a structured error with a user-friendly
//! message, so front ends can report storage problems without matching on
//! the variants themselves.

use std::path::PathBuf;
use thiserror::Error;

/// Preference store operation error.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// File I/O error.
    #[error("Failed to {operation} preferences file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize preferences")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The preferences file exists but is not a valid document.
    #[error("Failed to parse preferences file: {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete preferences flush")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A key holds a value of a different kind than the caller asked for.
    #[error("Preference {namespace}/{key} holds {found}, expected {expected}")]
    TypeMismatch {
        namespace: String,
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A previous writer panicked while holding the store lock.
    #[error("Preference store lock poisoned")]
    Poisoned,
}

impl PrefsError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!(
                    "Could not {} the preferences file at {}",
                    operation,
                    path.display()
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the preferences.".to_string()
            }
            Self::Deserialization { path, .. } => {
                format!(
                    "The preferences file at {} is corrupted and could not be read.",
                    path.display()
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save preferences to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::TypeMismatch {
                namespace, key, ..
            } => {
                format!("The stored preference {namespace}/{key} has an unexpected type.")
            }
            Self::Poisoned => "The preference store is unavailable.".to_string(),
        }
    }
}

/// Result type alias for preference store operations.
pub type Result<T> = std::result::Result<T, PrefsError>;
