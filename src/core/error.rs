// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for bitsplit.
//!
//! Provides error types for the split pipeline:
//! - Reading the input file
//! - Writing the packed output streams

use std::fmt;

/// Errors that can occur during the split pipeline.
///
/// Every error is terminal for the invocation: the pipeline is a single-shot
/// batch conversion with no retry logic.
#[derive(Debug, Clone)]
pub enum SplitError {
    /// Input file could not be read
    Read {
        /// Path that failed to open or read
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// Output file could not be created or written
    Write {
        /// Path that failed to open or write
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// Other error
    Other(String),
}

impl SplitError {
    /// Create a read error.
    pub fn read(path: impl Into<String>, message: impl Into<String>) -> Self {
        SplitError::Read {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<String>, message: impl Into<String>) -> Self {
        SplitError::Write {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this is a read error.
    pub fn is_read(&self) -> bool {
        matches!(self, SplitError::Read { .. })
    }

    /// Check if this is a write error.
    pub fn is_write(&self) -> bool {
        matches!(self, SplitError::Write { .. })
    }

    /// Get the path the error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            SplitError::Read { path, .. } | SplitError::Write { path, .. } => Some(path),
            SplitError::Other(_) => None,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            SplitError::Read { path, message } => {
                vec![("path", path.clone()), ("message", message.clone())]
            }
            SplitError::Write { path, message } => {
                vec![("path", path.clone()), ("message", message.clone())]
            }
            SplitError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Read { path, message } => {
                write!(f, "Failed to read '{path}': {message}")
            }
            SplitError::Write { path, message } => {
                write!(f, "Failed to write '{path}': {message}")
            }
            SplitError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for SplitError {}

/// Result type for bitsplit operations.
pub type Result<T> = std::result::Result<T, SplitError>;
