// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Whole-file input reading.

use std::fs;
use std::path::Path;

use crate::core::{Result, SplitError};

/// Read a file's entire content into one contiguous byte buffer.
///
/// The file is opened in binary mode and byte order is preserved exactly.
/// The handle is scoped inside the call, so it is released on both success
/// and failure paths.
///
/// # Errors
///
/// Returns [`SplitError::Read`] if the file is missing, unreadable, or
/// permission is denied. No partial buffer is exposed on failure.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let buffer = fs::read(path)
        .map_err(|e| SplitError::read(path.display().to_string(), e.to_string()))?;

    tracing::debug!("Read {} bytes from {}", buffer.len(), path.display());

    Ok(buffer)
}
