// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer for the split pipeline.
//!
//! This module provides the two thin file wrappers around the core logic:
//! whole-file reading into a byte buffer, and MSB-first packing of a bit
//! stream into its output file.

pub mod reader;
pub mod writer;

// Re-exports
pub use reader::read_bytes;
pub use writer::{pack_bits, write_stream, BitPacker};
