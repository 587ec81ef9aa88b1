// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Bitsplit
//!
//! Bit-level file splitting library.
//!
//! This library reads a binary file, decomposes it into its bit sequence
//! (most-significant bit first within each byte), routes every bit into one of
//! two output streams, and packs each stream back into its own byte file.
//!
//! ## Architecture
//!
//! The pipeline is three stages composed linearly:
//! - `io/reader` - loads the whole input file into a byte buffer
//! - `split/` - routes each bit to stream A or stream B via a
//!   [`BitRouter`] strategy (the balanced rule is the default)
//! - `io/writer` - packs each bit stream MSB-first into bytes and writes it
//!
//! The [`Encoder`] facade in `encoder` sequences the stages and reports
//! statistics.
//!
//! ## Example: Splitting a file
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bitsplit::Encoder;
//!
//! let stats = Encoder::new().encode("input.bin", "a.bin", "b.bin")?;
//! println!("routed {} bits ({} to A, {} to B)", stats.bits_total, stats.bits_a, stats.bits_b);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: In-memory splitting
//!
//! ```rust
//! use bitsplit::{pack_bits, split};
//!
//! let (a, b) = split(&[0b1011_0010]);
//! assert_eq!(a.len() + b.len(), 8);
//!
//! let packed = pack_bits(&a);
//! assert_eq!(packed.len(), 1);
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{BitSequence, Lane, Result, SplitError};

// Bit routing strategies and the splitter
pub mod split;

pub use split::{split, split_with, BalancedRouter, BitRouter, RoundRobinRouter};

// File I/O (reader and stream writer)
pub mod io;

pub use io::reader::read_bytes;
pub use io::writer::{pack_bits, write_stream, BitPacker};

// Pipeline facade
pub mod encoder;

pub use encoder::{EncodeOptions, EncodeStats, Encoder};
