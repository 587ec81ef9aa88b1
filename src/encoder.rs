// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pipeline facade sequencing reader, splitter, and stream writers.
//!
//! # Architecture
//!
//! - [`EncodeOptions`] - Configuration for encode operations
//! - [`EncodeStats`] - Statistics from encode operations
//! - [`Encoder`] - Facade that runs the full pipeline

use std::fmt;
use std::path::Path;

use crate::core::Result;
use crate::io::{read_bytes, write_stream};
use crate::split::{split_with, BalancedRouter, BitRouter};

/// Options for encode operations.
#[derive(Clone)]
pub struct EncodeOptions {
    /// Routing strategy deciding which stream receives each bit.
    pub router: Box<dyn BitRouter>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            router: Box::new(BalancedRouter),
        }
    }
}

impl fmt::Debug for EncodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeOptions")
            .field("router", &self.router.name())
            .finish()
    }
}

impl EncodeOptions {
    /// Replace the routing strategy.
    pub fn with_router(mut self, router: Box<dyn BitRouter>) -> Self {
        self.router = router;
        self
    }
}

/// Statistics from an encode operation.
#[derive(Debug, Clone, Default)]
pub struct EncodeStats {
    /// Bytes read from the input file
    pub input_bytes: u64,

    /// Total bits routed (always `input_bytes * 8`)
    pub bits_total: u64,

    /// Bits routed to stream A
    pub bits_a: u64,

    /// Bits routed to stream B
    pub bits_b: u64,

    /// Packed bytes written to output A (including any padded final byte)
    pub bytes_a: u64,

    /// Packed bytes written to output B (including any padded final byte)
    pub bytes_b: u64,
}

impl EncodeStats {
    /// Create a new empty statistics struct.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pipeline facade: read input, split its bits, write both packed streams.
///
/// The pipeline is a pure value-passing sequence with no shared state; an
/// `Encoder` is cheap to create per invocation.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use bitsplit::Encoder;
///
/// let stats = Encoder::new().encode("input.bin", "a.bin", "b.bin")?;
/// assert_eq!(stats.bits_total, stats.bits_a + stats.bits_b);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder with the default balanced routing strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with custom options.
    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Get the options used for encoding.
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Run the full pipeline: read `input`, split, write `out_a` and `out_b`.
    ///
    /// The two output writes run sequentially, A first. A failed write does
    /// not roll back a stream already written.
    ///
    /// # Errors
    ///
    /// Returns the reader's error if `input` cannot be read (before any
    /// output is created), or the writer's error if either output path
    /// cannot be written.
    pub fn encode<P1, P2, P3>(&self, input: P1, out_a: P2, out_b: P3) -> Result<EncodeStats>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
        P3: AsRef<Path>,
    {
        let buffer = read_bytes(&input)?;
        let (stream_a, stream_b) = split_with(&buffer, self.options.router.as_ref());

        let stats = EncodeStats {
            input_bytes: buffer.len() as u64,
            bits_total: (buffer.len() as u64) * 8,
            bits_a: stream_a.len() as u64,
            bits_b: stream_b.len() as u64,
            bytes_a: (stream_a.len() as u64).div_ceil(8),
            bytes_b: (stream_b.len() as u64).div_ceil(8),
        };

        write_stream(&stream_a, &out_a)?;
        write_stream(&stream_b, &out_b)?;

        tracing::info!(
            "Encoded {} with '{}' routing: {} bits -> {} + {}",
            input.as_ref().display(),
            self.options.router.name(),
            stats.bits_total,
            stats.bits_a,
            stats.bits_b
        );

        Ok(stats)
    }
}
