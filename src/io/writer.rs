// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! MSB-first bit packing and stream output.

use std::fs;
use std::path::Path;

use crate::core::{BitSequence, Result, SplitError};

/// Accumulator that packs bits into bytes, most-significant bit first.
///
/// Bit 0 of the input becomes the top bit of the first output byte. A final
/// partial group of `k` bits (`0 < k < 8`) is left-shifted into the top `k`
/// positions of a trailing byte whose low `8-k` bits are zero; a sequence
/// whose length is a multiple of 8 emits no trailing byte.
#[derive(Debug, Clone, Default)]
pub struct BitPacker {
    buffer: Vec<u8>,
    acc: u8,
    filled: u8,
}

impl BitPacker {
    /// Create a new empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a packer pre-allocated for `bits` input bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(bits.div_ceil(8)),
            acc: 0,
            filled: 0,
        }
    }

    /// Append one bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.acc = (self.acc << 1) | u8::from(bit);
        self.filled += 1;
        if self.filled == 8 {
            self.buffer.push(self.acc);
            self.acc = 0;
            self.filled = 0;
        }
    }

    /// Get the number of complete bytes emitted so far.
    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    /// Finish packing, zero-padding any final partial byte.
    pub fn finish(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.acc <<= 8 - self.filled;
            self.buffer.push(self.acc);
        }
        self.buffer
    }
}

/// Pack a bit sequence into bytes, MSB-first with zero padding.
pub fn pack_bits(bits: &BitSequence) -> Vec<u8> {
    let mut packer = BitPacker::with_capacity(bits.len());
    for bit in bits.iter() {
        packer.push_bit(bit);
    }
    packer.finish()
}

/// Pack a bit sequence and write it to `path`.
///
/// The output file is created or truncated as needed and written
/// sequentially in binary mode. The handle is scoped inside the call, so it
/// is released on both success and failure paths.
///
/// # Errors
///
/// Returns [`SplitError::Write`] if the path cannot be opened for writing or
/// the write does not complete (permissions, invalid path, disk full).
pub fn write_stream<P: AsRef<Path>>(bits: &BitSequence, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = pack_bits(bits);

    fs::write(path, &bytes)
        .map_err(|e| SplitError::write(path.display().to_string(), e.to_string()))?;

    tracing::debug!(
        "Wrote {} bits as {} bytes to {}",
        bits.len(),
        bytes.len(),
        path.display()
    );

    Ok(())
}
