// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pipeline integration tests.
//!
//! These tests drive the library through the `Encoder` facade and verify the
//! behavioral contract: bit accounting, routing, packing, and failure
//! surfaces.

use std::fs;
use std::path::PathBuf;

use bitsplit::{pack_bits, split, split_with, BitSequence, Encoder, RoundRobinRouter};

/// Get a temporary directory for test files
fn temp_dir(label: &str) -> PathBuf {
    // Use a combination of process ID and a random element to avoid collisions
    // when tests run in parallel
    let random = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let dir = std::env::temp_dir().join(format!(
        "bitsplit_encode_test_{}_{}_{}",
        label,
        std::process::id(),
        random
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Replay the balanced rule over two packed streams to rebuild the original
/// bytes. `total_bits` strips the zero padding the packer may have added.
fn reconstruct(packed_a: &[u8], packed_b: &[u8], total_bits: usize) -> Vec<u8> {
    let bits_a = BitSequence::from_bytes(packed_a);
    let bits_b = BitSequence::from_bytes(packed_b);

    let mut taken_a = 0;
    let mut taken_b = 0;
    let mut merged = BitSequence::with_capacity(total_bits);
    for _ in 0..total_bits {
        if taken_a <= taken_b {
            merged.push(bits_a.get(taken_a).unwrap());
            taken_a += 1;
        } else {
            merged.push(bits_b.get(taken_b).unwrap());
            taken_b += 1;
        }
    }

    pack_bits(&merged)
}

#[test]
fn test_encode_empty_input() {
    let dir = temp_dir("empty");
    let input = dir.join("in.bin");
    let out_a = dir.join("a.bin");
    let out_b = dir.join("b.bin");
    fs::write(&input, []).unwrap();

    let stats = Encoder::new().encode(&input, &out_a, &out_b).unwrap();

    assert_eq!(stats.input_bytes, 0);
    assert_eq!(stats.bits_total, 0);
    assert_eq!(fs::read(&out_a).unwrap().len(), 0);
    assert_eq!(fs::read(&out_b).unwrap().len(), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encode_single_byte() {
    // 0b10110010 routes bits 0,2,4,6 to A and 1,3,5,7 to B:
    // A = 1,1,0,1 -> 0b11010000, B = 0,1,0,0 -> 0b01000000
    let dir = temp_dir("single");
    let input = dir.join("in.bin");
    let out_a = dir.join("a.bin");
    let out_b = dir.join("b.bin");
    fs::write(&input, [0b1011_0010]).unwrap();

    let stats = Encoder::new().encode(&input, &out_a, &out_b).unwrap();

    assert_eq!(stats.bits_a, 4);
    assert_eq!(stats.bits_b, 4);
    assert_eq!(fs::read(&out_a).unwrap(), vec![0b1101_0000]);
    assert_eq!(fs::read(&out_b).unwrap(), vec![0b0100_0000]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encode_uniform_bytes() {
    // All-ones then all-zeros: each stream gets one nibble of each.
    let dir = temp_dir("uniform");
    let input = dir.join("in.bin");
    let out_a = dir.join("a.bin");
    let out_b = dir.join("b.bin");
    fs::write(&input, [0xFF, 0x00]).unwrap();

    Encoder::new().encode(&input, &out_a, &out_b).unwrap();

    assert_eq!(fs::read(&out_a).unwrap(), vec![0xF0]);
    assert_eq!(fs::read(&out_b).unwrap(), vec![0xF0]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encode_stats_accounting() {
    let dir = temp_dir("stats");
    let input = dir.join("in.bin");
    let out_a = dir.join("a.bin");
    let out_b = dir.join("b.bin");
    let payload = b"The quick brown fox jumps over the lazy dog";
    fs::write(&input, payload).unwrap();

    let stats = Encoder::new().encode(&input, &out_a, &out_b).unwrap();

    assert_eq!(stats.input_bytes, payload.len() as u64);
    assert_eq!(stats.bits_total, payload.len() as u64 * 8);
    assert_eq!(stats.bits_a + stats.bits_b, stats.bits_total);
    assert!(stats.bits_a.abs_diff(stats.bits_b) <= 1);
    assert_eq!(fs::read(&out_a).unwrap().len() as u64, stats.bytes_a);
    assert_eq!(fs::read(&out_b).unwrap().len() as u64, stats.bytes_b);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_bit_count_invariant() {
    for len in 0..=32 {
        let buffer: Vec<u8> = (0..len).map(|i| (i * 151 + 7) as u8).collect();
        let (a, b) = split(&buffer);
        assert_eq!(a.len() + b.len(), buffer.len() * 8);
        assert!(a.len().abs_diff(b.len()) <= 1);
    }
}

#[test]
fn test_split_deterministic() {
    let buffer: Vec<u8> = (0..=255).collect();
    let (a1, b1) = split(&buffer);
    let (a2, b2) = split(&buffer);
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}

#[test]
fn test_reconstruction_is_lossless() {
    let inputs: Vec<Vec<u8>> = vec![
        vec![0b1011_0010],
        vec![0xDE, 0xAD, 0xBE, 0xEF],
        (0..=255).collect(),
        b"arbitrary binary content, any length".to_vec(),
    ];

    for input in inputs {
        let (a, b) = split(&input);
        let packed_a = pack_bits(&a);
        let packed_b = pack_bits(&b);
        let rebuilt = reconstruct(&packed_a, &packed_b, input.len() * 8);
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn test_round_robin_router_agrees_with_balanced() {
    let input: Vec<u8> = (0..64).map(|i| (i * 31) as u8).collect();
    let (a1, b1) = split(&input);
    let (a2, b2) = split_with(&input, &RoundRobinRouter);
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}

#[test]
fn test_encode_missing_input_creates_no_outputs() {
    let dir = temp_dir("missing");
    let input = dir.join("no_such_file.bin");
    let out_a = dir.join("a.bin");
    let out_b = dir.join("b.bin");

    let err = Encoder::new().encode(&input, &out_a, &out_b).unwrap_err();

    assert!(err.is_read());
    assert!(!out_a.exists());
    assert!(!out_b.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encode_unwritable_output() {
    let dir = temp_dir("unwritable");
    let input = dir.join("in.bin");
    fs::write(&input, [0x42]).unwrap();

    let out_a = dir.join("no_such_dir").join("a.bin");
    let out_b = dir.join("b.bin");

    let err = Encoder::new().encode(&input, &out_a, &out_b).unwrap_err();
    assert!(err.is_write());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encode_overwrites_existing_outputs() {
    let dir = temp_dir("overwrite");
    let input = dir.join("in.bin");
    let out_a = dir.join("a.bin");
    let out_b = dir.join("b.bin");
    fs::write(&input, [0xFF, 0x00]).unwrap();
    fs::write(&out_a, [0xAA; 32]).unwrap();
    fs::write(&out_b, [0xAA; 32]).unwrap();

    Encoder::new().encode(&input, &out_a, &out_b).unwrap();

    assert_eq!(fs::read(&out_a).unwrap(), vec![0xF0]);
    assert_eq!(fs::read(&out_b).unwrap(), vec![0xF0]);

    let _ = fs::remove_dir_all(&dir);
}
