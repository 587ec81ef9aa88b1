// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Bitsplit CLI
//!
//! Command-line front end for the bit-splitting pipeline.
//!
//! ## Usage
//!
//! ```sh
//! # Split input.bin into two packed bit streams
//! bitsplit input.bin a.bin b.bin
//! ```
//!
//! Exit codes: 0 on success, 1 on a usage error, 2 on a read or write
//! failure.

use std::path::PathBuf;
use std::process;
use std::sync::Once;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bitsplit::{EncodeStats, Encoder, SplitError};

const USAGE: &str = "Usage: bitsplit <in> <outA> <outB>";

/// Bitsplit - bit-level file splitter
///
/// Reads a binary file, routes its bit sequence into two balanced streams,
/// and writes each stream as its own packed binary file.
#[derive(Parser, Clone, Debug)]
#[command(name = "bitsplit")]
#[command(about = "Bit-level file splitter producing two balanced packed streams", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Input file to split
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file receiving stream A
    #[arg(value_name = "OUTPUT_A")]
    output_a: PathBuf,

    /// Output file receiving stream B
    #[arg(value_name = "OUTPUT_B")]
    output_b: PathBuf,
}

static INIT: Once = Once::new();

/// Initialize the tracing/logging layer.
///
/// Reads `BITSPLIT_LOG` for filter directives, falling back to
/// `bitsplit=warn`. Idempotent.
fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BITSPLIT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("bitsplit=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

fn run(cli: Cli) -> Result<EncodeStats> {
    let encoder = Encoder::new();
    Ok(encoder.encode(&cli.input, &cli.output_a, &cli.output_b)?)
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(_) => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        match e.downcast_ref::<SplitError>() {
            Some(err) if err.is_write() => eprintln!("Failed to write output file"),
            _ => eprintln!("Failed to read input file"),
        }
        tracing::error!("{}", e);
        process::exit(2);
    }
}
