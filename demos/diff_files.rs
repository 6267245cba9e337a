//! Diff two files chunk by chunk and print the classification.
//!
//! Run with:
//!     cargo run --example diff_files -- original.txt updated.txt [chunk_size] [byte|blake3|sha256]
//!
//! Set `RUST_LOG=chunkdelta=trace` to see per-position decisions.

use std::process::ExitCode;

use chunkdelta::{ByteCompare, DEFAULT_CHUNK_SIZE, DiffResult, DigestCompare, diff};
use tracing_subscriber::EnvFilter;

fn run() -> Result<DiffResult, Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(original_path), Some(updated_path)) = (args.next(), args.next()) else {
        return Err("usage: diff_files <original> <updated> [chunk_size] [byte|blake3|sha256]".into());
    };
    let chunk_size = match args.next() {
        Some(raw) => raw.parse::<usize>()?,
        None => DEFAULT_CHUNK_SIZE,
    };
    let oracle = args.next().unwrap_or_else(|| "byte".to_string());

    let original = std::fs::read(&original_path)
        .map_err(|e| format!("cannot read {}: {}", original_path, e))?;
    let updated = std::fs::read(&updated_path)
        .map_err(|e| format!("cannot read {}: {}", updated_path, e))?;

    println!(
        "Diffing {} ({} bytes) against {} ({} bytes), chunk size {}, oracle {}\n",
        original_path,
        original.len(),
        updated_path,
        updated.len(),
        chunk_size,
        oracle
    );

    let result = match oracle.as_str() {
        "byte" => diff(original, updated, ByteCompare, chunk_size)?,
        "blake3" => diff(original, updated, DigestCompare::blake3(), chunk_size)?,
        #[cfg(feature = "hash-sha2")]
        "sha256" => diff(original, updated, DigestCompare::sha256(), chunk_size)?,
        other => return Err(format!("unknown oracle: {}", other).into()),
    };

    Ok(result)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(result) => {
            println!("{}\n", result);
            println!(
                "Total: {} positions, {} reusable, {} modified ({} bytes to transfer)",
                result.positions(),
                result.reusables.len(),
                result.modified.len(),
                result.modified_len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
