//! Galois field table generator
//!
//! Prints the EXP and LOG tables for a binary field given its defining
//! polynomial, or for a prime field given its order and optionally a
//! primitive element, in a form that can be pasted into source code.

use anyhow::{Context, Result};
use gfcodec::TableRequest;

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = gfcodec::parse_args();

    let request = TableRequest::from_args(&matches).context("No field type requested")?;
    let output = request
        .render()
        .with_context(|| format!("Failed to generate tables for {request}"))?;

    print!("{output}");
    Ok(())
}
