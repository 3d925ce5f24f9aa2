//! Shared helpers for the one-shot commands.

use anyhow::{Context, Result};
use std::io::Read;

/// Read the whole payload from standard input.
pub fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read standard input")?;
    Ok(input)
}
