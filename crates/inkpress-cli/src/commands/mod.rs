pub mod config;
pub mod summarize;
pub mod title;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Take the input text from the argument, a file, or stdin, in that order
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
