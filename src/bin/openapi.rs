//! Prints the products `OpenAPI` document as pretty JSON on stdout.

use anyhow::{Context, Result};
use std::io::{self, Write};

fn main() -> Result<()> {
    let json = products::api::openapi()
        .to_pretty_json()
        .context("Failed to serialize OpenAPI document")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;

    Ok(())
}
