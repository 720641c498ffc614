//! Estimate Harvest
//!
//! Reads one rooftop description as JSON and prints the harvest estimate.
//!
//! Run with: cargo run --bin estimate_harvest -- site.json
//!       or: cat site.json | cargo run --bin estimate_harvest -- -

use anyhow::{Context, Result};
use rtrwh_estimator::{calculate_harvest, validate, RooftopInput};
use std::io::Read;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: estimate_harvest <input.json | ->"))?;

    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path))?
    };

    let input: RooftopInput = serde_json::from_str(&contents)
        .context("Failed to parse rooftop input JSON")?;
    validate(&input).context("Invalid rooftop input")?;

    let result = calculate_harvest(&input);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
