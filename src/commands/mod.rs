pub mod digest;
pub mod keygen;
pub mod normalize;
pub mod recover;
pub mod sign;
pub mod verify;

use crate::cli::PayloadArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use jsonsig::canonical;
use jsonsig::digest::Domain;
use std::io::Read;

/// Read a file, or stdin when `path` is "-"
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("Failed to read {path}"))
}

/// The bytes a command operates on: the raw input, or its canonical JSON form.
pub fn load_payload(args: &PayloadArgs) -> Result<Vec<u8>> {
    let input = read_input(&args.file)?;
    if !args.json {
        return Ok(input);
    }
    let text = String::from_utf8(input).context("JSON payload is not valid UTF-8")?;
    let canonical = canonical::normalize_str(&text).context("Failed to normalize JSON payload")?;
    Ok(canonical.into_bytes())
}

/// --message forces a message; --chain-id wins over the configured default.
pub fn chain_id(args: &PayloadArgs, config: &Config) -> Option<String> {
    if args.message {
        return None;
    }
    args.chain_id
        .clone()
        .or_else(|| config.signing.chain_id.clone())
}

pub fn domain(chain_id: Option<&str>) -> Domain<'_> {
    match chain_id {
        Some(chain_id) => Domain::Transaction { chain_id },
        None => Domain::Message,
    }
}
