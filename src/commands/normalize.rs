//! jsonsig normalize - Print canonical JSON

use super::read_input;
use crate::cli::NormalizeCmd;
use anyhow::{Context, Result};
use jsonsig::canonical;

pub async fn run(cmd: NormalizeCmd) -> Result<()> {
    let input = read_input(&cmd.file)?;
    let text = String::from_utf8(input).context("Input is not valid UTF-8")?;
    let canonical = canonical::normalize_str(&text).context("Failed to normalize JSON")?;

    println!("{canonical}");
    Ok(())
}
