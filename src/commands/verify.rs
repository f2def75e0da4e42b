//! jsonsig verify - Check a signature against a public key

use super::{chain_id, domain, load_payload};
use crate::cli::VerifyCmd;
use crate::config;
use anyhow::{bail, Result};
use jsonsig::bytes_signature;

pub async fn run(cmd: VerifyCmd) -> Result<()> {
    let config = config::load()?;
    let payload = load_payload(&cmd.payload)?;
    let chain = chain_id(&cmd.payload, &config);

    let valid = bytes_signature::is_valid(
        domain(chain.as_deref()),
        &payload,
        &cmd.signature,
        &cmd.public_key,
    )?;

    if !valid {
        bail!("Signature does not match public key {}", cmd.public_key);
    }

    println!("Valid signature");
    Ok(())
}
