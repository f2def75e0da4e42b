//! jsonsig recover - Recover the signer's public key

use super::{chain_id, domain, load_payload};
use crate::cli::RecoverCmd;
use crate::config;
use anyhow::Result;
use jsonsig::{bytes_signature, keys};

pub async fn run(cmd: RecoverCmd) -> Result<()> {
    let config = config::load()?;
    let payload = load_payload(&cmd.payload)?;
    let chain = chain_id(&cmd.payload, &config);

    let expanded = cmd.expanded || config.signing.expanded_keys;
    let public_key = bytes_signature::recover(
        domain(chain.as_deref()),
        &payload,
        &cmd.signature,
        !expanded,
    )?;
    let address = keys::compute_address(&public_key)?;

    println!("Public key: {public_key}");
    println!("Address: {}", keys::checksum_address(&address));

    Ok(())
}
