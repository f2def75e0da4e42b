//! jsonsig sign - Sign a payload

use super::{chain_id, domain, load_payload};
use crate::cli::SignCmd;
use crate::config::{self, Config};
use anyhow::{Context, Result};
use ethers::signers::{LocalWallet, Signer};
use jsonsig::{bytes_signature, keys};
use tracing::debug;

pub async fn run(cmd: SignCmd) -> Result<()> {
    let config = config::load()?;
    let wallet = resolve_wallet(cmd.key.as_deref(), &config)?;
    debug!(address = %keys::checksum_address(&wallet.address()), "loaded signing key");

    let payload = load_payload(&cmd.payload)?;
    let chain = chain_id(&cmd.payload, &config);

    let signature = bytes_signature::sign(domain(chain.as_deref()), &payload, &wallet)?;
    println!("{signature}");

    Ok(())
}

/// --key / JSONSIG_PRIVATE_KEY, else the configured key file
fn resolve_wallet(key: Option<&str>, config: &Config) -> Result<LocalWallet> {
    if let Some(key) = key {
        return Ok(keys::load_wallet(key)?);
    }

    let path = &config.identity.key_path;
    let key_file = config::read_key_file(path)
        .context("No signing key: pass --key, set JSONSIG_PRIVATE_KEY or run `jsonsig keygen`")?;
    Ok(keys::load_wallet(&key_file.private_key)?)
}
