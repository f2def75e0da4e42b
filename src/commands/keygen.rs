//! jsonsig keygen - Create a signing key

use crate::cli::KeygenCmd;
use crate::config::{self, KeyFile};
use anyhow::{bail, Result};
use chrono::Utc;
use ethers::signers::Signer;
use jsonsig::keys;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run(cmd: KeygenCmd) -> Result<()> {
    let mut config = config::load()?;

    println!("Generating keypair...");
    let wallet = keys::generate_wallet();

    let key = KeyFile {
        address: keys::checksum_address(&wallet.address()),
        public_key: keys::public_key(&wallet, !config.signing.expanded_keys),
        private_key: hex::encode(wallet.signer().to_bytes()),
        created_at: Utc::now(),
    };

    println!("Address: {}", key.address);
    println!("Public key: {}", keys::public_key(&wallet, true));
    println!("Public key (expanded): {}", keys::public_key(&wallet, false));

    if cmd.no_save {
        println!("Private key: {}", key.private_key);
        return Ok(());
    }

    let path = cmd
        .out
        .map(PathBuf::from)
        .unwrap_or_else(|| config.identity.key_path.clone());
    save_key(&key, &path, cmd.force)?;
    info!(path = %path.display(), "wrote key file");

    // First run: persist the config so later commands find the key
    if !config::config_path()?.exists() {
        config.identity.key_path = path.clone();
        config::save(&config)?;
    }

    println!();
    println!("Key file: {}", path.display());
    println!("Config: {}", config::config_path()?.display());

    Ok(())
}

/// Write `key` to `path`, refusing to replace an existing key unless forced.
fn save_key(key: &KeyFile, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Key file {} already exists; pass --force to replace it",
            path.display()
        );
    }
    config::write_key_file(key, path)
}
