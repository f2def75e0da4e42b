//! jsonsig digest - Show what gets signed

use super::{chain_id, domain, load_payload};
use crate::cli::DigestCmd;
use crate::config;
use anyhow::Result;
use jsonsig::digest::{eip191_hash, payload_hash};

pub async fn run(cmd: DigestCmd) -> Result<()> {
    let config = config::load()?;
    let payload = load_payload(&cmd.payload)?;
    let chain = chain_id(&cmd.payload, &config);

    let digest = domain(chain.as_deref()).digest(&payload);

    println!("Payload hash: keccak256:{}", payload_hash(&payload));
    println!("Digest: {:?}", String::from_utf8_lossy(&digest));
    println!("Signing hash: 0x{}", hex::encode(eip191_hash(&digest)));

    Ok(())
}
