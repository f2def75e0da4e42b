//! Wallet loading and public key helpers

use crate::encoding::{bytes_to_hex, hex_to_bytes, strip_0x};
use crate::{Error, Result};
use ethers::core::k256::ecdsa::VerifyingKey;
use ethers::core::k256::elliptic_curve::sec1::ToEncodedPoint;
use ethers::signers::LocalWallet;
use ethers::types::Address;
use ethers::utils::{public_key_to_address, to_checksum};

/// Generate a new random wallet
pub fn generate_wallet() -> LocalWallet {
    LocalWallet::new(&mut ethers::core::rand::thread_rng())
}

/// Load a wallet from a private key hex string
pub fn load_wallet(private_key: &str) -> Result<LocalWallet> {
    let key = strip_0x(private_key.trim());
    key.parse::<LocalWallet>()
        .map_err(|e| Error::decoding(format!("invalid private key: {e}")))
}

/// Hex-encode a verifying key in compressed (33 bytes) or uncompressed (65 bytes) form.
pub fn encode_public_key(key: &VerifyingKey, compressed: bool) -> String {
    bytes_to_hex(key.as_affine().to_encoded_point(compressed).as_bytes(), false)
}

/// Public key of a wallet, `0x`-prefixed.
pub fn public_key(wallet: &LocalWallet, compressed: bool) -> String {
    encode_public_key(wallet.signer().verifying_key(), compressed)
}

/// Parse a SEC1 public key in either form, with or without `0x`.
pub fn parse_public_key(public_key: &str) -> Result<VerifyingKey> {
    let bytes = hex_to_bytes(public_key)?;
    match bytes.first() {
        Some(0x02) | Some(0x03) if bytes.len() == 33 => {}
        Some(0x04) if bytes.len() == 65 => {}
        _ => {
            return Err(Error::decoding(format!(
                "public key must be 33 compressed or 65 uncompressed bytes, got {}",
                bytes.len()
            )))
        }
    }
    VerifyingKey::from_sec1_bytes(&bytes)
        .map_err(|_| Error::decoding("public key is not a point on secp256k1"))
}

/// Convert a public key between its compressed and uncompressed encodings.
pub fn compute_public_key(public_key: &str, compressed: bool) -> Result<String> {
    let key = parse_public_key(public_key)?;
    Ok(encode_public_key(&key, compressed))
}

/// Ethereum address derived from a public key in either form.
pub fn compute_address(public_key: &str) -> Result<Address> {
    let key = parse_public_key(public_key)?;
    Ok(public_key_to_address(&key))
}

/// EIP-55 checksummed address string.
pub fn checksum_address(address: &Address) -> String {
    to_checksum(address, None)
}
