//! Recoverable secp256k1 signatures over digests
//!
//! Wire format: 65 bytes `r || s || v`, hex encoded with `0x`.
//! Signatures are produced with `v` in {27, 28} and accepted with `v` in
//! {0, 1, 27, 28}.

use crate::digest::eip191_hash;
use crate::encoding::{bytes_to_hex, hex_to_bytes};
use crate::keys::{encode_public_key, parse_public_key};
use crate::{Error, Result};
use ethers::core::k256::ecdsa::{RecoveryId, Signature as K256Signature, VerifyingKey};
use ethers::signers::{LocalWallet, Signer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const SIGNATURE_LENGTH: usize = 65;

/// A parsed `r || s || v` signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverableSignature {
    signature: K256Signature,
    recovery_id: RecoveryId,
}

impl RecoverableSignature {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(Error::decoding(format!(
                "signature must be {SIGNATURE_LENGTH} bytes, got {}",
                bytes.len()
            )));
        }

        let signature = K256Signature::from_slice(&bytes[..64])
            .map_err(|_| Error::decoding("signature r/s components are out of range"))?;
        let recovery_id = normalize_recovery_id(bytes[64])?;

        // Fold high-s into low-s; negating s mirrors R, so y parity flips
        Ok(match signature.normalize_s() {
            Some(low) => Self {
                signature: low,
                recovery_id: RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            },
            None => Self {
                signature,
                recovery_id,
            },
        })
    }

    /// `v` as emitted on the wire (27 or 28).
    pub fn v(&self) -> u8 {
        27 + self.recovery_id.to_byte()
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..64].copy_from_slice(&self.signature.to_bytes());
        out[64] = self.v();
        out
    }

    /// Recover the key that produced this signature over `prehash`.
    pub fn recover(&self, prehash: &[u8]) -> Option<VerifyingKey> {
        VerifyingKey::recover_from_prehash(prehash, &self.signature, self.recovery_id).ok()
    }
}

impl FromStr for RecoverableSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(&hex_to_bytes(s.trim())?)
    }
}

impl fmt::Display for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bytes_to_hex(&self.to_bytes(), false))
    }
}

fn normalize_recovery_id(v: u8) -> Result<RecoveryId> {
    let id = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        other => return Err(Error::decoding(format!("invalid recovery id: {other}"))),
    };
    RecoveryId::from_byte(id).ok_or_else(|| Error::decoding(format!("invalid recovery id: {v}")))
}

/// Sign a digest as an EIP-191 personal message with a local wallet.
pub fn sign_raw(digest: &[u8], wallet: &LocalWallet) -> Result<RecoverableSignature> {
    let hash = eip191_hash(digest);
    debug!(hash = %hex::encode(hash), "signing digest");

    let signature = wallet
        .sign_hash(hash)
        .map_err(|e| Error::Signing(e.to_string()))?;
    RecoverableSignature::from_bytes(&signature.to_vec())
}

/// Sign a digest with any ethers signer (hardware, remote, local).
///
/// The signer applies the EIP-191 prefix itself.
pub async fn sign_raw_with<S: Signer>(digest: &[u8], signer: &S) -> Result<RecoverableSignature> {
    debug!(signer = ?signer.address(), "signing digest with external signer");

    let signature = signer
        .sign_message(digest)
        .await
        .map_err(|e| Error::Signing(e.to_string()))?;
    RecoverableSignature::from_bytes(&signature.to_vec())
}

/// Check whether `public_key` (compressed or uncompressed) signed `digest`.
///
/// A well-formed signature from another key yields `Ok(false)`.
pub fn is_valid_raw(digest: &[u8], signature: &str, public_key: &str) -> Result<bool> {
    let signature: RecoverableSignature = signature.parse()?;
    let expected = parse_public_key(public_key)?;

    let hash = eip191_hash(digest);
    let valid = match signature.recover(hash.as_bytes()) {
        Some(recovered) => recovered == expected,
        None => false,
    };
    debug!(valid, "verified signature");
    Ok(valid)
}

/// Recover the public key that signed `digest`, compressed or uncompressed.
pub fn recover_public_key_raw(digest: &[u8], signature: &str, compressed: bool) -> Result<String> {
    let signature: RecoverableSignature = signature.parse()?;

    let hash = eip191_hash(digest);
    let recovered = signature
        .recover(hash.as_bytes())
        .ok_or_else(|| Error::decoding("signature does not recover to a public key"))?;
    Ok(encode_public_key(&recovered, compressed))
}
