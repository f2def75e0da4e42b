//! Signing of JSON payloads
//!
//! Payloads are normalized with [`crate::canonical`] before signing, so the
//! field order of the caller's object does not affect the signature.

use crate::bytes_signature;
use crate::canonical::to_canonical_bytes;
use crate::digest::Domain;
use crate::Result;
use ethers::signers::{LocalWallet, Signer};
use serde::Serialize;

pub fn sign_message<T: Serialize + ?Sized>(message: &T, wallet: &LocalWallet) -> Result<String> {
    bytes_signature::sign(Domain::Message, &to_canonical_bytes(message)?, wallet)
}

pub async fn sign_message_with<T, S>(message: &T, signer: &S) -> Result<String>
where
    T: Serialize + ?Sized,
    S: Signer,
{
    let payload = to_canonical_bytes(message)?;
    bytes_signature::sign_with(Domain::Message, &payload, signer).await
}

/// Check whether `public_key` signed `message`, whatever its field order.
pub fn is_valid_message<T: Serialize + ?Sized>(
    message: &T,
    signature: &str,
    public_key: &str,
) -> Result<bool> {
    bytes_signature::is_valid(
        Domain::Message,
        &to_canonical_bytes(message)?,
        signature,
        public_key,
    )
}

pub fn recover_message_public_key<T: Serialize + ?Sized>(
    message: &T,
    signature: &str,
    compressed: bool,
) -> Result<String> {
    bytes_signature::recover(
        Domain::Message,
        &to_canonical_bytes(message)?,
        signature,
        compressed,
    )
}

pub fn sign_transaction<T: Serialize + ?Sized>(
    message: &T,
    chain_id: &str,
    wallet: &LocalWallet,
) -> Result<String> {
    bytes_signature::sign(
        Domain::Transaction { chain_id },
        &to_canonical_bytes(message)?,
        wallet,
    )
}

pub async fn sign_transaction_with<T, S>(message: &T, chain_id: &str, signer: &S) -> Result<String>
where
    T: Serialize + ?Sized,
    S: Signer,
{
    let payload = to_canonical_bytes(message)?;
    bytes_signature::sign_with(Domain::Transaction { chain_id }, &payload, signer).await
}

pub fn is_valid_transaction<T: Serialize + ?Sized>(
    message: &T,
    chain_id: &str,
    signature: &str,
    public_key: &str,
) -> Result<bool> {
    bytes_signature::is_valid(
        Domain::Transaction { chain_id },
        &to_canonical_bytes(message)?,
        signature,
        public_key,
    )
}

pub fn recover_transaction_public_key<T: Serialize + ?Sized>(
    message: &T,
    chain_id: &str,
    signature: &str,
    compressed: bool,
) -> Result<String> {
    bytes_signature::recover(
        Domain::Transaction { chain_id },
        &to_canonical_bytes(message)?,
        signature,
        compressed,
    )
}
