//! Signing of raw byte payloads
//!
//! Messages and transactions use different digests, so a signature made for
//! one never validates as the other. Transactions are also bound to a chain id.

use crate::digest::Domain;
use crate::signature::{is_valid_raw, recover_public_key_raw, sign_raw, sign_raw_with};
use crate::Result;
use ethers::signers::{LocalWallet, Signer};

/// Sign `payload` as a message. Returns a `0x`-prefixed 65-byte signature.
pub fn sign_message(payload: &[u8], wallet: &LocalWallet) -> Result<String> {
    sign(Domain::Message, payload, wallet)
}

/// Sign `payload` as a message with an external signer.
pub async fn sign_message_with<S: Signer>(payload: &[u8], signer: &S) -> Result<String> {
    sign_with(Domain::Message, payload, signer).await
}

/// Check whether `public_key` (compressed or uncompressed) signed the message.
pub fn is_valid_message(payload: &[u8], signature: &str, public_key: &str) -> Result<bool> {
    is_valid(Domain::Message, payload, signature, public_key)
}

/// Recover the public key that signed the message.
pub fn recover_message_public_key(payload: &[u8], signature: &str, compressed: bool) -> Result<String> {
    recover(Domain::Message, payload, signature, compressed)
}

pub fn sign_transaction(payload: &[u8], chain_id: &str, wallet: &LocalWallet) -> Result<String> {
    sign(Domain::Transaction { chain_id }, payload, wallet)
}

pub async fn sign_transaction_with<S: Signer>(
    payload: &[u8],
    chain_id: &str,
    signer: &S,
) -> Result<String> {
    sign_with(Domain::Transaction { chain_id }, payload, signer).await
}

pub fn is_valid_transaction(
    payload: &[u8],
    chain_id: &str,
    signature: &str,
    public_key: &str,
) -> Result<bool> {
    is_valid(Domain::Transaction { chain_id }, payload, signature, public_key)
}

pub fn recover_transaction_public_key(
    payload: &[u8],
    chain_id: &str,
    signature: &str,
    compressed: bool,
) -> Result<String> {
    recover(Domain::Transaction { chain_id }, payload, signature, compressed)
}

/// Sign `payload` in the given domain.
pub fn sign(domain: Domain<'_>, payload: &[u8], wallet: &LocalWallet) -> Result<String> {
    let signature = sign_raw(&domain.digest(payload), wallet)?;
    Ok(signature.to_string())
}

pub async fn sign_with<S: Signer>(domain: Domain<'_>, payload: &[u8], signer: &S) -> Result<String> {
    let signature = sign_raw_with(&domain.digest(payload), signer).await?;
    Ok(signature.to_string())
}

pub fn is_valid(domain: Domain<'_>, payload: &[u8], signature: &str, public_key: &str) -> Result<bool> {
    is_valid_raw(&domain.digest(payload), signature, public_key)
}

pub fn recover(domain: Domain<'_>, payload: &[u8], signature: &str, compressed: bool) -> Result<String> {
    recover_public_key_raw(&domain.digest(payload), signature, compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{load_wallet, public_key};
    use crate::Error;

    const DUMMY_WALLET_SK: &str = "8d7d56a9efa4158d232edbeaae601021eb3477ad77b5f3c720601fd74e8e04bb";

    #[test]
    fn test_utf8_payloads_round_trip() {
        let wallet = load_wallet(DUMMY_WALLET_SK).unwrap();
        let compressed = public_key(&wallet, true);
        let expanded = public_key(&wallet, false);

        let bodies = [
            r#"{ "a": "àèìòù", "b": "áéíóú" }"#,
            r#"{ "b": "test&", "a": "&test" }"#,
            r#"{ "b": "😃🌟🌹⚖️🚀", "a": "&test" }"#,
        ];

        for body in bodies {
            let signature = sign_message(body.as_bytes(), &wallet).unwrap();
            assert!(is_valid_message(body.as_bytes(), &signature, &compressed).unwrap());
            assert!(is_valid_message(body.as_bytes(), &signature, &expanded).unwrap());
        }
    }

    #[test]
    fn test_byte_payloads_are_not_normalized() {
        let wallet = load_wallet(DUMMY_WALLET_SK).unwrap();
        let body1 = br#"{ "method": "getVisibility", "timestamp": 1582196988554 }"#;
        let body2 = br#"{ "timestamp": 1582196988554, "method": "getVisibility" }"#;

        let signature1 = sign_message(body1, &wallet).unwrap();
        let signature2 = sign_message(body2, &wallet).unwrap();
        assert_ne!(signature1, signature2);

        let key = public_key(&wallet, true);
        assert!(is_valid_message(body1, &signature1, &key).unwrap());
        assert!(is_valid_message(body2, &signature2, &key).unwrap());
        assert!(!is_valid_message(body2, &signature1, &key).unwrap());
    }

    #[test]
    fn test_wrong_key_is_not_an_error() {
        let wallet = load_wallet(DUMMY_WALLET_SK).unwrap();
        let signature = sign_message(b"hello", &wallet).unwrap();
        let other = public_key(
            &load_wallet("a5ff5f333f74dbc44056a7944241675761093c4db01bcbfed7e978bd1b489a16").unwrap(),
            true,
        );
        assert!(!is_valid_message(b"hello", &signature, &other).unwrap());
    }

    #[test]
    fn test_transaction_signature() {
        let wallet = load_wallet(DUMMY_WALLET_SK).unwrap();
        let signature = sign_transaction(b"hello", "1", &wallet).unwrap();
        assert_eq!(
            signature,
            "0x9c78169b395cbb69e02b90f21fc62cdfbcc3a66a1a02048e7478389f24678fd27586c1af7a3cd665ac4d5fa643dfac7f07963d469a5b783164925e4d869dc8b01b"
        );

        let key = public_key(&wallet, true);
        assert!(is_valid_transaction(b"hello", "1", &signature, &key).unwrap());
        assert!(!is_valid_transaction(b"hello", "5", &signature, &key).unwrap());
        assert!(!is_valid_message(b"hello", &signature, &key).unwrap());
        assert_eq!(
            recover_transaction_public_key(b"hello", "1", &signature, true).unwrap(),
            key
        );
    }

    #[test]
    fn test_message_signature_is_not_a_transaction() {
        let wallet = load_wallet(DUMMY_WALLET_SK).unwrap();
        let signature = sign_message(b"hello", &wallet).unwrap();
        let key = public_key(&wallet, false);
        assert!(!is_valid_transaction(b"hello", "1", &signature, &key).unwrap());
    }

    #[test]
    fn test_malformed_signature_is_an_error() {
        let key = public_key(&load_wallet(DUMMY_WALLET_SK).unwrap(), true);
        let garbage = hex::encode([1u8, 2, 3, 4, 5, 6]);
        assert!(matches!(
            is_valid_message(b"hello", &garbage, &key),
            Err(Error::Decoding(_))
        ));
        assert!(matches!(
            recover_message_public_key(b"hello", &garbage, true),
            Err(Error::Decoding(_))
        ));
    }

    #[tokio::test]
    async fn test_signer_variants_match() {
        let wallet = load_wallet(DUMMY_WALLET_SK).unwrap();
        assert_eq!(
            sign_message_with(b"hello", &wallet).await.unwrap(),
            sign_message(b"hello", &wallet).unwrap()
        );
        assert_eq!(
            sign_transaction_with(b"hello", "arigato", &wallet).await.unwrap(),
            sign_transaction(b"hello", "arigato", &wallet).unwrap()
        );
    }
}
