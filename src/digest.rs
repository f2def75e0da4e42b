//! Payload digests
//!
//! A payload is never signed directly. It is hashed with keccak256, the hex
//! hash is wrapped into a short text that names what is being signed, and
//! that text is what gets signed as an EIP-191 personal message.

use ethers::types::H256;
use ethers::utils::{hash_message, keccak256};

pub const MESSAGE_PREFIX: &str = "Vocdoni signed message:\n";
pub const TRANSACTION_PREFIX: &str = "Vocdoni signed transaction:\n";

/// What a signature covers: a plain message, or a transaction bound to a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain<'a> {
    Message,
    Transaction { chain_id: &'a str },
}

impl Domain<'_> {
    /// Build the digest text for `payload` in this domain.
    pub fn digest(&self, payload: &[u8]) -> Vec<u8> {
        match self {
            Domain::Message => digest_message(payload),
            Domain::Transaction { chain_id } => digest_transaction(payload, chain_id),
        }
    }

    /// The 32-byte hash that is actually signed.
    pub fn signing_hash(&self, payload: &[u8]) -> H256 {
        eip191_hash(&self.digest(payload))
    }
}

/// Lowercase hex keccak256 of `payload`, without `0x`.
pub fn payload_hash(payload: &[u8]) -> String {
    hex::encode(keccak256(payload))
}

/// "Vocdoni signed message:\n" + hex(keccak256(payload))
pub fn digest_message(payload: &[u8]) -> Vec<u8> {
    format!("{MESSAGE_PREFIX}{}", payload_hash(payload)).into_bytes()
}

/// "Vocdoni signed transaction:\n" + chain_id + "\n" + hex(keccak256(payload))
pub fn digest_transaction(payload: &[u8], chain_id: &str) -> Vec<u8> {
    format!("{TRANSACTION_PREFIX}{chain_id}\n{}", payload_hash(payload)).into_bytes()
}

/// EIP-191 hash of a digest:
/// keccak256("\x19Ethereum Signed Message:\n" + len(digest) + digest)
pub fn eip191_hash(digest: &[u8]) -> H256 {
    hash_message(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMOJI: &str = "Emojis ✅🟧👻";

    #[test]
    fn test_message_digest_text() {
        let cases = [
            (
                "hello",
                "Vocdoni signed message:\n1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
            ),
            (
                "",
                "Vocdoni signed message:\nc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
            ),
            (
                "More text here",
                "Vocdoni signed message:\n85f4a8fca6cc7ed5ec4b9ec616aa7c2eecaf3460ecec19ff8c767fbf5f339c05",
            ),
            (
                EMOJI,
                "Vocdoni signed message:\n33eb9d50222bb252f1ff3637f9cfa2b25848c7191209f08cbe875dcdf8245ee8",
            ),
        ];

        for (payload, expected) in cases {
            let digest = digest_message(payload.as_bytes());
            assert_eq!(String::from_utf8(digest.clone()).unwrap(), expected);
            assert_eq!(hex::encode(&digest), hex::encode(expected.as_bytes()));
        }
    }

    #[test]
    fn test_message_digest_hex() {
        let digest = digest_message(b"hello");
        assert_eq!(
            hex::encode(digest),
            "566f63646f6e69207369676e6564206d6573736167653a0a31633861666639353036383563326564346263333137346633343732323837623536643935313762396339343831323733313961303961376133366465616338"
        );
    }

    #[test]
    fn test_transaction_digest_text() {
        let cases = [
            (
                "hello",
                "1",
                "Vocdoni signed transaction:\n1\n1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
            ),
            (
                "",
                "1",
                "Vocdoni signed transaction:\n1\nc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
            ),
            (
                "hello",
                "5",
                "Vocdoni signed transaction:\n5\n1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
            ),
            (
                "hello",
                "arigato",
                "Vocdoni signed transaction:\narigato\n1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
            ),
            (
                EMOJI,
                "1",
                "Vocdoni signed transaction:\n1\n33eb9d50222bb252f1ff3637f9cfa2b25848c7191209f08cbe875dcdf8245ee8",
            ),
        ];

        for (payload, chain_id, expected) in cases {
            let digest = digest_transaction(payload.as_bytes(), chain_id);
            assert_eq!(String::from_utf8(digest).unwrap(), expected);
        }
    }

    #[test]
    fn test_transaction_digest_hex() {
        let digest = digest_transaction(b"hello", "arigato");
        assert_eq!(
            hex::encode(digest),
            "566f63646f6e69207369676e6564207472616e73616374696f6e3a0a6172696761746f0a31633861666639353036383563326564346263333137346633343732323837623536643935313762396339343831323733313961303961376133366465616338"
        );
    }

    #[test]
    fn test_domains_differ() {
        let message = Domain::Message.signing_hash(b"hello");
        let tx1 = Domain::Transaction { chain_id: "1" }.signing_hash(b"hello");
        let tx5 = Domain::Transaction { chain_id: "5" }.signing_hash(b"hello");
        assert_ne!(message, tx1);
        assert_ne!(tx1, tx5);
        assert_eq!(message, eip191_hash(&digest_message(b"hello")));
    }
}
