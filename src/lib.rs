//! Deterministic JSON and byte payload signing.
//!
//! JSON payloads are normalized (sorted keys, compact, fixed number
//! formatting) so that clients in different languages sign the same bytes.
//! Signatures are recoverable secp256k1 signatures over a keccak256 digest,
//! compatible with the JavaScript and Go clients.
//!
//! ```no_run
//! use jsonsig::{json_signature, keys};
//! use serde_json::json;
//!
//! let wallet = keys::load_wallet("8d7d56a9efa4158d232edbeaae601021eb3477ad77b5f3c720601fd74e8e04bb")?;
//! let body = json!({"method": "getVisibility", "timestamp": 1582196988554u64});
//!
//! let signature = json_signature::sign_message(&body, &wallet)?;
//! let valid = json_signature::is_valid_message(&body, &signature, &keys::public_key(&wallet, true))?;
//! assert!(valid);
//! # Ok::<(), jsonsig::Error>(())
//! ```

pub mod bytes_signature;
pub mod canonical;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod json_signature;
pub mod keys;
pub mod signature;

pub use error::{Error, Result};
pub use signature::RecoverableSignature;
