//! Nonce, timestamp and signature primitives of the ZC header scheme
//!
//! The server checks `X-Zc-User-Signature` against the other `X-Zc-*`
//! headers only. The request body never enters the digest.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use sha1::{Digest, Sha1};

/// Value sent in `X-Zc-Timeout` and prepended to the signature input
pub const REQUEST_TIMEOUT: &str = "300";

/// Length of the per-request nonce
pub const NONCE_LENGTH: usize = 16;

const NONCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a fresh nonce of uppercase ASCII letters and digits
pub fn generate_nonce() -> String {
    generate_nonce_with(&mut rand::rng())
}

/// Generate a nonce from the given random source
pub fn generate_nonce_with<R: Rng>(rng: &mut R) -> String {
    (0..NONCE_LENGTH)
        .map(|_| NONCE_ALPHABET[rng.random_range(0..NONCE_ALPHABET.len())] as char)
        .collect()
}

/// Current Unix time in whole seconds
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Compute the lowercase hex SHA-1 signature for a request
///
/// The digest input is `timeout + timestamp + nonce + token` with no
/// separators. An unauthenticated session signs with an empty token.
pub fn sign(timeout: &str, timestamp: &str, nonce: &str, token: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(timeout.as_bytes());
    hasher.update(timestamp.as_bytes());
    hasher.update(nonce.as_bytes());
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
