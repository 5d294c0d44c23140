//! Opaque session-token generation and hashing.
//!
//! Session tokens are opaque random strings; only their SHA-256 hash is
//! stored server-side so a database leak does not compromise active
//! sessions. The external auth callback issues tokens with
//! [`generate_session_token`]; the auth extractor re-hashes the presented
//! bearer token with [`hash_session_token`] to find the session row.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a new opaque session token.
///
/// Returns `(plaintext, hash)`: hand the plaintext to the client, store
/// only the hash.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hash of a session token, hex-encoded.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = hasher.finalize();
    hex_encode(&digest)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
