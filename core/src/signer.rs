//! Request signature used by the Checkers service.
//!
//! The signature is `hex(sha256(path ++ decimal(body byte length) ++ secret))`
//! with no delimiters. `path` is the route below `/api`, the prefix is not
//! signed even though it is part of the request URL.
//!
//! The length is counted in UTF-8 bytes. A server that measures the body in
//! UTF-16 code units (JavaScript's `String.length`) disagrees on non-ASCII
//! bodies.
//!
//! This is not a keyed MAC: the body contributes only its length. The server
//! computes the same thing, so the scheme must be reproduced exactly.

use sha2::{Digest, Sha256};

/// Compute the `X-Request-Signature` value for `path` and `body`.
pub fn sign(path: &str, body: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    hasher.update(body.len().to_string().as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute the signature and compare it with `signature`.
pub fn verify(path: &str, body: &str, secret: &str, signature: &str) -> bool {
    sign(path, body, secret) == signature
}
