//! One-way password hashing.
//!
//! bcrypt with a fresh random salt per call. The salt is embedded in the
//! digest string and also stored alongside it in the `users` table, matching
//! the legacy column layout.

use bcrypt::{BcryptError, DEFAULT_COST, Version, hash_with_salt};

/// Output of [`hash`]: the digest and the salt that produced it, both
/// opaque strings for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub digest: String,
    pub salt: String,
}

/// Hash a plaintext password with a fresh random salt.
///
/// Two calls with the same plaintext yield different digests.
pub fn hash(plaintext: &str) -> Result<CredentialPair, BcryptError> {
    let salt: [u8; 16] = rand::random();
    let parts = hash_with_salt(plaintext, DEFAULT_COST, salt)?;
    Ok(CredentialPair {
        digest: parts.format_for_version(Version::TwoB),
        salt: parts.get_salt(),
    })
}

/// Check a plaintext password against a stored digest.
///
/// Returns `Ok(false)` for a wrong password; `Err` only for a malformed
/// stored digest, which is a data-integrity problem and never surfaces to
/// the caller as anything but an internal error.
pub fn verify(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, digest)
}
