//! Six-digit one-time codes.
//!
//! Used both for phone verification and for the completion OTP a customer
//! hands back to close a booking. Only the SHA-256 digest of a code is ever
//! stored; comparison happens on digests in constant time.

use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of a generated code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be generated
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be generated
pub const CODE_MAX: u32 = 999_999;

/// A freshly generated code, in clear text until it is sent
#[derive(Clone, PartialEq, Eq)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Uniform random code in [`CODE_MIN`, `CODE_MAX`]
    pub fn generate() -> Self {
        let value = rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX);
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest to persist in place of the code
    pub fn hash(&self) -> String {
        hash_code(&self.0)
    }
}

impl std::fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OneTimeCode(******)")
    }
}

/// SHA-256 hex digest of a supplied code, surrounding whitespace ignored
pub fn hash_code(code: &str) -> String {
    hex::encode(Sha256::digest(code.trim().as_bytes()))
}

/// Exact string match of `supplied` against a stored digest
pub fn code_matches(stored_hash: &str, supplied: &str) -> bool {
    bool::from(stored_hash.as_bytes().ct_eq(hash_code(supplied).as_bytes()))
}
