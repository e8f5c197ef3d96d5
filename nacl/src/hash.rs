//! # SHA-512
//!
//! Any input length, 64-byte output. Nothing to validate.

use crate::config::HASH_BYTES;
use crate::primitives::Primitives;
use crate::random::RandomSource;
use crate::Nacl;

impl<P: Primitives, R: RandomSource> Nacl<P, R> {
    /// SHA-512 of `message`.
    pub fn hash(&self, message: &[u8]) -> [u8; HASH_BYTES] {
        self.primitives.hash512(message)
    }
}

/// [`Nacl::hash`] with the production backends.
pub fn hash(message: &[u8]) -> [u8; HASH_BYTES] {
    Nacl::new().hash(message)
}
