//! # Utilities
//!
//! Constant-time comparison and raw random bytes.
//!
//! ## `verify` convention
//!
//! `verify(x, y)` is `false` when either side is empty or the lengths differ.
//! It never errors. Equal-length inputs are compared 32 bytes at a time with
//! the constant-time block primitive (the last block zero-padded), and every
//! block is compared even after a mismatch, so the running time depends only
//! on the length.

use crate::config::VERIFY_BYTES;
use crate::error::Result;
use crate::primitives::Primitives;
use crate::random::RandomSource;
use crate::Nacl;

impl<P: Primitives, R: RandomSource> Nacl<P, R> {
    /// Constant-time equality of two byte strings.
    pub fn verify(&self, x: &[u8], y: &[u8]) -> bool {
        if x.is_empty() || y.is_empty() || x.len() != y.len() {
            return false;
        }

        let mut equal = true;
        for (a, b) in x.chunks(VERIFY_BYTES).zip(y.chunks(VERIFY_BYTES)) {
            let mut block_a = [0u8; VERIFY_BYTES];
            let mut block_b = [0u8; VERIFY_BYTES];
            block_a[..a.len()].copy_from_slice(a);
            block_b[..b.len()].copy_from_slice(b);
            // `&=` on bool: no early exit.
            equal &= self.primitives.verify32(&block_a, &block_b);
        }
        equal
    }

    /// `count` bytes from the secure random source.
    pub fn random_bytes(&self, count: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; count];
        self.fill_random(&mut bytes)?;
        Ok(bytes)
    }
}

/// [`Nacl::verify`] with the production backends.
pub fn verify(x: &[u8], y: &[u8]) -> bool {
    Nacl::new().verify(x, y)
}

/// [`Nacl::random_bytes`] with the production backends.
pub fn random_bytes(count: usize) -> Result<Vec<u8>> {
    Nacl::new().random_bytes(count)
}
