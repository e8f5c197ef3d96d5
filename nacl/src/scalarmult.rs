//! # Scalar Multiplication
//!
//! Raw X25519: `n * p` and `n * base`. No hashing of the result. If you want
//! a key for encryption, use [`Nacl::box_before`] instead of feeding this
//! output straight into a cipher.

use crate::config::SCALARMULT_BYTES;
use crate::error::{NaclError, Result};
use crate::primitives::Primitives;
use crate::random::RandomSource;
use crate::validation::{check_scalar_length, check_scalarmult_lengths};
use crate::Nacl;

impl<P: Primitives, R: RandomSource> Nacl<P, R> {
    /// Multiply the point `p` by the scalar `n`.
    pub fn scalarmult(&self, n: &[u8], p: &[u8]) -> Result<[u8; SCALARMULT_BYTES]> {
        let (n, p) = check_scalarmult_lengths(n, p)?;
        self.primitives
            .scalarmult(n, p)
            .map_err(|_| NaclError::InternalFailure("scalarmult"))
    }

    /// Multiply the Curve25519 base point by the scalar `n`.
    pub fn scalarmult_base(&self, n: &[u8]) -> Result<[u8; SCALARMULT_BYTES]> {
        let n = check_scalar_length(n)?;
        Ok(self.primitives.scalarmult_base(n))
    }
}

/// [`Nacl::scalarmult`] with the production backends.
pub fn mult(n: &[u8], p: &[u8]) -> Result<[u8; SCALARMULT_BYTES]> {
    Nacl::new().scalarmult(n, p)
}

/// [`Nacl::scalarmult_base`] with the production backends.
pub fn base(n: &[u8]) -> Result<[u8; SCALARMULT_BYTES]> {
    Nacl::new().scalarmult_base(n)
}
