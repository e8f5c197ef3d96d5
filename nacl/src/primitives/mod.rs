//! # Primitive Provider
//!
//! The trusted, fixed-length cryptographic operations everything else is
//! built on. This is the one seam between "buffer discipline" (our job)
//! and "the actual math" (not our job).
//!
//! Every key, nonce and signature parameter is a fixed-size array. The
//! validation layer is the only place that turns caller slices into those
//! arrays, so a buffer of the wrong length cannot reach an implementation
//! of this trait.
//!
//! The secretbox operations keep the NaCl buffer convention on purpose:
//!
//! - `secretbox_seal` takes `ZERO_BYTES` of zeros followed by the message
//!   and returns a buffer of the same length that starts with
//!   `BOX_ZERO_BYTES` of zeros, then the tag, then the ciphertext.
//! - `secretbox_open` takes `BOX_ZERO_BYTES` of zeros followed by tag and
//!   ciphertext and returns `ZERO_BYTES` of zeros followed by the message.
//!
//! The [`padding`](crate::padding) module is the only caller that builds
//! these buffers.

mod dalek;

#[cfg(test)]
pub(crate) mod counting;

pub use dalek::DalekPrimitives;

use thiserror::Error;

use crate::config::{
    BOX_BEFORENM_BYTES, BOX_PUBLIC_KEY_BYTES, BOX_SECRET_KEY_BYTES, HASH_BYTES, SCALARMULT_BYTES,
    SCALARMULT_SCALAR_BYTES, SECRETBOX_KEY_BYTES, SECRETBOX_NONCE_BYTES, SIGN_PUBLIC_KEY_BYTES,
    SIGN_SECRET_KEY_BYTES, SIGN_SEED_BYTES, VERIFY_BYTES,
};

/// A primitive refused or failed an operation.
///
/// The moral equivalent of a nonzero C return code: no detail, on purpose.
/// Callers decide what the failure *means* (authentication failure,
/// verification failure, internal error) based on which operation they ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("primitive operation failed")]
pub struct PrimitiveFailure;

/// The trusted primitive set.
///
/// Implementations must be thread-safe; the library holds no locks and
/// calls these concurrently from any thread.
pub trait Primitives: Send + Sync {
    /// SHA-512 of `message`.
    fn hash512(&self, message: &[u8]) -> [u8; HASH_BYTES];

    /// Constant-time equality of two 32-byte blocks.
    fn verify32(&self, x: &[u8; VERIFY_BYTES], y: &[u8; VERIFY_BYTES]) -> bool;

    /// Curve25519 scalar multiplication `n * p`.
    fn scalarmult(
        &self,
        n: &[u8; SCALARMULT_SCALAR_BYTES],
        p: &[u8; SCALARMULT_BYTES],
    ) -> Result<[u8; SCALARMULT_BYTES], PrimitiveFailure>;

    /// Curve25519 scalar multiplication of the base point.
    fn scalarmult_base(&self, n: &[u8; SCALARMULT_SCALAR_BYTES]) -> [u8; SCALARMULT_BYTES];

    /// Precomputed box key: X25519 shared secret run through HSalsa20.
    fn box_beforenm(
        &self,
        public_key: &[u8; BOX_PUBLIC_KEY_BYTES],
        secret_key: &[u8; BOX_SECRET_KEY_BYTES],
    ) -> Result<[u8; BOX_BEFORENM_BYTES], PrimitiveFailure>;

    /// XSalsa20-Poly1305 seal over a zero-padded message buffer.
    fn secretbox_seal(
        &self,
        padded_message: &[u8],
        nonce: &[u8; SECRETBOX_NONCE_BYTES],
        key: &[u8; SECRETBOX_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure>;

    /// XSalsa20-Poly1305 open over a zero-padded ciphertext buffer.
    fn secretbox_open(
        &self,
        padded_ciphertext: &[u8],
        nonce: &[u8; SECRETBOX_NONCE_BYTES],
        key: &[u8; SECRETBOX_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure>;

    /// Ed25519 keypair from a seed. Returns `(public_key, seed || public_key)`.
    fn sign_keypair(
        &self,
        seed: &[u8; SIGN_SEED_BYTES],
    ) -> ([u8; SIGN_PUBLIC_KEY_BYTES], [u8; SIGN_SECRET_KEY_BYTES]);

    /// Ed25519 combined signing: `signature || message`.
    fn sign(
        &self,
        message: &[u8],
        secret_key: &[u8; SIGN_SECRET_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure>;

    /// Ed25519 combined verification. Returns the message on success.
    fn sign_open(
        &self,
        signed_message: &[u8],
        public_key: &[u8; SIGN_PUBLIC_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure>;
}
