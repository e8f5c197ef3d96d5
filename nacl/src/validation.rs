//! # Length Validation
//!
//! The single gate every public operation passes through. Each check takes
//! the caller's slices, verifies *every* fixed-length contract of the
//! operation, and hands back fixed-size array views that the primitive
//! layer accepts. A wrong length is reported as
//! [`NaclError::InvalidLength`] before any primitive runs.
//!
//! Checks never stop at the first bad field: one call reports all of them,
//! in argument order. Nothing is ever truncated or padded to fit.

use tracing::debug;

use crate::config::{
    BOX_NONCE_BYTES, BOX_PUBLIC_KEY_BYTES, BOX_SECRET_KEY_BYTES, SCALARMULT_BYTES,
    SCALARMULT_SCALAR_BYTES, SECRETBOX_KEY_BYTES, SECRETBOX_NONCE_BYTES, SIGN_BYTES,
    SIGN_PUBLIC_KEY_BYTES, SIGN_SECRET_KEY_BYTES, SIGN_SEED_BYTES,
};
use crate::error::{Field, LengthViolation, LengthViolations, NaclError, Result};

/// Accumulates violations across all fields of one operation.
#[derive(Default)]
struct Checker {
    violations: Vec<LengthViolation>,
}

impl Checker {
    fn fixed<'a, const N: usize>(&mut self, field: Field, bytes: &'a [u8]) -> Option<&'a [u8; N]> {
        match <&[u8; N]>::try_from(bytes) {
            Ok(array) => Some(array),
            Err(_) => {
                self.violations.push(LengthViolation {
                    field,
                    expected: N,
                    actual: bytes.len(),
                });
                None
            }
        }
    }

    fn reject(self) -> NaclError {
        let violations = LengthViolations::new(self.violations);
        debug!(%violations, "rejecting arguments with invalid length");
        NaclError::InvalidLength(violations)
    }
}

/// Secretbox key and nonce.
pub fn check_secretbox_lengths<'a>(
    key: &'a [u8],
    nonce: &'a [u8],
) -> Result<(&'a [u8; SECRETBOX_KEY_BYTES], &'a [u8; SECRETBOX_NONCE_BYTES])> {
    let mut checker = Checker::default();
    let key = checker.fixed(Field::Key, key);
    let nonce = checker.fixed(Field::Nonce, nonce);
    match (key, nonce) {
        (Some(key), Some(nonce)) => Ok((key, nonce)),
        _ => Err(checker.reject()),
    }
}

/// Box public and secret key.
pub fn check_box_key_lengths<'a>(
    public_key: &'a [u8],
    secret_key: &'a [u8],
) -> Result<(&'a [u8; BOX_PUBLIC_KEY_BYTES], &'a [u8; BOX_SECRET_KEY_BYTES])> {
    let mut checker = Checker::default();
    let public_key = checker.fixed(Field::PublicKey, public_key);
    let secret_key = checker.fixed(Field::SecretKey, secret_key);
    match (public_key, secret_key) {
        (Some(pk), Some(sk)) => Ok((pk, sk)),
        _ => Err(checker.reject()),
    }
}

/// Everything `box`/`box_open` needs: nonce plus both keys, checked together
/// so a bad nonce is caught before the key agreement runs.
#[allow(clippy::type_complexity)]
pub fn check_box_lengths<'a>(
    nonce: &'a [u8],
    public_key: &'a [u8],
    secret_key: &'a [u8],
) -> Result<(
    &'a [u8; BOX_NONCE_BYTES],
    &'a [u8; BOX_PUBLIC_KEY_BYTES],
    &'a [u8; BOX_SECRET_KEY_BYTES],
)> {
    let mut checker = Checker::default();
    let nonce = checker.fixed(Field::Nonce, nonce);
    let public_key = checker.fixed(Field::PublicKey, public_key);
    let secret_key = checker.fixed(Field::SecretKey, secret_key);
    match (nonce, public_key, secret_key) {
        (Some(nonce), Some(pk), Some(sk)) => Ok((nonce, pk, sk)),
        _ => Err(checker.reject()),
    }
}

/// A lone box secret key (keypair re-derivation).
pub fn check_box_secret_key_length(secret_key: &[u8]) -> Result<&[u8; BOX_SECRET_KEY_BYTES]> {
    let mut checker = Checker::default();
    checker
        .fixed(Field::SecretKey, secret_key)
        .ok_or_else(|| checker.reject())
}

/// Scalar and point for `scalarmult`.
pub fn check_scalarmult_lengths<'a>(
    n: &'a [u8],
    p: &'a [u8],
) -> Result<(&'a [u8; SCALARMULT_SCALAR_BYTES], &'a [u8; SCALARMULT_BYTES])> {
    let mut checker = Checker::default();
    let n = checker.fixed(Field::Scalar, n);
    let p = checker.fixed(Field::Point, p);
    match (n, p) {
        (Some(n), Some(p)) => Ok((n, p)),
        _ => Err(checker.reject()),
    }
}

/// Scalar for `scalarmult_base`.
pub fn check_scalar_length(n: &[u8]) -> Result<&[u8; SCALARMULT_SCALAR_BYTES]> {
    let mut checker = Checker::default();
    checker.fixed(Field::Scalar, n).ok_or_else(|| checker.reject())
}

/// A 64-byte sign secret key.
pub fn check_sign_secret_key_length(secret_key: &[u8]) -> Result<&[u8; SIGN_SECRET_KEY_BYTES]> {
    let mut checker = Checker::default();
    checker
        .fixed(Field::SecretKey, secret_key)
        .ok_or_else(|| checker.reject())
}

/// A 32-byte sign public key.
pub fn check_sign_public_key_length(public_key: &[u8]) -> Result<&[u8; SIGN_PUBLIC_KEY_BYTES]> {
    let mut checker = Checker::default();
    checker
        .fixed(Field::PublicKey, public_key)
        .ok_or_else(|| checker.reject())
}

/// A 32-byte sign seed.
pub fn check_seed_length(seed: &[u8]) -> Result<&[u8; SIGN_SEED_BYTES]> {
    let mut checker = Checker::default();
    checker.fixed(Field::Seed, seed).ok_or_else(|| checker.reject())
}

/// Detached signature and the public key it is checked against.
pub fn check_detached_lengths<'a>(
    signature: &'a [u8],
    public_key: &'a [u8],
) -> Result<(&'a [u8; SIGN_BYTES], &'a [u8; SIGN_PUBLIC_KEY_BYTES])> {
    let mut checker = Checker::default();
    let signature = checker.fixed(Field::Signature, signature);
    let public_key = checker.fixed(Field::PublicKey, public_key);
    match (signature, public_key) {
        (Some(sig), Some(pk)) => Ok((sig, pk)),
        _ => Err(checker.reject()),
    }
}
