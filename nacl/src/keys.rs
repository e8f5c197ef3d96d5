//! # Key Pairs
//!
//! Owned key pairs returned by the `keypair*` operations. The secret half of
//! each pair lives in a [`Zeroizing`] array, so dropping the pair wipes it.
//!
//! ## Sign key packing
//!
//! A 64-byte Ed25519 secret key is `seed || public_key`. Every operation in
//! this crate agrees on that: `sign::keypair`, `sign::keypair_from_seed` and
//! `sign::keypair_from_secret_key` all put the public key at bytes `32..64`,
//! and `sign::sign` refuses a secret key whose embedded public key doesn't
//! match its seed.
//!
//! Neither type implements `Serialize`. Writing secret keys to disk is the
//! caller's decision, and it should be a deliberate one.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::config::{
    BOX_PUBLIC_KEY_BYTES, BOX_SECRET_KEY_BYTES, SIGN_PUBLIC_KEY_BYTES, SIGN_SECRET_KEY_BYTES,
    SIGN_SEED_BYTES,
};

// ---------------------------------------------------------------------------
// BoxKeyPair
// ---------------------------------------------------------------------------

/// A Curve25519 key pair for `box`.
#[derive(Clone)]
pub struct BoxKeyPair {
    /// `scalarmult_base(secret_key)`.
    pub public_key: [u8; BOX_PUBLIC_KEY_BYTES],
    /// The secret scalar.
    pub secret_key: Zeroizing<[u8; BOX_SECRET_KEY_BYTES]>,
}

impl BoxKeyPair {
    pub(crate) fn new(
        public_key: [u8; BOX_PUBLIC_KEY_BYTES],
        secret_key: Zeroizing<[u8; BOX_SECRET_KEY_BYTES]>,
    ) -> Self {
        Self {
            public_key,
            secret_key,
        }
    }

    /// Hex-encoded public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }
}

impl fmt::Debug for BoxKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public half only. Secret bytes don't go into logs, not even a prefix.
        write!(f, "BoxKeyPair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for BoxKeyPair {
    fn eq(&self, other: &Self) -> bool {
        let public = self.public_key[..].ct_eq(&other.public_key[..]);
        let secret = self.secret_key[..].ct_eq(&other.secret_key[..]);
        (public & secret).into()
    }
}

impl Eq for BoxKeyPair {}

// ---------------------------------------------------------------------------
// SignKeyPair
// ---------------------------------------------------------------------------

/// An Ed25519 key pair for `sign`.
#[derive(Clone)]
pub struct SignKeyPair {
    /// The verifying key.
    pub public_key: [u8; SIGN_PUBLIC_KEY_BYTES],
    /// `seed || public_key`.
    pub secret_key: Zeroizing<[u8; SIGN_SECRET_KEY_BYTES]>,
}

impl SignKeyPair {
    pub(crate) fn new(
        public_key: [u8; SIGN_PUBLIC_KEY_BYTES],
        secret_key: Zeroizing<[u8; SIGN_SECRET_KEY_BYTES]>,
    ) -> Self {
        Self {
            public_key,
            secret_key,
        }
    }

    /// The 32-byte seed this pair was derived from (first half of the secret key).
    pub fn seed(&self) -> Zeroizing<[u8; SIGN_SEED_BYTES]> {
        let mut seed = Zeroizing::new([0u8; SIGN_SEED_BYTES]);
        seed.copy_from_slice(&self.secret_key[..SIGN_SEED_BYTES]);
        seed
    }

    /// Hex-encoded public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }
}

impl fmt::Debug for SignKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignKeyPair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for SignKeyPair {
    fn eq(&self, other: &Self) -> bool {
        let public = self.public_key[..].ct_eq(&other.public_key[..]);
        let secret = self.secret_key[..].ct_eq(&other.secret_key[..]);
        (public & secret).into()
    }
}

impl Eq for SignKeyPair {}
