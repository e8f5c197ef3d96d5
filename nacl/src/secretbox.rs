//! # SecretBox
//!
//! Shared-key authenticated encryption: XSalsa20-Poly1305 with a 32-byte key
//! and a 24-byte nonce. The ciphertext is `tag || encrypted message`, 16
//! bytes longer than the message.
//!
//! Nonce uniqueness per key is on you. The library never tracks nonces. With
//! 24 bytes, drawing them at random (see [`crate::util::random_bytes`]) is
//! safe.

use crate::error::Result;
use crate::padding;
use crate::primitives::Primitives;
use crate::random::RandomSource;
use crate::validation::check_secretbox_lengths;
use crate::Nacl;

impl<P: Primitives, R: RandomSource> Nacl<P, R> {
    /// Encrypt and authenticate `message` under `key` and `nonce`.
    ///
    /// # Errors
    ///
    /// [`InvalidLength`](crate::NaclError::InvalidLength) for a bad key or
    /// nonce, [`InternalFailure`](crate::NaclError::InternalFailure) if the
    /// primitive refuses.
    pub fn secretbox_seal(&self, message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let (key, nonce) = check_secretbox_lengths(key, nonce)?;
        padding::seal(&self.primitives, message, nonce, key)
    }

    /// Verify and decrypt a box produced by [`Nacl::secretbox_seal`].
    ///
    /// Wrong key, wrong nonce and tampered ciphertext are all reported as
    /// the same [`AuthenticationFailed`](crate::NaclError::AuthenticationFailed).
    /// Input shorter than the 16-byte tag is
    /// [`Malformed`](crate::NaclError::Malformed).
    pub fn secretbox_open(&self, ciphertext: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let (key, nonce) = check_secretbox_lengths(key, nonce)?;
        padding::open(&self.primitives, ciphertext, nonce, key)
    }
}

/// [`Nacl::secretbox_seal`] with the production backends.
pub fn seal(message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Nacl::new().secretbox_seal(message, nonce, key)
}

/// [`Nacl::secretbox_open`] with the production backends.
pub fn open(ciphertext: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Nacl::new().secretbox_open(ciphertext, nonce, key)
}
