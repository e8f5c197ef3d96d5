//! # Box
//!
//! Public-key authenticated encryption: X25519 key agreement, HSalsa20 key
//! derivation, then a secretbox under the derived key. Alice seals with
//! `(bob.public_key, alice.secret_key)` and Bob opens with
//! `(alice.public_key, bob.secret_key)`. Both sides derive the same key.
//!
//! Every `box_seal`/`box_open` call redoes the key agreement. When sending
//! many messages to one peer, call [`Nacl::box_before`] once and use the
//! result as a secretbox key. Nothing is cached for you.
//!
//! Named `public_box` because `box` is a reserved word.

use tracing::debug;
use zeroize::Zeroizing;

use crate::config::{BOX_BEFORENM_BYTES, BOX_PUBLIC_KEY_BYTES, BOX_SECRET_KEY_BYTES};
use crate::error::{NaclError, Result};
use crate::keys::BoxKeyPair;
use crate::padding;
use crate::primitives::Primitives;
use crate::random::RandomSource;
use crate::validation::{check_box_key_lengths, check_box_lengths, check_box_secret_key_length};
use crate::Nacl;

impl<P: Primitives, R: RandomSource> Nacl<P, R> {
    /// Precompute the shared key for `(public_key, secret_key)`.
    ///
    /// The result is a valid secretbox key: `box_seal(m, n, pk, sk)` equals
    /// `secretbox_seal(m, n, box_before(pk, sk))`.
    pub fn box_before(
        &self,
        public_key: &[u8],
        secret_key: &[u8],
    ) -> Result<Zeroizing<[u8; BOX_BEFORENM_BYTES]>> {
        let (public_key, secret_key) = check_box_key_lengths(public_key, secret_key)?;
        self.shared_key(public_key, secret_key)
    }

    /// Encrypt and authenticate `message` from the holder of `secret_key`
    /// to the holder of `public_key`.
    pub fn box_seal(
        &self,
        message: &[u8],
        nonce: &[u8],
        public_key: &[u8],
        secret_key: &[u8],
    ) -> Result<Vec<u8>> {
        let (nonce, public_key, secret_key) = check_box_lengths(nonce, public_key, secret_key)?;
        let key = self.shared_key(public_key, secret_key)?;
        padding::seal(&self.primitives, message, nonce, &key)
    }

    /// Verify and decrypt a box sent by the holder of `public_key` to the
    /// holder of `secret_key`.
    pub fn box_open(
        &self,
        ciphertext: &[u8],
        nonce: &[u8],
        public_key: &[u8],
        secret_key: &[u8],
    ) -> Result<Vec<u8>> {
        let (nonce, public_key, secret_key) = check_box_lengths(nonce, public_key, secret_key)?;
        let key = self.shared_key(public_key, secret_key)?;
        padding::open(&self.primitives, ciphertext, nonce, &key)
    }

    /// Fresh key pair: 32 random bytes as the secret scalar, public key by
    /// base-point multiplication.
    pub fn box_keypair(&self) -> Result<BoxKeyPair> {
        let mut secret_key = Zeroizing::new([0u8; BOX_SECRET_KEY_BYTES]);
        self.fill_random(&mut secret_key[..])?;
        Ok(self.box_pair_from(secret_key))
    }

    /// Re-derive the key pair for an existing secret key. Deterministic.
    pub fn box_keypair_from_secret_key(&self, secret_key: &[u8]) -> Result<BoxKeyPair> {
        let secret_key = check_box_secret_key_length(secret_key)?;
        Ok(self.box_pair_from(Zeroizing::new(*secret_key)))
    }

    fn box_pair_from(&self, secret_key: Zeroizing<[u8; BOX_SECRET_KEY_BYTES]>) -> BoxKeyPair {
        let public_key = self.primitives.scalarmult_base(&secret_key);
        BoxKeyPair::new(public_key, secret_key)
    }

    fn shared_key(
        &self,
        public_key: &[u8; BOX_PUBLIC_KEY_BYTES],
        secret_key: &[u8; BOX_SECRET_KEY_BYTES],
    ) -> Result<Zeroizing<[u8; BOX_BEFORENM_BYTES]>> {
        self.primitives
            .box_beforenm(public_key, secret_key)
            .map(Zeroizing::new)
            .map_err(|_| {
                debug!("box key agreement failed");
                NaclError::InternalFailure("box before")
            })
    }
}

/// [`Nacl::box_before`] with the production backends.
pub fn before(public_key: &[u8], secret_key: &[u8]) -> Result<Zeroizing<[u8; BOX_BEFORENM_BYTES]>> {
    Nacl::new().box_before(public_key, secret_key)
}

/// [`Nacl::box_seal`] with the production backends.
pub fn seal(message: &[u8], nonce: &[u8], public_key: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
    Nacl::new().box_seal(message, nonce, public_key, secret_key)
}

/// [`Nacl::box_open`] with the production backends.
pub fn open(
    ciphertext: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> Result<Vec<u8>> {
    Nacl::new().box_open(ciphertext, nonce, public_key, secret_key)
}

/// [`Nacl::box_keypair`] with the production backends.
pub fn keypair() -> Result<BoxKeyPair> {
    Nacl::new().box_keypair()
}

/// [`Nacl::box_keypair_from_secret_key`] with the production backends.
pub fn keypair_from_secret_key(secret_key: &[u8]) -> Result<BoxKeyPair> {
    Nacl::new().box_keypair_from_secret_key(secret_key)
}
