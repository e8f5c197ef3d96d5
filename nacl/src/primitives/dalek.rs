//! Production primitive set, built on audited pure-Rust implementations:
//!
//! - `ed25519-dalek` for signatures
//! - `x25519-dalek` for scalar multiplication
//! - `sha2` for SHA-512
//! - `crypto_secretbox` + `salsa20` for XSalsa20-Poly1305 and HSalsa20
//! - `subtle` for constant-time comparison
//!
//! Nothing in here is clever. The only logic is adapting each crate's API
//! to the NaCl buffer shapes described on [`Primitives`].

use crypto_secretbox::aead::{AeadInPlace, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use salsa20::cipher::consts::U10;
use salsa20::cipher::generic_array::GenericArray;
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;
use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};
use zeroize::{Zeroize, Zeroizing};

use super::{PrimitiveFailure, Primitives};
use crate::config::{
    BOX_BEFORENM_BYTES, BOX_PUBLIC_KEY_BYTES, BOX_SECRET_KEY_BYTES, HASH_BYTES, SCALARMULT_BYTES,
    SCALARMULT_SCALAR_BYTES, SECRETBOX_BOX_ZERO_BYTES, SECRETBOX_KEY_BYTES, SECRETBOX_NONCE_BYTES,
    SECRETBOX_ZERO_BYTES, SIGN_BYTES, SIGN_PUBLIC_KEY_BYTES, SIGN_SECRET_KEY_BYTES,
    SIGN_SEED_BYTES, VERIFY_BYTES,
};

/// The default [`Primitives`] binding. Stateless and free to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DalekPrimitives;

impl Primitives for DalekPrimitives {
    fn hash512(&self, message: &[u8]) -> [u8; HASH_BYTES] {
        let digest = Sha512::digest(message);
        let mut output = [0u8; HASH_BYTES];
        output.copy_from_slice(&digest);
        output
    }

    fn verify32(&self, x: &[u8; VERIFY_BYTES], y: &[u8; VERIFY_BYTES]) -> bool {
        x[..].ct_eq(&y[..]).into()
    }

    fn scalarmult(
        &self,
        n: &[u8; SCALARMULT_SCALAR_BYTES],
        p: &[u8; SCALARMULT_BYTES],
    ) -> Result<[u8; SCALARMULT_BYTES], PrimitiveFailure> {
        // Clamps n and ignores the top bit of p, same as every NaCl.
        Ok(x25519(*n, *p))
    }

    fn scalarmult_base(&self, n: &[u8; SCALARMULT_SCALAR_BYTES]) -> [u8; SCALARMULT_BYTES] {
        x25519(*n, X25519_BASEPOINT_BYTES)
    }

    fn box_beforenm(
        &self,
        public_key: &[u8; BOX_PUBLIC_KEY_BYTES],
        secret_key: &[u8; BOX_SECRET_KEY_BYTES],
    ) -> Result<[u8; BOX_BEFORENM_BYTES], PrimitiveFailure> {
        let shared = Zeroizing::new(self.scalarmult(secret_key, public_key)?);

        // HSalsa20 with a zero input block, exactly as crypto_box_beforenm.
        let mut derived = salsa20::hsalsa::<U10>(
            GenericArray::from_slice(&shared[..]),
            &GenericArray::default(),
        );
        let mut key = [0u8; BOX_BEFORENM_BYTES];
        key.copy_from_slice(&derived);
        derived.as_mut_slice().zeroize();
        Ok(key)
    }

    fn secretbox_seal(
        &self,
        padded_message: &[u8],
        nonce: &[u8; SECRETBOX_NONCE_BYTES],
        key: &[u8; SECRETBOX_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        if padded_message.len() < SECRETBOX_ZERO_BYTES {
            return Err(PrimitiveFailure);
        }

        let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(&key[..]));

        // Encrypt in place inside the output buffer so no second copy of the
        // plaintext ever exists.
        let mut sealed = vec![0u8; padded_message.len()];
        sealed[SECRETBOX_ZERO_BYTES..].copy_from_slice(&padded_message[SECRETBOX_ZERO_BYTES..]);
        let tag = cipher
            .encrypt_in_place_detached(
                GenericArray::from_slice(&nonce[..]),
                b"",
                &mut sealed[SECRETBOX_ZERO_BYTES..],
            )
            .map_err(|_| PrimitiveFailure)?;
        sealed[SECRETBOX_BOX_ZERO_BYTES..SECRETBOX_ZERO_BYTES].copy_from_slice(&tag);

        Ok(sealed)
    }

    fn secretbox_open(
        &self,
        padded_ciphertext: &[u8],
        nonce: &[u8; SECRETBOX_NONCE_BYTES],
        key: &[u8; SECRETBOX_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        if padded_ciphertext.len() < SECRETBOX_ZERO_BYTES {
            return Err(PrimitiveFailure);
        }

        let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(&key[..]));
        let tag = GenericArray::from_slice(
            &padded_ciphertext[SECRETBOX_BOX_ZERO_BYTES..SECRETBOX_ZERO_BYTES],
        );

        let mut opened = vec![0u8; padded_ciphertext.len()];
        opened[SECRETBOX_ZERO_BYTES..]
            .copy_from_slice(&padded_ciphertext[SECRETBOX_ZERO_BYTES..]);
        cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(&nonce[..]),
                b"",
                &mut opened[SECRETBOX_ZERO_BYTES..],
                tag,
            )
            .map_err(|_| PrimitiveFailure)?;

        Ok(opened)
    }

    fn sign_keypair(
        &self,
        seed: &[u8; SIGN_SEED_BYTES],
    ) -> ([u8; SIGN_PUBLIC_KEY_BYTES], [u8; SIGN_SECRET_KEY_BYTES]) {
        let signing_key = SigningKey::from_bytes(seed);
        (
            signing_key.verifying_key().to_bytes(),
            signing_key.to_keypair_bytes(),
        )
    }

    fn sign(
        &self,
        message: &[u8],
        secret_key: &[u8; SIGN_SECRET_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        // Rejects a secret key whose embedded public half doesn't match its
        // seed. TweetNaCl would sign anyway and produce garbage.
        let signing_key =
            SigningKey::from_keypair_bytes(secret_key).map_err(|_| PrimitiveFailure)?;
        let signature = signing_key.sign(message);

        let mut signed = Vec::with_capacity(SIGN_BYTES + message.len());
        signed.extend_from_slice(&signature.to_bytes());
        signed.extend_from_slice(message);
        Ok(signed)
    }

    fn sign_open(
        &self,
        signed_message: &[u8],
        public_key: &[u8; SIGN_PUBLIC_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        if signed_message.len() < SIGN_BYTES {
            return Err(PrimitiveFailure);
        }
        let (signature_bytes, message) = signed_message.split_at(SIGN_BYTES);
        let signature_bytes: &[u8; SIGN_BYTES] =
            signature_bytes.try_into().map_err(|_| PrimitiveFailure)?;

        let verifying_key = VerifyingKey::from_bytes(public_key).map_err(|_| PrimitiveFailure)?;
        let signature = Signature::from_bytes(signature_bytes);
        verifying_key
            .verify(message, &signature)
            .map_err(|_| PrimitiveFailure)?;

        Ok(message.to_vec())
    }
}
