//! # Ed25519 Signatures
//!
//! Two shapes of the same operation:
//!
//! - **Combined**: `sign` returns `signature || message`, `open` checks it and
//!   hands back the message. This is the NaCl `crypto_sign` convention.
//! - **Detached**: `sign_detached` returns only the 64-byte signature,
//!   `verify_detached` answers yes or no.
//!
//! Secret keys are 64 bytes, `seed || public_key` (see [`crate::keys`]).
//!
//! Verification follows RFC 8032 as implemented by `ed25519-dalek`'s
//! standard `verify`, which accepts the same signatures other NaCl
//! implementations accept. Use a stricter check on top if your protocol
//! needs non-malleability.

use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::config::{SIGN_BYTES, SIGN_PUBLIC_KEY_BYTES, SIGN_SEED_BYTES};
use crate::error::{NaclError, Result};
use crate::keys::SignKeyPair;
use crate::primitives::Primitives;
use crate::random::RandomSource;
use crate::validation::{
    check_detached_lengths, check_seed_length, check_sign_public_key_length,
    check_sign_secret_key_length,
};
use crate::Nacl;

impl<P: Primitives, R: RandomSource> Nacl<P, R> {
    // -----------------------------------------------------------------------
    // Key pairs
    // -----------------------------------------------------------------------

    /// Fresh key pair from a 32-byte random seed.
    pub fn sign_keypair(&self) -> Result<SignKeyPair> {
        let mut seed = Zeroizing::new([0u8; SIGN_SEED_BYTES]);
        self.fill_random(&mut seed[..])?;
        Ok(self.sign_pair_from_seed(&seed))
    }

    /// Key pair derived from `seed`. Same seed, same key pair, every time.
    pub fn sign_keypair_from_seed(&self, seed: &[u8]) -> Result<SignKeyPair> {
        let seed = check_seed_length(seed)?;
        Ok(self.sign_pair_from_seed(seed))
    }

    /// Split a 64-byte secret key into its key pair. The public key is the
    /// copy embedded at bytes `32..64`; nothing is recomputed.
    pub fn sign_keypair_from_secret_key(&self, secret_key: &[u8]) -> Result<SignKeyPair> {
        let secret_key = check_sign_secret_key_length(secret_key)?;
        let mut public_key = [0u8; SIGN_PUBLIC_KEY_BYTES];
        public_key.copy_from_slice(&secret_key[SIGN_SEED_BYTES..]);
        Ok(SignKeyPair::new(public_key, Zeroizing::new(*secret_key)))
    }

    fn sign_pair_from_seed(&self, seed: &[u8; SIGN_SEED_BYTES]) -> SignKeyPair {
        let (public_key, mut secret_key) = self.primitives.sign_keypair(seed);
        let pair = SignKeyPair::new(public_key, Zeroizing::new(secret_key));
        secret_key.zeroize();
        pair
    }

    // -----------------------------------------------------------------------
    // Combined mode
    // -----------------------------------------------------------------------

    /// Sign `message`, returning `signature || message`.
    ///
    /// # Errors
    ///
    /// [`InvalidLength`](NaclError::InvalidLength) for a key that is not 64
    /// bytes. [`InternalFailure`](NaclError::InternalFailure) when the public
    /// key embedded at bytes `32..64` does not match the seed. Such a key is
    /// still accepted by [`Nacl::sign_keypair_from_secret_key`], which does
    /// not recompute the public key.
    pub fn sign(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        let secret_key = check_sign_secret_key_length(secret_key)?;
        let signed = self.primitives.sign(message, secret_key).map_err(|_| {
            debug!("signing primitive refused the secret key");
            NaclError::InternalFailure("sign")
        })?;
        if signed.len() != SIGN_BYTES + message.len() {
            return Err(NaclError::InternalFailure("sign"));
        }
        Ok(signed)
    }

    /// Check a combined signed message and return the message part.
    ///
    /// # Errors
    ///
    /// [`InvalidLength`](NaclError::InvalidLength) for a bad public key,
    /// [`Malformed`](NaclError::Malformed) for input shorter than a signature,
    /// [`VerificationFailed`](NaclError::VerificationFailed) otherwise.
    pub fn sign_open(&self, signed_message: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        let public_key = check_sign_public_key_length(public_key)?;
        if signed_message.len() < SIGN_BYTES {
            debug!(
                actual = signed_message.len(),
                minimum = SIGN_BYTES,
                "signed message shorter than a signature"
            );
            return Err(NaclError::Malformed {
                what: "signed message",
                minimum: SIGN_BYTES,
                actual: signed_message.len(),
            });
        }
        self.primitives
            .sign_open(signed_message, public_key)
            .map_err(|_| {
                debug!(signed_len = signed_message.len(), "signature verification failed");
                NaclError::VerificationFailed
            })
    }

    // -----------------------------------------------------------------------
    // Detached mode
    // -----------------------------------------------------------------------

    /// The 64-byte signature of `message`, without the message.
    pub fn sign_detached(&self, message: &[u8], secret_key: &[u8]) -> Result<[u8; SIGN_BYTES]> {
        let signed = self.sign(message, secret_key)?;
        let mut signature = [0u8; SIGN_BYTES];
        signature.copy_from_slice(&signed[..SIGN_BYTES]);
        Ok(signature)
    }

    /// Whether `signature` is a valid signature of `message` under
    /// `public_key`.
    ///
    /// Wrong-sized signature or key is an error, not `false`.
    pub fn sign_detached_verify(
        &self,
        message: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool> {
        let (signature, public_key) = check_detached_lengths(signature, public_key)?;

        let mut signed = Vec::with_capacity(SIGN_BYTES + message.len());
        signed.extend_from_slice(signature);
        signed.extend_from_slice(message);

        let valid = self.primitives.sign_open(&signed, public_key).is_ok();
        if !valid {
            debug!(message_len = message.len(), "detached signature rejected");
        }
        Ok(valid)
    }
}

/// [`Nacl::sign_keypair`] with the production backends.
pub fn keypair() -> Result<SignKeyPair> {
    Nacl::new().sign_keypair()
}

/// [`Nacl::sign_keypair_from_seed`] with the production backends.
pub fn keypair_from_seed(seed: &[u8]) -> Result<SignKeyPair> {
    Nacl::new().sign_keypair_from_seed(seed)
}

/// [`Nacl::sign_keypair_from_secret_key`] with the production backends.
pub fn keypair_from_secret_key(secret_key: &[u8]) -> Result<SignKeyPair> {
    Nacl::new().sign_keypair_from_secret_key(secret_key)
}

/// [`Nacl::sign`] with the production backends.
pub fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
    Nacl::new().sign(message, secret_key)
}

/// [`Nacl::sign_open`] with the production backends.
pub fn open(signed_message: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
    Nacl::new().sign_open(signed_message, public_key)
}

/// [`Nacl::sign_detached`] with the production backends.
pub fn sign_detached(message: &[u8], secret_key: &[u8]) -> Result<[u8; SIGN_BYTES]> {
    Nacl::new().sign_detached(message, secret_key)
}

/// [`Nacl::sign_detached_verify`] with the production backends.
pub fn verify_detached(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
    Nacl::new().sign_detached_verify(message, signature, public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::primitives::counting::{CountingPrimitives, Op};
    use crate::primitives::DalekPrimitives;
    use crate::random::testing::{FailingRandom, FixedRandom};
    use crate::random::OsRandom;

    #[test]
    fn test_sign_open_roundtrip() {
        let kp = keypair().unwrap();
        let signed = sign(b"transfer 100", &kp.secret_key[..]).unwrap();
        assert_eq!(signed.len(), 64 + 12);
        assert_eq!(&signed[64..], b"transfer 100");
        assert_eq!(open(&signed, &kp.public_key).unwrap(), b"transfer 100");
    }

    #[test]
    fn seed_determinism() {
        let seed = [0x5Eu8; 32];
        let a = keypair_from_seed(&seed).unwrap();
        let b = keypair_from_seed(&seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(*a.seed(), seed);
    }

    #[test]
    fn all_three_derivations_agree_on_packing() {
        let nacl = Nacl::with_backends(DalekPrimitives, FixedRandom(0x77));
        let random = nacl.sign_keypair().unwrap();
        let from_seed = nacl.sign_keypair_from_seed(&[0x77; 32]).unwrap();
        let from_sk = nacl
            .sign_keypair_from_secret_key(&from_seed.secret_key[..])
            .unwrap();
        assert_eq!(random, from_seed);
        assert_eq!(from_seed, from_sk);
        assert_eq!(&from_sk.secret_key[32..], &from_sk.public_key);
    }

    #[test]
    fn keypair_fails_without_entropy() {
        let nacl = Nacl::with_backends(DalekPrimitives, FailingRandom);
        assert!(matches!(
            nacl.sign_keypair(),
            Err(NaclError::RandomSourceUnavailable)
        ));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let kp1 = keypair().unwrap();
        let kp2 = keypair().unwrap();
        let signed = sign(b"message", &kp1.secret_key[..]).unwrap();
        assert!(matches!(
            open(&signed, &kp2.public_key),
            Err(NaclError::VerificationFailed)
        ));
    }

    #[test]
    fn short_signed_message_is_malformed() {
        let kp = keypair().unwrap();
        for len in [0usize, 1, 63] {
            assert!(matches!(
                open(&vec![0u8; len], &kp.public_key),
                Err(NaclError::Malformed { what: "signed message", minimum: 64, .. })
            ));
        }
        // Exactly a signature with an empty message is well-formed.
        assert!(matches!(
            open(&[0u8; 64], &kp.public_key),
            Err(NaclError::VerificationFailed)
        ));
    }

    #[test]
    fn detached_is_prefix_of_combined() {
        let kp = keypair().unwrap();
        let signed = sign(b"abc", &kp.secret_key[..]).unwrap();
        let detached = sign_detached(b"abc", &kp.secret_key[..]).unwrap();
        assert_eq!(&signed[..64], &detached[..]);
        assert!(verify_detached(b"abc", &detached, &kp.public_key).unwrap());
    }

    #[test]
    fn detached_bit_flips_are_rejected() {
        let kp = keypair_from_seed(&[3u8; 32]).unwrap();
        let message = b"flip me".to_vec();
        let signature = sign_detached(&message, &kp.secret_key[..]).unwrap();

        for bit in 0..(64 * 8) {
            let mut bad = signature;
            bad[bit / 8] ^= 1 << (bit % 8);
            assert!(!verify_detached(&message, &bad, &kp.public_key).unwrap());
        }
        for bit in 0..(message.len() * 8) {
            let mut bad = message.clone();
            bad[bit / 8] ^= 1 << (bit % 8);
            assert!(!verify_detached(&bad, &signature, &kp.public_key).unwrap());
        }
    }

    #[test]
    fn detached_lengths_are_errors_not_false() {
        let err = verify_detached(b"m", &[0u8; 63], &[0u8; 31]).unwrap_err();
        let fields: Vec<_> = err.violations().unwrap().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![Field::Signature, Field::PublicKey]);
    }

    #[test]
    fn no_primitive_call_on_bad_lengths() {
        let nacl = Nacl::with_backends(CountingPrimitives::new(), OsRandom);
        assert!(nacl.sign(b"m", &[0u8; 32]).is_err());
        assert!(nacl.sign_open(&[0u8; 80], &[0u8; 64]).is_err());
        assert!(nacl.sign_detached(b"m", &[0u8; 65]).is_err());
        assert!(nacl.sign_detached_verify(b"m", &[0u8; 64], &[0u8; 33]).is_err());
        assert!(nacl.sign_keypair_from_seed(&[0u8; 31]).is_err());
        assert!(nacl.sign_keypair_from_secret_key(&[0u8; 32]).is_err());
        assert!(nacl.sign_open(&[0u8; 10], &[0u8; 32]).is_err());
        assert_eq!(nacl.primitives().calls(), 0);
    }

    #[test]
    fn mismatched_embedded_public_key_is_internal_failure() {
        let kp = keypair().unwrap();
        let mut sk = *kp.secret_key;
        sk[63] ^= 0x01;
        assert!(matches!(
            sign(b"m", &sk),
            Err(NaclError::InternalFailure("sign"))
        ));

        // Splitting the same bytes still succeeds and keeps the embedded half.
        let split = keypair_from_secret_key(&sk).unwrap();
        assert_eq!(split.public_key[..], sk[32..]);
        assert_ne!(split.public_key, kp.public_key);
    }

    #[test]
    fn injected_failures_are_mapped() {
        let kp = keypair().unwrap();
        let signed = sign(b"m", &kp.secret_key[..]).unwrap();

        let nacl = Nacl::with_backends(CountingPrimitives::failing(Op::SignOpen), OsRandom);
        assert!(matches!(
            nacl.sign_open(&signed, &kp.public_key),
            Err(NaclError::VerificationFailed)
        ));
        assert!(!nacl
            .sign_detached_verify(b"m", &signed[..64], &kp.public_key)
            .unwrap());

        let nacl = Nacl::with_backends(CountingPrimitives::failing(Op::Sign), OsRandom);
        assert!(matches!(
            nacl.sign(b"m", &kp.secret_key[..]),
            Err(NaclError::InternalFailure(_))
        ));
    }
}
