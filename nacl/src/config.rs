//! # Constants
//!
//! Every length in the library lives here. If you're hardcoding a `32`
//! somewhere else, you're doing it wrong: half of the NaCl API uses 32 for
//! keys, the other half uses it for padding, and mixing them up is exactly
//! how buffer bugs get written.
//!
//! The values are fixed by the NaCl primitive set and will never change.
//! Anything that talks to another NaCl implementation depends on them.

// ---------------------------------------------------------------------------
// Algorithm names
// ---------------------------------------------------------------------------

/// Stream cipher + MAC behind `secretbox` and `box`.
pub const SECRETBOX_ALGORITHM: &str = "XSalsa20-Poly1305";

/// Key agreement behind `box` and `scalarmult`.
pub const KEY_EXCHANGE_ALGORITHM: &str = "X25519";

/// Signature scheme behind `sign`.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Hash function behind `hash`.
pub const HASH_ALGORITHM: &str = "SHA-512";

// ---------------------------------------------------------------------------
// Secretbox
// ---------------------------------------------------------------------------

/// Symmetric key length.
pub const SECRETBOX_KEY_BYTES: usize = 32;

/// Nonce length. 192 bits is large enough that random nonces are safe.
pub const SECRETBOX_NONCE_BYTES: usize = 24;

/// Leading zero bytes the seal primitive expects in front of the plaintext
/// (the NaCl `ZEROBYTES`).
pub const SECRETBOX_ZERO_BYTES: usize = 32;

/// Leading zero bytes the open primitive expects in front of the ciphertext
/// (the NaCl `BOXZEROBYTES`).
pub const SECRETBOX_BOX_ZERO_BYTES: usize = 16;

/// Poly1305 tag length. This is the only overhead a caller ever sees:
/// `ciphertext.len() == message.len() + SECRETBOX_MAC_BYTES`.
pub const SECRETBOX_MAC_BYTES: usize = SECRETBOX_ZERO_BYTES - SECRETBOX_BOX_ZERO_BYTES;

// ---------------------------------------------------------------------------
// Box
// ---------------------------------------------------------------------------

/// Curve25519 public key length.
pub const BOX_PUBLIC_KEY_BYTES: usize = 32;

/// Curve25519 secret scalar length.
pub const BOX_SECRET_KEY_BYTES: usize = 32;

/// Length of the precomputed shared key returned by `before`.
pub const BOX_BEFORENM_BYTES: usize = 32;

/// Box nonces are secretbox nonces.
pub const BOX_NONCE_BYTES: usize = SECRETBOX_NONCE_BYTES;

/// Box padding is secretbox padding.
pub const BOX_ZERO_BYTES: usize = SECRETBOX_ZERO_BYTES;

/// Box padding is secretbox padding.
pub const BOX_BOX_ZERO_BYTES: usize = SECRETBOX_BOX_ZERO_BYTES;

// ---------------------------------------------------------------------------
// Scalar multiplication
// ---------------------------------------------------------------------------

/// Length of a Curve25519 point (u-coordinate).
pub const SCALARMULT_BYTES: usize = 32;

/// Length of a Curve25519 scalar.
pub const SCALARMULT_SCALAR_BYTES: usize = 32;

// ---------------------------------------------------------------------------
// Signatures
// ---------------------------------------------------------------------------

/// Ed25519 signature length. Also the prefix length of a signed message.
pub const SIGN_BYTES: usize = 64;

/// Ed25519 public key length.
pub const SIGN_PUBLIC_KEY_BYTES: usize = 32;

/// Ed25519 secret key length: `seed || public_key`.
pub const SIGN_SECRET_KEY_BYTES: usize = 64;

/// Ed25519 seed length.
pub const SIGN_SEED_BYTES: usize = 32;

// ---------------------------------------------------------------------------
// Hash / verify
// ---------------------------------------------------------------------------

/// SHA-512 digest length.
pub const HASH_BYTES: usize = 64;

/// Block size of the constant-time comparison primitive.
pub const VERIFY_BYTES: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secretbox_overhead_is_the_tag() {
        assert_eq!(SECRETBOX_MAC_BYTES, 16);
        assert_eq!(SECRETBOX_BOX_ZERO_BYTES + SECRETBOX_MAC_BYTES, SECRETBOX_ZERO_BYTES);
    }

    #[test]
    fn sign_secret_key_embeds_public_key() {
        assert_eq!(SIGN_SECRET_KEY_BYTES, SIGN_SEED_BYTES + SIGN_PUBLIC_KEY_BYTES);
    }
}
