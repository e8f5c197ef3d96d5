// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nacl: NaCl-Compatible Crypto Box
//!
//! The NaCl API as Rust: secretbox, box, scalarmult, Ed25519 sign (combined
//! and detached), SHA-512 and constant-time verify. Byte-for-byte compatible
//! with every other NaCl/TweetNaCl/libsodium binding, so boxes and signatures
//! move between implementations.
//!
//! The math is not ours. It comes from `ed25519-dalek`, `x25519-dalek`,
//! `sha2`, `crypto_secretbox` and `salsa20`, behind the [`Primitives`] trait.
//! What this crate owns is the part that usually goes wrong in wrappers:
//!
//! - **Lengths.** Every key, nonce and signature is checked before any
//!   primitive runs. A bad length is an [`NaclError::InvalidLength`] listing
//!   every bad field. Nothing is silently truncated or padded.
//! - **Padding.** The NaCl ZEROBYTES/BOXZEROBYTES convention lives in exactly
//!   one module, so callers see `message.len() + 16` bytes and nothing else.
//! - **Failure semantics.** Tampered boxes are `AuthenticationFailed`, bad
//!   signatures are `VerificationFailed`, and neither says *why*.
//! - **Secret hygiene.** Secret keys, shared keys and plaintext intermediates
//!   sit in `Zeroizing` buffers and are wiped when dropped.
//!
//! ## Modules
//!
//! - **secretbox**: XSalsa20-Poly1305 under a shared key.
//! - **public_box**: X25519 + secretbox. (`box` is a keyword.)
//! - **scalarmult**: raw X25519.
//! - **sign**: Ed25519, combined and detached.
//! - **hash** / **util**: SHA-512, constant-time compare, random bytes.
//! - **encoding**: hex/base64 for humans.
//! - **primitives** / **random**: the two pluggable backends.
//!
//! Every operation is a method on [`Nacl`] and a free function in its module
//! bound to the default backends. Both are stateless and thread-safe.

pub mod api;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod keys;
pub mod padding;
pub mod primitives;
pub mod public_box;
pub mod random;
pub mod scalarmult;
pub mod secretbox;
pub mod sign;
pub mod util;
pub mod validation;

pub use api::Nacl;
pub use error::{Field, LengthViolation, NaclError, Result};
pub use keys::{BoxKeyPair, SignKeyPair};
pub use primitives::{DalekPrimitives, PrimitiveFailure, Primitives};
pub use random::{OsRandom, RandomSource, RandomSourceError};
