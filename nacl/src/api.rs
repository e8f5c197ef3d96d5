//! # The `Nacl` Facade
//!
//! One value that owns the two collaborators every operation needs: the
//! [`Primitives`] provider and the [`RandomSource`]. The operations
//! themselves are spread over the API modules (`secretbox`, `public_box`,
//! `scalarmult`, `sign`, `hash`, `util`), each of which adds an `impl` block
//! to this type and a set of free functions bound to the production
//! backends.
//!
//! ```no_run
//! use nacl::Nacl;
//!
//! let nacl = Nacl::new();
//! let alice = nacl.box_keypair()?;
//! let bob = nacl.box_keypair()?;
//! let nonce = nacl.random_bytes(24)?;
//!
//! let boxed = nacl.box_seal(b"hi bob", &nonce, &bob.public_key, &alice.secret_key[..])?;
//! let opened = nacl.box_open(&boxed, &nonce, &alice.public_key, &bob.secret_key[..])?;
//! assert_eq!(opened, b"hi bob");
//! # Ok::<(), nacl::NaclError>(())
//! ```
//!
//! `Nacl` holds no mutable state. Share it freely across threads.

use tracing::debug;

use crate::error::{NaclError, Result};
use crate::primitives::{DalekPrimitives, Primitives};
use crate::random::{OsRandom, RandomSource};

/// Entry point for every NaCl operation.
#[derive(Debug, Clone, Default)]
pub struct Nacl<P = DalekPrimitives, R = OsRandom> {
    pub(crate) primitives: P,
    pub(crate) random: R,
}

impl Nacl {
    /// Production backends: dalek/RustCrypto primitives and the OS CSPRNG.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Primitives, R: RandomSource> Nacl<P, R> {
    /// Bind explicit backends. Tests use this for fault injection.
    pub fn with_backends(primitives: P, random: R) -> Self {
        Self { primitives, random }
    }

    /// The primitive provider in use.
    pub fn primitives(&self) -> &P {
        &self.primitives
    }

    /// Fill `dest` from the random source. Never falls back, never retries.
    pub(crate) fn fill_random(&self, dest: &mut [u8]) -> Result<()> {
        self.random.fill(dest).map_err(|e| {
            debug!(requested = dest.len(), error = %e, "secure random source failed");
            NaclError::RandomSourceUnavailable
        })
    }
}
