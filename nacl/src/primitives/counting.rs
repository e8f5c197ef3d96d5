//! Fault-injection wrapper used by the unit tests.
//!
//! Delegates to [`DalekPrimitives`], counts every call, and can be told to
//! make one operation fail. Lets tests prove that bad lengths never reach
//! the provider and that provider failures are mapped to the right error.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{DalekPrimitives, PrimitiveFailure, Primitives};
use crate::config::{
    BOX_BEFORENM_BYTES, BOX_PUBLIC_KEY_BYTES, BOX_SECRET_KEY_BYTES, HASH_BYTES, SCALARMULT_BYTES,
    SCALARMULT_SCALAR_BYTES, SECRETBOX_KEY_BYTES, SECRETBOX_NONCE_BYTES, SIGN_PUBLIC_KEY_BYTES,
    SIGN_SECRET_KEY_BYTES, SIGN_SEED_BYTES, VERIFY_BYTES,
};

/// The fallible operations a test can sabotage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Verify32,
    Scalarmult,
    BoxBeforenm,
    SecretboxSeal,
    SecretboxOpen,
    Sign,
    SignOpen,
}

#[derive(Debug, Default)]
pub(crate) struct CountingPrimitives {
    inner: DalekPrimitives,
    calls: AtomicUsize,
    failing: Option<Op>,
}

impl CountingPrimitives {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing(op: Op) -> Self {
        Self {
            failing: Some(op),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, op: Option<Op>) -> Result<(), PrimitiveFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match (op, self.failing) {
            (Some(op), Some(failing)) if op == failing => Err(PrimitiveFailure),
            _ => Ok(()),
        }
    }
}

impl Primitives for CountingPrimitives {
    fn hash512(&self, message: &[u8]) -> [u8; HASH_BYTES] {
        let _ = self.enter(None);
        self.inner.hash512(message)
    }

    fn verify32(&self, x: &[u8; VERIFY_BYTES], y: &[u8; VERIFY_BYTES]) -> bool {
        self.enter(Some(Op::Verify32)).is_ok() && self.inner.verify32(x, y)
    }

    fn scalarmult(
        &self,
        n: &[u8; SCALARMULT_SCALAR_BYTES],
        p: &[u8; SCALARMULT_BYTES],
    ) -> Result<[u8; SCALARMULT_BYTES], PrimitiveFailure> {
        self.enter(Some(Op::Scalarmult))?;
        self.inner.scalarmult(n, p)
    }

    fn scalarmult_base(&self, n: &[u8; SCALARMULT_SCALAR_BYTES]) -> [u8; SCALARMULT_BYTES] {
        let _ = self.enter(None);
        self.inner.scalarmult_base(n)
    }

    fn box_beforenm(
        &self,
        public_key: &[u8; BOX_PUBLIC_KEY_BYTES],
        secret_key: &[u8; BOX_SECRET_KEY_BYTES],
    ) -> Result<[u8; BOX_BEFORENM_BYTES], PrimitiveFailure> {
        self.enter(Some(Op::BoxBeforenm))?;
        self.inner.box_beforenm(public_key, secret_key)
    }

    fn secretbox_seal(
        &self,
        padded_message: &[u8],
        nonce: &[u8; SECRETBOX_NONCE_BYTES],
        key: &[u8; SECRETBOX_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        self.enter(Some(Op::SecretboxSeal))?;
        self.inner.secretbox_seal(padded_message, nonce, key)
    }

    fn secretbox_open(
        &self,
        padded_ciphertext: &[u8],
        nonce: &[u8; SECRETBOX_NONCE_BYTES],
        key: &[u8; SECRETBOX_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        self.enter(Some(Op::SecretboxOpen))?;
        self.inner.secretbox_open(padded_ciphertext, nonce, key)
    }

    fn sign_keypair(
        &self,
        seed: &[u8; SIGN_SEED_BYTES],
    ) -> ([u8; SIGN_PUBLIC_KEY_BYTES], [u8; SIGN_SECRET_KEY_BYTES]) {
        let _ = self.enter(None);
        self.inner.sign_keypair(seed)
    }

    fn sign(
        &self,
        message: &[u8],
        secret_key: &[u8; SIGN_SECRET_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        self.enter(Some(Op::Sign))?;
        self.inner.sign(message, secret_key)
    }

    fn sign_open(
        &self,
        signed_message: &[u8],
        public_key: &[u8; SIGN_PUBLIC_KEY_BYTES],
    ) -> Result<Vec<u8>, PrimitiveFailure> {
        self.enter(Some(Op::SignOpen))?;
        self.inner.sign_open(signed_message, public_key)
    }
}
