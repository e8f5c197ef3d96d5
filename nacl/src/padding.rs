//! # ZEROBYTES Padding Adapter
//!
//! The NaCl secretbox primitive works on padded buffers so that one function
//! signature can carry the authentication tag for any message length. Callers
//! should never have to know that. This module is the only place in the crate
//! that does the offset arithmetic:
//!
//! ```text
//! seal input   [ 0 x 32 ][ message            ]
//! seal output  [ 0 x 16 ][ tag 16 ][ ciphertext ]   -> caller gets tag || ciphertext
//!
//! open input   [ 0 x 16 ][ tag 16 ][ ciphertext ]
//! open output  [ 0 x 32 ][ message            ]   -> caller gets message
//! ```
//!
//! So the visible overhead is exactly the 16-byte tag. The other 16 bytes of
//! padding never leave this module.
//!
//! Both directions hold their working buffers in [`Zeroizing`], so plaintext
//! copies are wiped no matter how the function exits.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::config::{
    SECRETBOX_BOX_ZERO_BYTES, SECRETBOX_KEY_BYTES, SECRETBOX_MAC_BYTES, SECRETBOX_NONCE_BYTES,
    SECRETBOX_ZERO_BYTES,
};
use crate::error::{NaclError, Result};
use crate::primitives::Primitives;

/// Seal `message`, returning `tag || ciphertext` (`message.len() + 16` bytes).
pub fn seal<P: Primitives + ?Sized>(
    primitives: &P,
    message: &[u8],
    nonce: &[u8; SECRETBOX_NONCE_BYTES],
    key: &[u8; SECRETBOX_KEY_BYTES],
) -> Result<Vec<u8>> {
    let mut padded = Zeroizing::new(vec![0u8; SECRETBOX_ZERO_BYTES + message.len()]);
    padded[SECRETBOX_ZERO_BYTES..].copy_from_slice(message);

    let sealed = primitives
        .secretbox_seal(&padded, nonce, key)
        .map_err(|_| NaclError::InternalFailure("secretbox seal"))?;

    // A provider that changes the buffer length is broken. Don't slice into it.
    if sealed.len() != padded.len() {
        return Err(NaclError::InternalFailure("secretbox seal"));
    }

    trace!(message_len = message.len(), "sealed secretbox");
    Ok(sealed[SECRETBOX_BOX_ZERO_BYTES..].to_vec())
}

/// Open `tag || ciphertext`, returning the message (`ciphertext.len() - 16`).
///
/// Input shorter than the tag is [`NaclError::Malformed`]; it never reaches
/// the primitive. Any primitive failure is [`NaclError::AuthenticationFailed`]
/// and no plaintext is returned.
pub fn open<P: Primitives + ?Sized>(
    primitives: &P,
    ciphertext: &[u8],
    nonce: &[u8; SECRETBOX_NONCE_BYTES],
    key: &[u8; SECRETBOX_KEY_BYTES],
) -> Result<Vec<u8>> {
    if ciphertext.len() < SECRETBOX_MAC_BYTES {
        debug!(
            actual = ciphertext.len(),
            minimum = SECRETBOX_MAC_BYTES,
            "secretbox shorter than its tag"
        );
        return Err(NaclError::Malformed {
            what: "secretbox",
            minimum: SECRETBOX_MAC_BYTES,
            actual: ciphertext.len(),
        });
    }

    let mut padded = vec![0u8; SECRETBOX_BOX_ZERO_BYTES + ciphertext.len()];
    padded[SECRETBOX_BOX_ZERO_BYTES..].copy_from_slice(ciphertext);

    let opened = primitives.secretbox_open(&padded, nonce, key).map_err(|_| {
        debug!(ciphertext_len = ciphertext.len(), "secretbox authentication failed");
        NaclError::AuthenticationFailed
    })?;
    let opened = Zeroizing::new(opened);

    if opened.len() != padded.len() {
        return Err(NaclError::InternalFailure("secretbox open"));
    }

    Ok(opened[SECRETBOX_ZERO_BYTES..].to_vec())
}
