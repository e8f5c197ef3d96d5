//! Text encodings for keys, nonces and boxes.
//!
//! Presentation only. The core API works on raw bytes; these helpers exist
//! for fixtures, configuration files and the command line. Base64 is the
//! standard padded alphabet (what other NaCl bindings emit), hex is lowercase.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{NaclError, Result};

/// Standard, padded base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard, padded base64.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|e| NaclError::Encoding(format!("invalid base64: {e}")))
}

/// Lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex (either case).
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text.trim()).map_err(|e| NaclError::Encoding(format!("invalid hex: {e}")))
}
