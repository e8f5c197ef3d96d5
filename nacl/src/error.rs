//! Error types for the NaCl API surface.
//!
//! Every public operation that can fail returns a [`NaclError`]. The enum is
//! exhaustive over the failure modes of the library: caller bugs
//! (`InvalidLength`, `Malformed`), hostile or corrupted input
//! (`AuthenticationFailed`, `VerificationFailed`), and environment failures
//! (`RandomSourceUnavailable`, `InternalFailure`).
//!
//! Error values never carry key material, plaintext, or the bytes that
//! failed authentication. Only lengths and field names.

use std::fmt;

use thiserror::Error;

/// Which argument of an operation a length violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Secretbox key, or a shared key produced by `before`.
    Key,
    /// Secretbox/box nonce.
    Nonce,
    /// Box or sign public key.
    PublicKey,
    /// Box or sign secret key.
    SecretKey,
    /// Sign keypair seed.
    Seed,
    /// Scalar-multiplication scalar `n`.
    Scalar,
    /// Scalar-multiplication point `p`.
    Point,
    /// Detached signature.
    Signature,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Key => "key",
            Field::Nonce => "nonce",
            Field::PublicKey => "public key",
            Field::SecretKey => "secret key",
            Field::Seed => "seed",
            Field::Scalar => "scalar",
            Field::Point => "point",
            Field::Signature => "signature",
        };
        f.write_str(name)
    }
}

/// A single fixed-length contract that an argument broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthViolation {
    /// The offending argument.
    pub field: Field,
    /// The length the primitive requires.
    pub expected: usize,
    /// The length the caller supplied.
    pub actual: usize,
}

impl fmt::Display for LengthViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {} bytes, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Every length violation found by one validation pass, in argument order.
///
/// Validation never stops at the first bad field, so a caller that got the
/// nonce *and* the key wrong hears about both at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthViolations(Vec<LengthViolation>);

impl LengthViolations {
    pub(crate) fn new(violations: Vec<LengthViolation>) -> Self {
        Self(violations)
    }

    /// The individual violations, in argument order.
    pub fn as_slice(&self) -> &[LengthViolation] {
        &self.0
    }

    /// Whether `field` is among the violations.
    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for LengthViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Errors returned by the NaCl operations.
#[derive(Debug, Error)]
pub enum NaclError {
    /// One or more fixed-length arguments have the wrong size. Raised before
    /// any primitive runs.
    #[error("invalid length: {0}")]
    InvalidLength(LengthViolations),

    /// Input is too short to possibly be valid (e.g. a box shorter than its tag).
    #[error("malformed {what}: need at least {minimum} bytes, got {actual}")]
    Malformed {
        /// What kind of input was malformed.
        what: &'static str,
        /// Minimum acceptable length.
        minimum: usize,
        /// Length the caller supplied.
        actual: usize,
    },

    /// A secretbox/box failed authentication. Wrong key, wrong nonce, and
    /// tampered ciphertext all look the same from here.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// A signed message did not verify under the given public key.
    #[error("signature verification failed")]
    VerificationFailed,

    /// The secure random source could not produce bytes.
    #[error("secure random source unavailable")]
    RandomSourceUnavailable,

    /// A primitive reported failure on a path where that is not an
    /// integrity outcome.
    #[error("internal failure in {0}")]
    InternalFailure(&'static str),

    /// Text decoding (hex/base64) failed.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl NaclError {
    /// The length violations, if this is an [`NaclError::InvalidLength`].
    pub fn violations(&self) -> Option<&[LengthViolation]> {
        match self {
            NaclError::InvalidLength(violations) => Some(violations.as_slice()),
            _ => None,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NaclError>;
