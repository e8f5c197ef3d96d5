//! # Secure Random Source
//!
//! Where key generation gets its entropy. The library only decides *how
//! much* randomness to draw and what to do when the draw fails; producing
//! it is the operating system's job.
//!
//! A failed draw is fatal to the calling operation. There is no fallback to
//! a weaker generator, no retry, and no partially-filled buffer handed back.

use rand::RngCore;
use thiserror::Error;

/// The random source could not fill the requested buffer.
#[derive(Debug, Error)]
#[error("random source failure: {0}")]
pub struct RandomSourceError(pub String);

/// A cryptographically secure source of random bytes.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes, or fail.
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomSourceError>;
}

/// The operating system CSPRNG (`getrandom` on Linux, `BCryptGenRandom` on
/// Windows, `SecRandomCopyBytes` territory on Apple platforms).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        rand::rngs::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RandomSourceError(e.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_fills_whole_buffer() {
        // 64 zero bytes from a working CSPRNG has probability 2^-512.
        let mut buf = [0u8; 64];
        OsRandom.fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn os_random_draws_differ() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsRandom.fill(&mut a).unwrap();
        OsRandom.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_draw_is_fine() {
        assert!(OsRandom.fill(&mut []).is_ok());
    }
}
