//! Entropy capability.
//!
//! The random source is injected as a trait object/seam so the protocol can
//! run against scripted byte sources in tests; production code uses the OS
//! entropy device through `rand`.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::MtaError;

pub trait RandomSource {
    /// Fill `buf` completely with random bytes, or fail fatally. No retry
    /// is attempted here; callers may choose to.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), MtaError>;
}

/// OS-backed entropy (getrandom under the hood).
pub struct OsEntropy;

impl RandomSource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), MtaError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| MtaError::RandomSourceUnavailable(e.to_string()))
    }
}
