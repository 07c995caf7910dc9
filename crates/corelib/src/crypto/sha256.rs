//! SHA-256 implementation of Digest32, backed by the `sha2` crate.
//!
//! Bit-for-bit FIPS 180-4 compatibility is required so masking keys agree
//! with other implementations of the protocol; the tests pin the standard
//! vectors.

use sha2::Digest;

use crate::crypto::hash::Digest32;

pub struct Sha256 {
    inner: sha2::Sha256,
}

impl Digest32 for Sha256 {
    fn new() -> Self {
        Self {
            inner: sha2::Sha256::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; 32] {
        self.inner.finalize().into()
    }
}
