//! Generic digest trait and helpers.

/// A streaming digest with a fixed 32-byte output.
///
/// The protocol only ever hashes a 32-byte ephemeral key, but the contract
/// covers arbitrary-length input so implementations stay substitutable and
/// testable against standard vectors.
pub trait Digest32 {
    /// Create a new hasher.
    fn new() -> Self
    where
        Self: Sized;
    /// Absorb bytes into the state.
    fn update(&mut self, data: &[u8]);
    /// Finalize and produce a 32-byte digest.
    fn finalize(self) -> [u8; 32];
}

/// Compute one-shot digest.
pub fn digest_one_shot<D: Digest32>(data: &[u8]) -> [u8; 32] {
    let mut h = D::new();
    h.update(data);
    h.finalize()
}
