//! Multiplicative-to-Additive (MtA) share conversion over the secp256k1
//! field prime.
//!
//! A product `a*b mod p` is re-expressed as two additive shares
//! `c + d == a*b (mod p)`, blinded under a hash-derived one-time key, then
//! unmasked and re-summed as a self-check. Arithmetic is fixed-width
//! 256-bit, big-endian byte order throughout; both parties' computations
//! happen in this one process, for demonstration.

pub mod bignum;
pub mod crypto;
pub mod entropy;
pub mod errors;
pub mod field;
pub mod mask;
pub mod protocol;

pub use entropy::{OsEntropy, RandomSource};
pub use errors::MtaError;
pub use protocol::{ConversionReport, MtaRun};

/// Run one conversion against the OS entropy source.
pub fn convert() -> Result<MtaRun, MtaError> {
    MtaRun::execute(&mut OsEntropy)
}

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
