use thiserror::Error;

#[derive(Debug, Error)]
pub enum MtaError {
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),
    #[error("share recombination mismatch: c + d != a*b (mod p)")]
    VerificationFailed,
}
