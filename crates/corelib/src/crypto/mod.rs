//! Crypto primitives surface area: the 32-byte digest seam and the SHA-256
//! implementation behind it, used to derive masking keys.

pub mod hash;
pub mod sha256;
