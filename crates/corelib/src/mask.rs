//! Repeating-key XOR masking for share blinding.
//!
//! Self-inverse and length-preserving. This is demonstration-grade
//! blinding ("encrypt shares before transmission"), not a stream cipher:
//! key reuse across both shares leaks their XOR.

/// XOR `data` with `key` repeated to cover its length.
pub fn mask(data: &[u8], key: &[u8]) -> Vec<u8> {
    assert!(!key.is_empty(), "mask key must not be empty");
    data.iter()
        .enumerate()
        .map(|(i, b)| b ^ key[i % key.len()])
        .collect()
}

/// Inverse of `mask`; the transform is its own inverse.
pub fn unmask(data: &[u8], key: &[u8]) -> Vec<u8> {
    mask(data, key)
}

/// Fixed-width variant for the protocol's 32-byte shares and keys.
pub fn mask32(data: &[u8; 32], key: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..32 {
        out[i] = data[i] ^ key[i];
    }
    out
}
