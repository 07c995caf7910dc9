//! Fixed-width 256-bit unsigned integers, stored as 32 big-endian bytes.
//!
//! Every operation here is total: addition and subtraction wrap modulo
//! 2^256 and report the carry/borrow, multiplication returns both halves
//! of the full 512-bit schoolbook product. Range discipline (staying below
//! the field prime) is the `field` module's job, not this one's.

use std::fmt;

/// 256-bit unsigned integer, big-endian byte order.
///
/// The derived `Ord` is lexicographic over the bytes, which coincides with
/// numeric order because the representation is canonical big-endian.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub [u8; 32]);

impl U256 {
    pub const ZERO: U256 = U256::from_u64(0);
    pub const ONE: U256 = U256::from_u64(1);
    pub const MAX: U256 = U256([0xff; 32]);

    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        U256(bytes)
    }

    pub const fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub const fn from_u64(v: u64) -> Self {
        let mut out = [0u8; 32];
        let be = v.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            out[24 + i] = be[i];
            i += 1;
        }
        U256(out)
    }

    /// Byte-wise addition from the least-significant end; wraps modulo
    /// 2^256 and reports the carry-out.
    pub fn overflowing_add(&self, rhs: &U256) -> (U256, bool) {
        let mut out = [0u8; 32];
        let mut carry = 0u16;
        for i in (0..32).rev() {
            let sum = self.0[i] as u16 + rhs.0[i] as u16 + carry;
            out[i] = sum as u8;
            carry = sum >> 8;
        }
        (U256(out), carry != 0)
    }

    /// Byte-wise subtraction with borrow. When `self < rhs` the result is
    /// the wraparound `self - rhs + 2^256` and the borrow flag is set.
    pub fn overflowing_sub(&self, rhs: &U256) -> (U256, bool) {
        let mut out = [0u8; 32];
        let mut borrow = 0i16;
        for i in (0..32).rev() {
            let mut diff = self.0[i] as i16 - rhs.0[i] as i16 - borrow;
            if diff < 0 {
                diff += 256;
                borrow = 1;
            } else {
                borrow = 0;
            }
            out[i] = diff as u8;
        }
        (U256(out), borrow != 0)
    }

    /// Full 512-bit schoolbook product, returned as `(low, high)` 256-bit
    /// halves. Byte-pair partial products accumulate into per-byte cells
    /// with the carry pushed one cell up after each step, so no cell ever
    /// overflows its accumulator.
    pub fn widening_mul(&self, rhs: &U256) -> (U256, U256) {
        let mut lx = [0u8; 32];
        let mut ly = [0u8; 32];
        for i in 0..32 {
            lx[i] = self.0[31 - i];
            ly[i] = rhs.0[31 - i];
        }

        let mut acc = [0u32; 64];
        for i in 0..32 {
            for j in 0..32 {
                acc[i + j] += lx[i] as u32 * ly[j] as u32;
                acc[i + j + 1] += acc[i + j] >> 8;
                acc[i + j] &= 0xff;
            }
        }

        // Flush carries left over in cells the inner loop no longer revisits.
        let mut carry = 0u32;
        for cell in acc.iter_mut() {
            let v = *cell + carry;
            *cell = v & 0xff;
            carry = v >> 8;
        }

        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        for k in 0..32 {
            lo[31 - k] = acc[k] as u8;
        }
        for k in 32..64 {
            hi[63 - k] = acc[k] as u8;
        }
        (U256(lo), U256(hi))
    }

    /// Single-bit left shift; the top bit falls off.
    pub fn shl1(&self) -> U256 {
        let mut out = [0u8; 32];
        let mut carry = 0u16;
        for i in (0..32).rev() {
            let v = ((self.0[i] as u16) << 1) | carry;
            out[i] = v as u8;
            carry = (v >> 8) & 1;
        }
        U256(out)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{})", hex::encode(self.0))
    }
}
