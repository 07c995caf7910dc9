//! Arithmetic modulo the secp256k1 field prime `p = 2^256 - 2^32 - 977`.
//!
//! `Fe` is the canonical-range type: every value produced by this module's
//! public operations lies in `[0, p)`. Raw byte buffers become field
//! elements only through `reduce`/`from_be_bytes`.
//!
//! None of this is constant-time; the protocol is a single-process
//! demonstration and timing hardening is an explicit non-goal.

use crate::bignum::U256;

/// The field prime, big-endian. Process-wide constant; exactly one modulus
/// is supported.
pub const FIELD_PRIME: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

const P: U256 = U256::from_be_bytes(FIELD_PRIME);

/// 2^256 mod p = 2^32 + 977. Folding constant: a carry out of the 256-bit
/// width re-enters the field as this value.
const FOLD: U256 = U256::from_u64((1u64 << 32) + 977);

/// The modulus as a `U256`.
pub fn modulus() -> U256 {
    P
}

/// A field element, canonically in `[0, p)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fe(U256);

impl Fe {
    pub const ZERO: Fe = Fe(U256::ZERO);
    pub const ONE: Fe = Fe(U256::ONE);

    /// Canonicalize an arbitrary 256-bit value by repeated subtraction of
    /// `p`. Any 256-bit value is below `2p`, so the loop runs at most once;
    /// the loop form keeps the invariant obvious.
    pub fn reduce(x: U256) -> Fe {
        let mut v = x;
        while v >= P {
            let (d, _) = v.overflowing_sub(&P);
            v = d;
        }
        Fe(v)
    }

    /// Interpret 32 big-endian bytes as a field element, reducing mod `p`.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Fe {
        Fe::reduce(U256::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// `(self + rhs) mod p`. A carry out of 256 bits means the true sum is
    /// `s + 2^256`, congruent to `s + FOLD`.
    pub fn add(&self, rhs: &Fe) -> Fe {
        let (s, carry) = self.0.overflowing_add(&rhs.0);
        let s = if carry {
            // s = x + y - 2^256 <= 2p - 2 - 2^256 < 2^256 - FOLD, so this
            // second addition cannot carry.
            let (folded, _) = s.overflowing_add(&FOLD);
            folded
        } else {
            s
        };
        Fe::reduce(s)
    }

    /// `(self - rhs) mod p`, borrowing `p` when the difference would go
    /// negative. Both branches land directly in canonical range.
    pub fn sub(&self, rhs: &Fe) -> Fe {
        if self.0 >= rhs.0 {
            let (d, _) = self.0.overflowing_sub(&rhs.0);
            Fe(d)
        } else {
            let (gap, _) = rhs.0.overflowing_sub(&self.0);
            let (d, _) = P.overflowing_sub(&gap);
            Fe(d)
        }
    }

    /// `(self * rhs) mod p` over the full 512-bit product.
    ///
    /// With `c = 2^256 mod p`, the identity `hi * 2^256 + lo == hi*c + lo
    /// (mod p)` folds the high half down. `hi * c` is at most 289 bits, so
    /// one more fold of its own high half leaves a 256-bit accumulator,
    /// which `reduce` canonicalizes.
    pub fn mul(&self, rhs: &Fe) -> Fe {
        let (lo, hi) = self.0.widening_mul(&rhs.0);
        let (t_lo, t_hi) = hi.widening_mul(&FOLD);
        let mut acc = add_fold(lo, t_lo);
        if t_hi != U256::ZERO {
            let (u_lo, _) = t_hi.widening_mul(&FOLD);
            acc = add_fold(acc, u_lo);
        }
        Fe::reduce(acc)
    }
}

/// 256-bit addition that stays congruent mod `p`: each carry out of the
/// width is folded back in as `FOLD`.
fn add_fold(a: U256, b: U256) -> U256 {
    let (mut s, mut carry) = a.overflowing_add(&b);
    while carry {
        let (t, c) = s.overflowing_add(&FOLD);
        s = t;
        carry = c;
    }
    s
}
