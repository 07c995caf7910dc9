//! Multiplicative-to-additive share conversion.
//!
//! One run is a straight line through five phases: sample `a` and `b`,
//! combine into `prod = a*b mod p`, split into `c + d == prod`, mask the
//! shares under a hash-derived one-time key, and verify by unmasking and
//! re-summing. There is no cross-run state.

use serde::{Deserialize, Serialize};

use crate::crypto::hash::digest_one_shot;
use crate::crypto::sha256::Sha256;
use crate::entropy::RandomSource;
use crate::errors::MtaError;
use crate::field::Fe;
use crate::mask::mask32;

/// A completed conversion: the secret factors, their product, and the
/// masked additive shares.
///
/// `execute` runs the sample/combine/split/mask phases; `verify` replays
/// the unmasking and checks `c + d == a*b (mod p)`.
pub struct MtaRun {
    pub a: Fe,
    pub b: Fe,
    pub product: Fe,
    pub c_masked: [u8; 32],
    pub d_masked: [u8; 32],
    masking_key: [u8; 32],
}

impl MtaRun {
    pub fn execute<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, MtaError> {
        // Phase 1: sample the secret factors.
        let a = sample_scalar(rng)?;
        let b = sample_scalar(rng)?;

        // Phase 2: the product both shares must re-sum to.
        let product = a.mul(&b);

        // Phase 3: additive split. c is fresh randomness, d the remainder.
        let r = sample_scalar(rng)?;
        let c = r;
        let d = product.sub(&r);

        // Phase 4: blind both shares under a key hashed from a one-time
        // ephemeral value. The ephemeral bytes are dropped after hashing.
        let mut ephemeral = [0u8; 32];
        rng.fill(&mut ephemeral)?;
        let masking_key = digest_one_shot::<Sha256>(&ephemeral);
        let c_masked = mask32(&c.to_be_bytes(), &masking_key);
        let d_masked = mask32(&d.to_be_bytes(), &masking_key);

        Ok(Self {
            a,
            b,
            product,
            c_masked,
            d_masked,
            masking_key,
        })
    }

    /// Phase 5: unmask both shares, re-reduce, re-sum, and compare against
    /// the product. A mismatch is a reportable logical failure, distinct
    /// from entropy failure.
    pub fn verify(&self) -> Result<(), MtaError> {
        let c = Fe::from_be_bytes(mask32(&self.c_masked, &self.masking_key));
        let d = Fe::from_be_bytes(mask32(&self.d_masked, &self.masking_key));
        if c.add(&d) == self.product {
            Ok(())
        } else {
            Err(MtaError::VerificationFailed)
        }
    }

    /// Observer view: the values a console or transcript would show.
    pub fn report(&self) -> ConversionReport {
        ConversionReport {
            ok: self.verify().is_ok(),
            a: hex::encode(self.a.to_be_bytes()),
            b: hex::encode(self.b.to_be_bytes()),
            c_masked: hex::encode(self.c_masked),
            d_masked: hex::encode(self.d_masked),
        }
    }
}

fn sample_scalar<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Fe, MtaError> {
    let mut buf = [0u8; 32];
    rng.fill(&mut buf)?;
    Ok(Fe::from_be_bytes(buf))
}

/// Hex-encoded run report for console/JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub ok: bool,
    pub a: String,
    pub b: String,
    pub c_masked: String,
    pub d_masked: String,
}
