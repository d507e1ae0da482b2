// ============================================================================
// Big Fraction Assembly
// Rebuild a scaled value from little-endian 64-bit limbs
// ============================================================================
//
// On-chain accounts store wide fractions as a fixed array of u64 words,
// least significant first. Limb i contributes `limb << (64 * i)`.

use super::config::ConversionConfig;
use super::errors::FractionResult;
use super::fixed_fraction::{FixedFraction, MAX_BIG_FRACTION_BITS};
use bigdecimal::BigDecimal;
use num::{BigUint, Zero};

/// Width of a single limb in bits
pub const LIMB_BITS: usize = 64;

/// Number of limbs needed to hold any in-range scaled value
pub const BIG_FRACTION_LIMBS: usize = (MAX_BIG_FRACTION_BITS as usize) / LIMB_BITS;

/// Assemble limbs into a decimal with 40 significant digits.
///
/// An empty slice yields zero.
///
/// # Errors
/// Returns `OutOfRange` if the weighted sum exceeds 2^256 - 1.
pub fn assemble(limbs: &[u64]) -> FractionResult<BigDecimal> {
    assemble_with(limbs, &ConversionConfig::standard())
}

/// Assemble limbs into a decimal using the precision from `config`.
///
/// # Errors
/// Returns `OutOfRange` if the weighted sum exceeds 2^256 - 1.
pub fn assemble_with(limbs: &[u64], config: &ConversionConfig) -> FractionResult<BigDecimal> {
    let fraction = FixedFraction::from_limbs(limbs)?;
    Ok(fraction.to_decimal_with(config))
}

impl FixedFraction {
    /// Create from little-endian 64-bit limbs.
    ///
    /// The sum is accumulated without a width limit, so extra high limbs are
    /// range checked instead of wrapping. Zero-valued high limbs are accepted.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the weighted sum exceeds 2^256 - 1.
    pub fn from_limbs(limbs: &[u64]) -> FractionResult<Self> {
        let raw = limbs
            .iter()
            .enumerate()
            .fold(BigUint::zero(), |acc, (i, &limb)| {
                acc + (BigUint::from(limb) << (LIMB_BITS * i))
            });

        tracing::trace!(
            limbs = limbs.len(),
            bits = raw.bits(),
            "assembled scaled value from limbs"
        );

        Self::new(raw)
    }

    /// Split into the four little-endian limbs of the on-chain layout.
    pub fn to_limbs(&self) -> [u64; BIG_FRACTION_LIMBS] {
        let mut limbs = [0u64; BIG_FRACTION_LIMBS];
        for (slot, digit) in limbs.iter_mut().zip(self.raw_value().iter_u64_digits()) {
            *slot = digit;
        }
        limbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FractionError;
    use std::str::FromStr;

    const ONE_RAW: u64 = 1 << 60;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_limbs_are_zero() {
        assert_eq!(assemble(&[]).unwrap(), dec("0"));
        assert_eq!(assemble(&[0]).unwrap(), dec("0"));
        assert_eq!(assemble(&[]).unwrap(), assemble(&[0]).unwrap());
    }

    #[test]
    fn test_single_limb_matches_direct_construction() {
        let x = 0xDEAD_BEEF_u64 << 20;
        assert_eq!(
            assemble(&[x]).unwrap(),
            FixedFraction::from(x).to_decimal()
        );
    }

    #[test]
    fn test_low_limb_one() {
        assert_eq!(assemble(&[ONE_RAW, 0]).unwrap(), dec("1"));
    }

    #[test]
    fn test_high_limb_is_shifted() {
        // (2^60 << 64) / 2^60 = 2^64
        assert_eq!(
            assemble(&[0, ONE_RAW]).unwrap(),
            dec("18446744073709551616")
        );
    }

    #[test]
    fn test_two_limbs_match_weighted_sum() {
        let low = 12_345u64;
        let high = 678u64;
        let expected = FixedFraction::from(u128::from(low) + (u128::from(high) << 64));
        assert_eq!(assemble(&[low, high]).unwrap(), expected.to_decimal());
    }

    #[test]
    fn test_four_full_limbs_is_max() {
        let fraction = FixedFraction::from_limbs(&[u64::MAX; 4]).unwrap();
        assert_eq!(fraction.raw_value(), &FixedFraction::max_value());
    }

    #[test]
    fn test_fifth_limb_overflows() {
        assert_eq!(
            assemble(&[0, 0, 0, 0, 1]),
            Err(FractionError::OutOfRange)
        );
        assert_eq!(
            FixedFraction::from_limbs(&[u64::MAX, u64::MAX, u64::MAX, u64::MAX, 1]),
            Err(FractionError::OutOfRange)
        );
    }

    #[test]
    fn test_zero_high_limbs_are_accepted() {
        let padded = FixedFraction::from_limbs(&[ONE_RAW, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(padded, FixedFraction::one());
    }

    #[test]
    fn test_assemble_with_precision() {
        let config = ConversionConfig::standard().with_precision(10);
        assert_eq!(assemble_with(&[1], &config).unwrap(), dec("8.67361738e-19"));
    }

    #[test]
    fn test_to_limbs() {
        assert_eq!(FixedFraction::zero().to_limbs(), [0, 0, 0, 0]);
        assert_eq!(FixedFraction::one().to_limbs(), [ONE_RAW, 0, 0, 0]);

        let limbs = [1, 2, 3, 4];
        let fraction = FixedFraction::from_limbs(&limbs).unwrap();
        assert_eq!(fraction.to_limbs(), limbs);
    }
}
