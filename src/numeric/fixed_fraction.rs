// ============================================================================
// Fixed-Point Fraction
// Binary fixed-point value with 60 fractional bits and a 256-bit range
// ============================================================================

use super::config::ConversionConfig;
use super::errors::{FractionError, FractionResult};
use bigdecimal::BigDecimal;
use num::bigint::Sign;
use num::{BigInt, BigUint, One, Zero};
use std::fmt;

// ============================================================================
// Scale Constants
// ============================================================================

/// Number of fractional bits in the binary representation.
pub const FRACTIONAL_BITS: u32 = 60;

/// Width of a single-word fraction. Informational only: the enforced bound is
/// [`MAX_BIG_FRACTION_BITS`].
pub const MAX_SINGLE_WORD_BITS: u64 = 128;

/// Widest scaled value accepted by [`FixedFraction::new`].
pub const MAX_BIG_FRACTION_BITS: u64 = 256;

/// Binary fixed-point fraction.
///
/// Internally stores `value × 2^60` as an unsigned integer of at most 256
/// bits. The value is immutable once constructed.
///
/// Ordering and equality operate on the raw scaled integer, never on a
/// rounded decimal, so `gt`, `lt`, `ge`, `le` and `eq` from the standard
/// comparison traits are exact.
///
/// # Value Range
/// - Minimum: 0
/// - Maximum: (2^256 - 1) / 2^60, roughly 1.0043e59
/// - Resolution: 2^-60, roughly 8.67e-19
///
/// # Example
/// ```
/// use fixed_fraction::numeric::FixedFraction;
/// use num::BigUint;
///
/// let raw = BigUint::from(3u64) << 59u32;
/// let fee = FixedFraction::new(raw).unwrap();
/// assert_eq!(fee.to_string(), "1.5");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedFraction(BigUint);

impl FixedFraction {
    /// The scale factor (2^60)
    pub fn scale() -> BigUint {
        BigUint::one() << FRACTIONAL_BITS
    }

    /// Smallest accepted scaled value
    pub fn min_value() -> BigUint {
        BigUint::zero()
    }

    /// Largest accepted scaled value (2^256 - 1)
    pub fn max_value() -> BigUint {
        (BigUint::one() << MAX_BIG_FRACTION_BITS) - 1u32
    }

    /// Largest single-word scaled value (2^128 - 1)
    pub fn max_single_word_value() -> BigUint {
        (BigUint::one() << MAX_SINGLE_WORD_BITS) - 1u32
    }

    /// Zero
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// One (raw value 2^60)
    pub fn one() -> Self {
        Self(Self::scale())
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw scaled integer.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `raw` does not fit in 256 bits.
    pub fn new(raw: BigUint) -> FractionResult<Self> {
        let bits = raw.bits();
        if bits > MAX_BIG_FRACTION_BITS {
            tracing::debug!(bits, "rejected scaled value wider than 256 bits");
            return Err(FractionError::OutOfRange);
        }
        Ok(Self(raw))
    }

    /// Create from a decimal value, flooring to the nearest representable
    /// fraction below it.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the value is negative or too large.
    pub fn from_decimal(value: &BigDecimal) -> FractionResult<Self> {
        let (digits, exponent) = value.as_bigint_and_exponent();
        if digits.sign() == Sign::Minus {
            tracing::debug!(%value, "rejected negative decimal");
            return Err(FractionError::OutOfRange);
        }

        let shifted = digits.magnitude() << FRACTIONAL_BITS;
        let raw = if shifted.is_zero() {
            shifted
        } else if exponent >= 0 {
            // 10^e > 2^e > shifted once e reaches the bit width, so the floor is zero
            match u32::try_from(exponent) {
                Ok(e) if u64::from(e) < shifted.bits() => shifted / BigUint::from(10u32).pow(e),
                _ => BigUint::zero(),
            }
        } else {
            // 10^78 already exceeds 2^256
            match u32::try_from(exponent.unsigned_abs()) {
                Ok(e) if e < 78 => shifted * BigUint::from(10u32).pow(e),
                _ => {
                    tracing::debug!(%value, "rejected decimal above the representable range");
                    return Err(FractionError::OutOfRange);
                }
            }
        };

        Self::new(raw)
    }

    /// Create from basis points (`bps / 10_000`), floored.
    pub fn from_bps(bps: u64) -> Self {
        Self((BigUint::from(bps) << FRACTIONAL_BITS) / BigUint::from(10_000u32))
    }

    /// Create from a whole percentage (`percent / 100`), floored.
    pub fn from_percent(percent: u64) -> Self {
        Self((BigUint::from(percent) << FRACTIONAL_BITS) / BigUint::from(100u32))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw scaled integer (value × 2^60).
    #[inline]
    pub fn raw_value(&self) -> &BigUint {
        &self.0
    }

    /// Consume the fraction and return its raw scaled integer.
    #[inline]
    pub fn into_raw(self) -> BigUint {
        self.0
    }

    /// Get the integer part (truncated).
    pub fn integer_part(&self) -> BigUint {
        &self.0 >> FRACTIONAL_BITS
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    // ========================================================================
    // Decimal Conversion
    // ========================================================================

    /// Convert to a decimal with 40 significant digits.
    pub fn to_decimal(&self) -> BigDecimal {
        self.to_decimal_with(&ConversionConfig::standard())
    }

    /// Convert to a decimal using the precision from `config`.
    ///
    /// The division by 2^60 is exact (`v / 2^60 == v × 5^60 / 10^60`); the
    /// only rounding is the final reduction to significant digits.
    /// Trailing zeros are stripped from the result.
    pub fn to_decimal_with(&self, config: &ConversionConfig) -> BigDecimal {
        let numerator = &self.0 * BigUint::from(5u32).pow(FRACTIONAL_BITS);
        BigDecimal::new(BigInt::from(numerator), i64::from(FRACTIONAL_BITS))
            .with_prec(config.effective_precision())
            .normalized()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for FixedFraction {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for FixedFraction {
    fn from(raw: u64) -> Self {
        Self(BigUint::from(raw))
    }
}

impl From<u128> for FixedFraction {
    fn from(raw: u128) -> Self {
        Self(BigUint::from(raw))
    }
}

impl TryFrom<BigUint> for FixedFraction {
    type Error = FractionError;

    fn try_from(raw: BigUint) -> FractionResult<Self> {
        Self::new(raw)
    }
}

impl TryFrom<BigInt> for FixedFraction {
    type Error = FractionError;

    /// Signed input is accepted for callers decoding into signed big integers;
    /// anything below zero is out of range.
    fn try_from(raw: BigInt) -> FractionResult<Self> {
        let (sign, magnitude) = raw.into_parts();
        if sign == Sign::Minus {
            tracing::debug!(bits = magnitude.bits(), "rejected negative scaled value");
            return Err(FractionError::OutOfRange);
        }
        Self::new(magnitude)
    }
}

impl TryFrom<rust_decimal::Decimal> for FixedFraction {
    type Error = FractionError;

    fn try_from(value: rust_decimal::Decimal) -> FractionResult<Self> {
        let decimal = BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()));
        Self::from_decimal(&decimal)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedFraction({}, raw={})", self, self.0)
    }
}

impl fmt::Display for FixedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

// ============================================================================
// Serialization
// ============================================================================

// Raw value travels as a decimal integer string so no bits are lost.
#[cfg(feature = "serde")]
impl serde::Serialize for FixedFraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FixedFraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        use std::str::FromStr;

        let s = String::deserialize(deserializer)?;
        let raw = BigUint::from_str(&s).map_err(serde::de::Error::custom)?;
        FixedFraction::new(raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
