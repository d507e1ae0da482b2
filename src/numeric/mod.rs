// ============================================================================
// Numeric Module
// Binary fixed-point fractions for on-chain accounting values
// ============================================================================
//
// This module provides:
// - FixedFraction: value × 2^60 stored as an unsigned integer of up to 256 bits
// - Limb assembly: rebuild wide fractions from little-endian u64 words
// - ConversionConfig: significant-digit precision for decimal output
// - FractionError: the single out-of-range failure
//
// Design principles:
// - No floating-point operations
// - Construction is the only fallible step
// - Comparisons use the raw scaled integer, never a rounded decimal
// - Decimal output is exact before the final rounding

mod big_fraction;
mod config;
mod errors;
mod fixed_fraction;

pub use big_fraction::{assemble, assemble_with, BIG_FRACTION_LIMBS, LIMB_BITS};
pub use config::{ConversionConfig, DECIMAL_PRECISION};
pub use errors::{FractionError, FractionResult};
pub use fixed_fraction::{
    FixedFraction, FRACTIONAL_BITS, MAX_BIG_FRACTION_BITS, MAX_SINGLE_WORD_BITS,
};
