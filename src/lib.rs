// ============================================================================
// Fixed Fraction Library
// Binary fixed-point fractions for decoding on-chain accounting values
// ============================================================================

//! # Fixed Fraction
//!
//! Decodes on-chain fees, prices and balances stored as binary fixed-point
//! integers (value × 2^60) into arbitrary-precision decimals.
//!
//! ## Features
//!
//! - **Range-checked construction**: scaled values must fit in 256 bits
//! - **Limb assembly** from little-endian `u64` words as laid out on chain
//! - **40-digit decimal conversion**, exact before the final rounding
//! - **Exact ordering** on the raw scaled integer
//!
//! ## Example
//!
//! ```rust
//! use fixed_fraction::prelude::*;
//! use std::str::FromStr;
//!
//! // A borrow rate stored on chain as four u64 limbs
//! let limbs = [1u64 << 59, 0, 0, 0];
//! let rate = FixedFraction::from_limbs(&limbs).unwrap();
//! assert_eq!(rate.to_decimal(), BigDecimal::from_str("0.5").unwrap());
//!
//! // The same conversion in one step
//! assert_eq!(assemble(&limbs).unwrap(), rate.to_decimal());
//!
//! // Wider than 256 bits is rejected
//! assert_eq!(assemble(&[0, 0, 0, 0, 1]), Err(FractionError::OutOfRange));
//!
//! // Comparisons never lose precision
//! assert!(FixedFraction::one() > rate);
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        assemble, assemble_with, ConversionConfig, FixedFraction, FractionError, FractionResult,
    };
    pub use bigdecimal::BigDecimal;
    pub use num::BigUint;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_end_to_end_decoding() {
        // Protocol fee of 25 bps stored on chain
        let fee = FixedFraction::from_bps(25);
        let limbs = fee.to_limbs();

        let decoded = FixedFraction::from_limbs(&limbs).unwrap();
        assert_eq!(decoded, fee);
        assert_eq!(assemble(&limbs).unwrap(), fee.to_decimal());

        // Floored below 0.0025 by less than one unit of resolution
        let exact = BigDecimal::from_str("0.0025").unwrap();
        let decimal = fee.to_decimal();
        assert!(decimal <= exact);
        assert!(&exact - &decimal < BigDecimal::from_str("1e-18").unwrap());
    }

    #[test]
    fn test_out_of_range_propagates() {
        fn decode_reserve(limbs: &[u64]) -> FractionResult<BigDecimal> {
            let value = assemble(limbs)?;
            Ok(value)
        }

        assert_eq!(
            decode_reserve(&[u64::MAX; 5]),
            Err(FractionError::OutOfRange)
        );
        assert!(decode_reserve(&[u64::MAX; 4]).is_ok());
    }

    #[test]
    fn test_concurrent_conversion() {
        let fraction = Arc::new(FixedFraction::from(3u64 << 59));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let fraction = Arc::clone(&fraction);
                thread::spawn(move || fraction.to_decimal())
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                BigDecimal::from_str("1.5").unwrap()
            );
        }
    }
}
