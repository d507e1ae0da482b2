// ============================================================================
// Conversion Configuration
// Precision settings for fixed-point to decimal conversion
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of significant decimal digits produced by a standard conversion.
pub const DECIMAL_PRECISION: u64 = 40;

/// Settings applied when a fraction is rendered as a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionConfig {
    /// Significant decimal digits kept after rounding
    pub precision: u64,
}

impl ConversionConfig {
    /// Create a configuration with an explicit precision
    pub fn new(precision: u64) -> Self {
        Self { precision }
    }

    /// Standard configuration: 40 significant digits
    pub const fn standard() -> Self {
        Self {
            precision: DECIMAL_PRECISION,
        }
    }

    /// Builder method: Set significant digit precision
    pub fn with_precision(mut self, precision: u64) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.precision == 0 {
            return Err("Precision must be at least one significant digit".to_string());
        }

        Ok(())
    }

    /// Precision actually applied during conversion.
    ///
    /// An invalid configuration falls back to the standard precision.
    pub(crate) fn effective_precision(&self) -> u64 {
        if self.validate().is_ok() {
            self.precision
        } else {
            DECIMAL_PRECISION
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::standard()
    }
}
