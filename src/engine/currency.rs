//! Pre-decimal pounds, shillings and pence.

use super::error::ConversionError;
use std::fmt;
use std::ops::RangeInclusive;

pub const SHILLINGS_PER_POUND: u32 = 20;
pub const PENCE_PER_SHILLING: u32 = 12;
pub const PENCE_PER_POUND: u32 = SHILLINGS_PER_POUND * PENCE_PER_SHILLING;

pub const POUNDS_RANGE: RangeInclusive<u32> = 0..=999;
pub const SHILLINGS_RANGE: RangeInclusive<u32> = 0..=19;
pub const PENCE_RANGE: RangeInclusive<u32> = 0..=11;

/// An amount in £sd, e.g. £5 10s 6d.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyAmount {
    pub pounds: u32,
    pub shillings: u32,
    pub pence: u32,
}

impl CurrencyAmount {
    pub fn new(pounds: u32, shillings: u32, pence: u32) -> Result<Self, ConversionError> {
        if !POUNDS_RANGE.contains(&pounds) {
            return Err(ConversionError::InvalidAmount(
                "Pounds must be between 0 and 999".to_string(),
            ));
        }
        if !SHILLINGS_RANGE.contains(&shillings) {
            return Err(ConversionError::InvalidAmount(
                "Shillings must be between 0 and 19".to_string(),
            ));
        }
        if !PENCE_RANGE.contains(&pence) {
            return Err(ConversionError::InvalidAmount(
                "Pence must be between 0 and 11".to_string(),
            ));
        }
        Ok(CurrencyAmount {
            pounds,
            shillings,
            pence,
        })
    }

    /// Total value in old pence.
    pub fn total_pence(&self) -> u64 {
        u64::from(self.pounds) * u64::from(PENCE_PER_POUND)
            + u64::from(self.shillings) * u64::from(PENCE_PER_SHILLING)
            + u64::from(self.pence)
    }

    pub fn to_decimal_pounds(&self) -> Result<f64, ConversionError> {
        normalize(self.pounds, self.shillings, self.pence)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{} {}s {}d", self.pounds, self.shillings, self.pence)
    }
}

/// Convert £sd to decimal pounds.
///
/// The old-pence numerator is summed in integers and divided once, so the
/// result is the closest `f64` to the exact fraction.
pub fn normalize(pounds: u32, shillings: u32, pence: u32) -> Result<f64, ConversionError> {
    if shillings >= SHILLINGS_PER_POUND {
        return Err(ConversionError::InvalidAmount(
            "Shillings must be less than 20".to_string(),
        ));
    }
    if pence >= PENCE_PER_SHILLING {
        return Err(ConversionError::InvalidAmount(
            "Pence must be less than 12".to_string(),
        ));
    }
    let total_pence = CurrencyAmount {
        pounds,
        shillings,
        pence,
    }
    .total_pence();
    Ok(total_pence as f64 / f64::from(PENCE_PER_POUND))
}
