pub mod convert;
pub mod format;
pub mod inflation;
pub mod interactive;
pub mod items;
pub mod launcher;
pub mod purchasing;
pub mod schema;

use crate::engine::currency::{PENCE_RANGE, POUNDS_RANGE, SHILLINGS_RANGE};
use crate::engine::{ConversionError, CurrencyAmount};
use clap::Args;
use std::ops::RangeInclusive;

/// Historical amount and year shared by `convert` and `purchasing`.
#[derive(Args, Debug, Clone)]
pub struct AmountArgs {
    /// Number of pounds (0-999)
    #[arg(allow_negative_numbers = true, value_parser = whole_number)]
    pub pounds: i64,

    /// Number of shillings (0-19)
    #[arg(allow_negative_numbers = true, value_parser = whole_number)]
    pub shillings: i64,

    /// Number of pence (0-11)
    #[arg(allow_negative_numbers = true, value_parser = whole_number)]
    pub pence: i64,

    /// Historical year (1270-2017)
    #[arg(allow_negative_numbers = true, value_parser = year_number)]
    pub year: i32,
}

/// Parse a signed whole number, saturating at the `i64` bounds.
///
/// Overflowing input stays out of range instead of failing to parse, so it
/// reaches the same range checks as any other bad amount.
pub fn whole_number(s: &str) -> Result<i64, String> {
    let input = s.trim();
    let digits = input.strip_prefix(['-', '+']).unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{}' is not a whole number", input));
    }
    let saturated = if input.starts_with('-') { i64::MIN } else { i64::MAX };
    Ok(input.parse::<i64>().unwrap_or(saturated))
}

/// Parse a year, saturating at the `i32` bounds.
pub fn year_number(s: &str) -> Result<i32, String> {
    let value = whole_number(s)?;
    Ok(i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX }))
}

impl AmountArgs {
    /// Range-check the arguments before they reach the engine.
    pub fn validate(&self) -> Result<(CurrencyAmount, i32), ConversionError> {
        let amount = parse_amount(self.pounds, self.shillings, self.pence)?;
        crate::engine::check_year(self.year)?;
        Ok((amount, self.year))
    }
}

/// Build a currency amount from unchecked integers.
pub fn parse_amount(pounds: i64, shillings: i64, pence: i64) -> Result<CurrencyAmount, ConversionError> {
    CurrencyAmount::new(
        component(pounds, "Pounds", POUNDS_RANGE)?,
        component(shillings, "Shillings", SHILLINGS_RANGE)?,
        component(pence, "Pence", PENCE_RANGE)?,
    )
}

fn component(value: i64, name: &str, range: RangeInclusive<u32>) -> Result<u32, ConversionError> {
    u32::try_from(value)
        .ok()
        .filter(|v| range.contains(v))
        .ok_or_else(|| {
            ConversionError::InvalidAmount(format!(
                "{} must be between {} and {}",
                name,
                range.start(),
                range.end()
            ))
        })
}
