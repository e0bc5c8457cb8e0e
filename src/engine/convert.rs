use super::currency::CurrencyAmount;
use super::data::HistoricalData;
use super::error::ConversionError;
use super::inflation::InflationConverter;
use super::purchasing::{PurchasingPower, PurchasingPowerCalculator};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full result of converting a historical amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConversionResult {
    /// The amount as entered, e.g. "£5 10s 6d"
    pub original_amount: String,
    /// The amount in decimal pounds
    pub decimal_pounds: f64,
    /// Year the amount is from
    pub year: i32,
    /// Equivalent value in the target year
    pub modern_equivalent: f64,
    /// Year the modern equivalent is expressed in
    pub target_year: i32,
    /// Price level of `year` relative to the base year
    pub inflation_multiplier: f64,
    /// Units of each commodity the amount could buy in `year`, keyed by display name
    #[schemars(with = "std::collections::BTreeMap<String, f64>")]
    pub purchasing_power: PurchasingPower,
}

/// The conversion engine: normalizes an amount, then converts it for inflation
/// and prices it in commodities.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    inflation: InflationConverter<'a>,
    purchasing: PurchasingPowerCalculator<'a>,
}

impl<'a> Converter<'a> {
    pub fn new(data: &'a HistoricalData) -> Self {
        Converter {
            inflation: InflationConverter::new(data),
            purchasing: PurchasingPowerCalculator::new(data),
        }
    }

    pub fn convert(
        &self,
        amount: CurrencyAmount,
        year: i32,
        target_year: i32,
    ) -> Result<ConversionResult, ConversionError> {
        let decimal_pounds = amount.to_decimal_pounds()?;
        let modern_equivalent = self.inflation.convert(decimal_pounds, year, target_year)?;
        let purchasing_power = self.purchasing.calculate(decimal_pounds, year, None);

        Ok(ConversionResult {
            original_amount: amount.to_string(),
            decimal_pounds,
            year,
            modern_equivalent,
            target_year,
            inflation_multiplier: self.inflation.multiplier(year),
            purchasing_power,
        })
    }
}
