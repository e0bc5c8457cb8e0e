//! Inflation command - multiplier between two years

use super::year_number;
use crate::engine::{check_year, HistoricalData, InflationConverter, BASE_YEAR};
use clap::Args;

#[derive(Args, Debug)]
pub struct InflationCommand {
    /// Historical year (1270-2017)
    #[arg(allow_negative_numbers = true, value_parser = year_number)]
    year: i32,

    /// Target year for comparison
    #[arg(long, default_value_t = BASE_YEAR, allow_negative_numbers = true, value_parser = year_number)]
    target: i32,
}

impl InflationCommand {
    pub fn exec(&self, data: &HistoricalData) -> anyhow::Result<()> {
        check_year(self.year)?;
        let relative = InflationConverter::new(data).relative_multiplier(self.year, self.target)?;

        println!("Inflation data for {}:", self.year);
        println!("  Multiplier to {}: {:.1}x", self.target, relative);
        println!("  £1 in {} = £{:.2} in {}", self.year, relative, self.target);
        Ok(())
    }
}
