//! Convert command - historical amount to modern equivalent

use super::format::{self, OutputFormat};
use super::{year_number, AmountArgs};
use crate::engine::{Converter, HistoricalData, BASE_YEAR};
use clap::Args;

#[derive(Args, Debug)]
pub struct ConvertCommand {
    #[command(flatten)]
    amount: AmountArgs,

    /// Target year for comparison
    #[arg(long, default_value_t = BASE_YEAR, allow_negative_numbers = true, value_parser = year_number)]
    target: i32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ConvertCommand {
    pub fn exec(&self, data: &HistoricalData) -> anyhow::Result<()> {
        let (amount, year) = self.amount.validate()?;
        let result = Converter::new(data).convert(amount, year, self.target)?;
        println!("{}", format::render(&result, self.format)?);
        Ok(())
    }
}
