//! Purchasing command - what a historical amount could buy

use super::format::format_quantity;
use super::AmountArgs;
use crate::engine::{HistoricalData, PurchasingPower, PurchasingPowerCalculator};
use clap::Args;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct PurchasingCommand {
    #[command(flatten)]
    amount: AmountArgs,

    /// Show only this item (e.g. horse, cow, wheat_quarter)
    #[arg(long)]
    item: Option<String>,
}

#[derive(Debug, Clone, Tabled)]
struct PurchasingRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Quantity")]
    quantity: String,
}

impl PurchasingCommand {
    pub fn exec(&self, data: &HistoricalData) -> anyhow::Result<()> {
        let (amount, year) = self.amount.validate()?;
        let decimal_pounds = amount.to_decimal_pounds()?;
        let power = PurchasingPowerCalculator::new(data).calculate(
            decimal_pounds,
            year,
            self.item.as_deref(),
        );

        println!("Purchasing power of {} in {}:", amount, year);
        println!("{}", render_rows(&power));
        Ok(())
    }
}

fn render_rows(power: &PurchasingPower) -> String {
    if power.is_empty() {
        return "No purchasing power data available".to_string();
    }

    let rows: Vec<PurchasingRow> = power
        .iter()
        .map(|(commodity, quantity)| PurchasingRow {
            item: commodity.display_name(),
            quantity: format_quantity(quantity),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}
