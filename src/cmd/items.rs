//! Items command - commodity prices for a year

use super::year_number;
use crate::engine::{check_year, Commodity, HistoricalData, PurchasingPowerCalculator};
use clap::Args;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Year shown when none is given.
const DEFAULT_ITEMS_YEAR: i32 = 1500;

#[derive(Args, Debug)]
pub struct ItemsCommand {
    /// Year for item prices
    #[arg(long, default_value_t = DEFAULT_ITEMS_YEAR, allow_negative_numbers = true, value_parser = year_number)]
    year: i32,
}

#[derive(Debug, Clone, Tabled)]
struct ItemRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Description")]
    description: &'static str,
}

impl ItemsCommand {
    pub fn exec(&self, data: &HistoricalData) -> anyhow::Result<()> {
        check_year(self.year)?;
        println!("Historical prices in {}:", self.year);
        println!("{}", render_items(data, self.year));
        Ok(())
    }
}

fn render_items(data: &HistoricalData, year: i32) -> String {
    let calculator = PurchasingPowerCalculator::new(data);
    let rows: Vec<ItemRow> = Commodity::ALL
        .iter()
        .map(|commodity| ItemRow {
            item: commodity.key(),
            price: calculator
                .price(*commodity, year)
                .map_or("No data".to_string(), |price| format!("£{:.3}", price)),
            description: commodity.description(),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..2)).with(Alignment::right()))
        .to_string()
}
