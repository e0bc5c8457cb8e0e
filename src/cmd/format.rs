//! Output formats for conversion results.

use crate::engine::ConversionResult;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width human readable table
    #[default]
    Table,
    /// JSON object
    Json,
    /// field,value CSV
    Csv,
}

/// Decimal places for a commodity quantity: 1 at or above one unit, 2 down to
/// a tenth, 3 below that.
pub fn quantity_precision(quantity: f64) -> usize {
    if quantity >= 1.0 {
        1
    } else if quantity >= 0.1 {
        2
    } else {
        3
    }
}

pub fn format_quantity(quantity: f64) -> String {
    format!("{:.*}", quantity_precision(quantity), quantity)
}

/// Format as pounds with thousands separators, e.g. `£1,234.56`.
pub fn format_gbp(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}£{}.{}", sign, grouped, fraction)
}

pub fn render(result: &ConversionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Csv => render_csv(result),
    }
}

pub fn render_table(result: &ConversionResult) -> String {
    let rule = "=".repeat(60);
    let mut lines = vec![
        rule.clone(),
        "Historical Currency Conversion".to_string(),
        rule.clone(),
        format!("Original Amount:   {}", result.original_amount),
        format!("Year:              {}", result.year),
        format!("Decimal Pounds:    £{:.2}", result.decimal_pounds),
        format!(
            "Modern Equivalent: {} ({})",
            format_gbp(result.modern_equivalent),
            result.target_year
        ),
        format!("Inflation Factor:  {:.1}x", result.inflation_multiplier),
    ];

    if !result.purchasing_power.is_empty() {
        lines.push(String::new());
        lines.push("Purchasing Power:".to_string());
        lines.push("-".repeat(30));
        lines.extend(result.purchasing_power.iter().map(|(commodity, quantity)| {
            format!(
                "  {:20} {:8.*}",
                commodity.display_name(),
                quantity_precision(quantity),
                quantity
            )
        }));
    }

    lines.push(rule);
    lines.join("\n")
}

pub fn render_json(result: &ConversionResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[derive(Debug, Serialize)]
struct FieldRow {
    field: String,
    value: String,
}

fn field_rows(result: &ConversionResult) -> Vec<FieldRow> {
    let scalars = [
        ("original_amount", result.original_amount.clone()),
        ("year", result.year.to_string()),
        ("decimal_pounds", result.decimal_pounds.to_string()),
        ("modern_equivalent", result.modern_equivalent.to_string()),
        ("target_year", result.target_year.to_string()),
        ("inflation_multiplier", result.inflation_multiplier.to_string()),
    ];

    let mut rows: Vec<FieldRow> = scalars
        .into_iter()
        .map(|(field, value)| FieldRow {
            field: field.to_string(),
            value,
        })
        .collect();
    rows.extend(result.purchasing_power.iter().map(|(commodity, quantity)| FieldRow {
        field: format!("purchasing_power_{}", commodity.display_name()),
        value: quantity.to_string(),
    }));
    rows
}

pub fn write_csv<W: Write>(result: &ConversionResult, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in field_rows(result) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn render_csv(result: &ConversionResult) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    write_csv(result, &mut buf)?;
    Ok(String::from_utf8(buf)?.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Converter, CurrencyAmount, HistoricalData, BASE_YEAR};

    fn result() -> ConversionResult {
        let data = HistoricalData::new().unwrap();
        let amount = CurrencyAmount::new(5, 10, 6).unwrap();
        Converter::new(&data).convert(amount, 1850, BASE_YEAR).unwrap()
    }

    #[test]
    fn quantity_banding() {
        assert_eq!(format_quantity(12.345), "12.3");
        assert_eq!(format_quantity(1.0), "1.0");
        assert_eq!(format_quantity(0.5), "0.50");
        assert_eq!(format_quantity(0.1), "0.10");
        assert_eq!(format_quantity(0.0999), "0.100");
        assert_eq!(format_quantity(0.01234), "0.012");
    }

    #[test]
    fn gbp_thousands_separators() {
        assert_eq!(format_gbp(0.0), "£0.00");
        assert_eq!(format_gbp(442.0), "£442.00");
        assert_eq!(format_gbp(1000.0), "£1,000.00");
        assert_eq!(format_gbp(1234567.891), "£1,234,567.89");
        assert_eq!(format_gbp(-2500.5), "-£2,500.50");
    }

    #[test]
    fn table_contains_summary_and_purchasing_power() {
        let table = render_table(&result());
        assert!(table.starts_with(&"=".repeat(60)));
        assert!(table.contains("Original Amount:   £5 10s 6d"));
        assert!(table.contains("Year:              1850"));
        assert!(table.contains("Modern Equivalent: £442.00 (2017)"));
        assert!(table.contains("Inflation Factor:  80.0x"));
        // 5.525 / 20.0 horses
        assert!(table.contains(&format!("  {:20} {:>8}", "horses", "0.28")));
        // 5.525 / 0.03 loaves
        assert!(table.contains(&format!("  {:20} {:>8}", "loaves_of_bread", "184.2")));
    }

    #[test]
    fn json_has_result_fields() {
        let json = render_json(&result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["original_amount"], "£5 10s 6d");
        assert_eq!(value["year"], 1850);
        assert_eq!(value["target_year"], 2017);
        assert!(value["purchasing_power"]["horses"].is_number());
    }

    #[test]
    fn csv_one_row_per_field_and_commodity() {
        let csv = render_csv(&result()).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "field,value");
        assert_eq!(lines[1], "original_amount,£5 10s 6d");
        assert_eq!(lines[2], "year,1850");
        assert_eq!(lines[3], "decimal_pounds,5.525");
        assert_eq!(lines[5], "target_year,2017");
        assert_eq!(lines[6], "inflation_multiplier,80");
        assert!(lines[7].starts_with("purchasing_power_horses,0.276"));
        assert_eq!(lines.len(), 7 + 8);
        assert!(lines[14].starts_with("purchasing_power_gallons_of_ale,"));
    }
}
