//! Launcher command - quick-entry palette integration
//!
//! Takes a free-text query such as `5 10 6 1850`, runs this executable's
//! `convert --format=json` as a subprocess and prints a script-filter
//! document (`{"items": [...]}`) for the palette to display. Every failure is
//! reported as a single item flagged `valid: false`, never as an error exit.

use super::format::{format_gbp, format_quantity};
use super::{parse_amount, whole_number};
use crate::engine::{check_year, ConversionResult, CurrencyAmount};
use clap::Args;
use serde::Serialize;
use std::process::Command;

const DEFAULT_ICON: &str = "icon.png";

/// Entries below this quantity are not worth listing.
const MIN_LISTED_QUANTITY: f64 = 0.01;

#[derive(Args, Debug)]
pub struct LauncherCommand {
    /// Query text: "<pounds> <shillings> <pence> <year>"
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
enum LauncherError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Error calling converter: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("Converter error: {0}")]
    Converter(String),
    #[error("Invalid JSON from converter: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl LauncherError {
    fn title(&self) -> &'static str {
        match self {
            LauncherError::InvalidInput(_) => "Invalid Input",
            _ => "Conversion Error",
        }
    }

    fn uid(&self) -> &'static str {
        match self {
            LauncherError::InvalidInput(_) => "error",
            _ => "converter_error",
        }
    }
}

#[derive(Debug, Serialize)]
struct LauncherOutput {
    items: Vec<LauncherItem>,
}

#[derive(Debug, Serialize)]
struct LauncherItem {
    uid: String,
    title: String,
    subtitle: String,
    arg: String,
    valid: bool,
    icon: Icon,
}

#[derive(Debug, Serialize)]
struct Icon {
    #[serde(rename = "type")]
    kind: &'static str,
    path: &'static str,
}

impl Icon {
    fn new(path: &'static str) -> Self {
        Icon {
            kind: "default",
            path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Query {
    amount: CurrencyAmount,
    year: i32,
}

impl LauncherCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let query = self.query.join(" ");
        log::debug!("launcher query: '{}'", query);

        let items = match parse_query(&query).and_then(|q| call_converter(&q).map(|r| (q, r))) {
            Ok((query, result)) => result_items(&query, &result),
            Err(err) => {
                log::warn!("{}", err);
                vec![error_item(&err)]
            }
        };
        log::debug!("created {} launcher items", items.len());

        println!("{}", serde_json::to_string_pretty(&LauncherOutput { items })?);
        Ok(())
    }
}

fn parse_query(query: &str) -> Result<Query, LauncherError> {
    let parts: Vec<&str> = query.split_whitespace().collect();
    if parts.is_empty() {
        return Err(LauncherError::InvalidInput(
            "Enter 4 numbers: pounds shillings pence year".to_string(),
        ));
    }
    if parts.len() < 4 {
        return Err(LauncherError::InvalidInput(format!(
            "Need 4 numbers, got {}. Format: pounds shillings pence year",
            parts.len()
        )));
    }

    let numbers = parts[..4]
        .iter()
        .map(|part| whole_number(part))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| LauncherError::InvalidInput("All inputs must be numbers".to_string()))?;

    let invalid = |err: crate::engine::ConversionError| LauncherError::InvalidInput(err.to_string());
    let amount = parse_amount(numbers[0], numbers[1], numbers[2]).map_err(invalid)?;
    let year = i32::try_from(numbers[3])
        .map_err(|_| LauncherError::InvalidInput("Year must be between 1270 and 2017".to_string()))?;
    check_year(year).map_err(invalid)?;
    Ok(Query { amount, year })
}

fn call_converter(query: &Query) -> Result<ConversionResult, LauncherError> {
    let exe = std::env::current_exe()?;
    let args = [
        "convert".to_string(),
        query.amount.pounds.to_string(),
        query.amount.shillings.to_string(),
        query.amount.pence.to_string(),
        query.year.to_string(),
        "--format=json".to_string(),
    ];
    log::debug!("running {} {}", exe.display(), args.join(" "));

    let output = Command::new(exe).args(&args).output()?;
    log::debug!("converter exited with {}", output.status);
    parse_converter_output(output.status.success(), &output.stdout, &output.stderr)
}

fn parse_converter_output(
    success: bool,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<ConversionResult, LauncherError> {
    if !success {
        return Err(LauncherError::Converter(
            String::from_utf8_lossy(stderr).trim().to_string(),
        ));
    }
    Ok(serde_json::from_slice(stdout)?)
}

fn result_items(query: &Query, result: &ConversionResult) -> Vec<LauncherItem> {
    let original = &result.original_amount;
    let conversion = format!(
        "{} in {} = {} in {} ({:.1}x inflation)",
        original,
        query.year,
        format_gbp(result.modern_equivalent),
        result.target_year,
        result.inflation_multiplier
    );

    let mut items = vec![LauncherItem {
        uid: "conversion".to_string(),
        title: conversion.clone(),
        subtitle: "Press Enter to copy conversion result".to_string(),
        arg: conversion,
        valid: true,
        icon: Icon::new(DEFAULT_ICON),
    }];

    items.extend(
        result
            .purchasing_power
            .iter()
            .filter(|(_, quantity)| *quantity >= MIN_LISTED_QUANTITY)
            .map(|(commodity, quantity)| {
                let name = commodity.display_name();
                let text = format!("{} {}", format_quantity(quantity), name);
                LauncherItem {
                    uid: format!("item_{}", name),
                    title: text.clone(),
                    subtitle: format!("Individual purchasing power for {}", name),
                    arg: format!("{} in {} could buy {}", original, query.year, text),
                    valid: true,
                    icon: Icon::new(commodity.icon()),
                }
            }),
    );
    items
}

fn error_item(err: &LauncherError) -> LauncherItem {
    LauncherItem {
        uid: err.uid().to_string(),
        title: err.title().to_string(),
        subtitle: err.to_string(),
        arg: String::new(),
        valid: false,
        icon: Icon::new(DEFAULT_ICON),
    }
}
