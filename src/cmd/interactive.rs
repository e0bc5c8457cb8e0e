//! Interactive command - prompt for amounts until the user quits

use super::format::render_table;
use super::{parse_amount, whole_number};
use crate::engine::{check_year, Converter, CurrencyAmount, HistoricalData, BASE_YEAR};
use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Args, Debug)]
pub struct InteractiveCommand {}

/// One answered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Quit,
    Value(i64),
}

/// Outcome of one full round of prompts.
enum Entry {
    Quit,
    Invalid(anyhow::Error),
    Valid(CurrencyAmount, i32),
}

const PROMPTS: [(&str, Option<i64>); 4] = [
    ("  Pounds (0-999): ", Some(0)),
    ("  Shillings (0-19): ", Some(0)),
    ("  Pence (0-11): ", Some(0)),
    ("  Year (1270-2017): ", None),
];

impl InteractiveCommand {
    pub fn exec(&self, data: &HistoricalData) -> anyhow::Result<()> {
        let converter = Converter::new(data);
        let mut rl = DefaultEditor::new()?;

        println!("UK Historical Currency Converter - Interactive Mode");
        println!("{}", "=".repeat(50));
        println!("Enter 'quit' or 'exit' to leave");
        println!();

        loop {
            println!("Enter historical amount:");
            match read_entry(&mut rl) {
                Ok(Entry::Valid(amount, year)) => match converter.convert(amount, year, BASE_YEAR) {
                    Ok(result) => {
                        println!();
                        println!("{}", render_table(&result));
                        println!();
                    }
                    Err(err) => {
                        println!("Error: {}", err);
                        println!();
                    }
                },
                Ok(Entry::Invalid(err)) => {
                    println!("Error: {}", err);
                    println!();
                }
                Ok(Entry::Quit) => break,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    println!("Goodbye!");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

fn read_entry(rl: &mut DefaultEditor) -> Result<Entry, ReadlineError> {
    let mut values = [0i64; 4];
    for (slot, (prompt, default)) in values.iter_mut().zip(PROMPTS) {
        let line = rl.readline(prompt)?;
        if !line.trim().is_empty() {
            if let Err(err) = rl.add_history_entry(line.as_str()) {
                log::debug!("could not record history entry: {}", err);
            }
        }
        match parse_answer(&line, default) {
            Ok(Answer::Quit) => return Ok(Entry::Quit),
            Ok(Answer::Value(value)) => *slot = value,
            Err(err) => return Ok(Entry::Invalid(err)),
        }
    }
    Ok(match validate_entry(values) {
        Ok((amount, year)) => Entry::Valid(amount, year),
        Err(err) => Entry::Invalid(err),
    })
}

fn parse_answer(line: &str, default: Option<i64>) -> anyhow::Result<Answer> {
    let input = line.trim();
    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
        return Ok(Answer::Quit);
    }
    if input.is_empty() {
        return default
            .map(Answer::Value)
            .ok_or_else(|| anyhow::anyhow!("A value is required"));
    }
    whole_number(input)
        .map(Answer::Value)
        .map_err(anyhow::Error::msg)
}

fn validate_entry([pounds, shillings, pence, year]: [i64; 4]) -> anyhow::Result<(CurrencyAmount, i32)> {
    let amount = parse_amount(pounds, shillings, pence)?;
    let year = i32::try_from(year).map_err(|_| anyhow::anyhow!("Year must be between 1270 and 2017"))?;
    check_year(year)?;
    Ok((amount, year))
}
