use clap::{Parser, Subcommand};

use crate::cmd::convert::ConvertCommand;
use crate::cmd::inflation::InflationCommand;
use crate::cmd::interactive::InteractiveCommand;
use crate::cmd::items::ItemsCommand;
use crate::cmd::launcher::LauncherCommand;
use crate::cmd::purchasing::PurchasingCommand;
use crate::cmd::schema::SchemaCommand;
use crate::engine::HistoricalData;

mod cmd;
mod engine;

#[derive(Parser, Debug)]
#[command(
    name = "yeolde",
    version,
    about = "UK Historical Currency Converter",
    long_about = "Convert pre-decimal pounds, shillings and pence from a year between 1270 and 2017 \
                  into a modern equivalent, and see what the amount could buy at the time."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert historical currency to modern equivalent
    Convert(ConvertCommand),
    /// Show purchasing power for historical amount
    Purchasing(PurchasingCommand),
    /// Show inflation multiplier for a year
    Inflation(InflationCommand),
    /// List available items and their prices
    Items(ItemsCommand),
    /// Start interactive mode
    Interactive(InteractiveCommand),
    /// Quick-entry palette results for a "<pounds> <shillings> <pence> <year>" query
    Launcher(LauncherCommand),
    /// Print the JSON Schema of `convert --format=json` output
    Schema(SchemaCommand),
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let data = HistoricalData::new()?;
    match cli.command {
        Command::Convert(cmd) => cmd.exec(&data),
        Command::Purchasing(cmd) => cmd.exec(&data),
        Command::Inflation(cmd) => cmd.exec(&data),
        Command::Items(cmd) => cmd.exec(&data),
        Command::Interactive(cmd) => cmd.exec(&data),
        Command::Launcher(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
