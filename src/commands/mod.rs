use std::error::Error;

use clap::Subcommand;

mod convert;
mod parse;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Dump the transactions in a QIF file.")]
    Parse(parse::Command),
    #[command(about = "Translate a QIF file to Ledger format.")]
    Convert(convert::Command),
}

impl Commands {
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Parse(command) => command.run(),
            Commands::Convert(command) => command.run(),
        }
    }
}
