use clap::Parser;
use qif2ledger::commands;

#[derive(Parser)]
#[command(name = "qif2ledger")]
#[command(version = "0.1.0")]
#[command(about = "Translate Quicken Interchange Format files to Ledger.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.command.run() {
        println!("{e}");
        std::process::exit(1)
    };
}
