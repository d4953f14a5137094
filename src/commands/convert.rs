use std::{error::Error, io, path::PathBuf};

use clap::Args;

use crate::ledger::entry::Mapper;
use crate::ledger::printing::Printer;
use crate::parser::Parser;
use crate::syntax::file::File;

#[derive(Args)]
pub struct Command {
    source: PathBuf,

    /// Asset account the transactions apply to.
    #[arg(short, long)]
    account: String,
}

impl Command {
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        let file = File::read(&self.source)?;
        let mapper = Mapper::new(&self.account)?;
        let mut out = io::stdout().lock();
        let mut printer = Printer::new(&mut out);
        for transaction in Parser::new(&file) {
            printer.entry(&mapper.entry(&transaction?)?)?;
        }
        Ok(())
    }
}
