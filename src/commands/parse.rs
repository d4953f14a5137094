use std::{error::Error, path::PathBuf};

use clap::Args;

use crate::parser::Parser;
use crate::syntax::file::File;

#[derive(Args)]
pub struct Command {
    source: PathBuf,
}

impl Command {
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        let file = File::read(&self.source)?;
        for (n, transaction) in Parser::new(&file).enumerate() {
            let transaction = transaction?;
            println!("T{} ({})", n, transaction.kind);
            for record in &transaction.records {
                println!("    {:?}", record);
            }
        }
        Ok(())
    }
}
