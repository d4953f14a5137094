use std::io::Write;

use super::entry::Entry;

/// Writes entries in Ledger text format.
pub struct Printer<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> Printer<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    pub fn entry(&mut self, entry: &Entry) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "{date} {payee}",
            date = entry.date.format("%Y/%m/%d"),
            payee = entry.payee,
        )?;
        if let Some(ref memo) = entry.memo {
            writeln!(self.writer, "    ;{}", memo)?;
        }
        for posting in &entry.postings {
            match (&posting.amount, &posting.memo) {
                (Some(amount), Some(memo)) => writeln!(
                    self.writer,
                    "    {}  ${}  ;{}",
                    posting.account, amount, memo
                )?,
                (Some(amount), None) => {
                    writeln!(self.writer, "    {}  ${}", posting.account, amount)?
                }
                (None, Some(memo)) => {
                    writeln!(self.writer, "    {}  ;{}", posting.account, memo)?
                }
                (None, None) => writeln!(self.writer, "    {}", posting.account)?,
            }
        }
        writeln!(self.writer)
    }
}
