use std::rc::Rc;

use thiserror::Error;

use crate::model::builder::{Builder, TruncatedTransaction};
use crate::model::cast;
use crate::model::entities::Transaction;
use crate::model::error::ModelError;
use crate::syntax::error::SyntaxError;
use crate::syntax::file::File;
use crate::syntax::recognizer::Recognizer;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Truncated(#[from] TruncatedTransaction),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Streams transactions out of a QIF source, in file order. The iterator
/// ends permanently after the first error; transactions yielded before it
/// remain valid.
pub struct Parser<'a> {
    recognizer: Recognizer<'a>,
    builder: Builder,
    done: bool,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a Rc<File>) -> Parser<'a> {
        Parser {
            recognizer: Recognizer::new(s),
            builder: Builder::new(),
            done: false,
        }
    }

    fn advance(&mut self) -> Result<Option<Transaction>> {
        loop {
            let Some(record) = self.recognizer.next_record()? else {
                self.builder.finish()?;
                return Ok(None);
            };
            let record = cast::cast(&record)?;
            if let Some(transaction) = self.builder.feed(record) {
                return Ok(Some(transaction));
            }
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(transaction)) => Some(Ok(transaction)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use crate::model::entities::{Split, TransactionKind, TypedRecord};

    fn date_of(y: i32, m: u32, d: u32) -> TypedRecord {
        TypedRecord::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_two_transactions() {
        let f = File::mem(
            "D11/ 8'16\r\nU-107.88\nT-107.88\nPVERIZON\nLUtilities\n^\nD11/ 9'16\nU-1,570.73\nPChecking\nLVisa\n^",
        );
        let transactions = Parser::new(&f).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(2, transactions.len());
        assert!(transactions.iter().all(|t| t.records.len() > 1));
        assert_eq!(
            Transaction {
                kind: TransactionKind::Normal,
                records: vec![
                    date_of(2016, 11, 8),
                    TypedRecord::UnitAmount(Decimal::new(-10788, 2)),
                    TypedRecord::TotalAmount(Decimal::new(-10788, 2)),
                    TypedRecord::Payee("VERIZON".into()),
                    TypedRecord::Category("Utilities".into()),
                ],
            },
            transactions[0]
        );
        assert_eq!(
            Transaction {
                kind: TransactionKind::Normal,
                records: vec![
                    date_of(2016, 11, 9),
                    TypedRecord::UnitAmount(Decimal::new(-157073, 2)),
                    TypedRecord::Payee("Checking".into()),
                    TypedRecord::Category("Visa".into()),
                ],
            },
            transactions[1]
        );
    }

    #[test]
    fn test_split_transaction() {
        let f = File::mem(
            "!Type:Bank\nD11/ 8'16\nT-892.00\nPACME PROPERTY\nSRent\n$-850.00\nSUtilities:Electric\nEmonthly bill\n$-42.00\n^\n",
        );
        let transactions = Parser::new(&f).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(1, transactions.len());
        assert_eq!(TransactionKind::Split, transactions[0].kind);
        assert_eq!(
            vec![
                TypedRecord::Header(":Bank".into()),
                date_of(2016, 11, 8),
                TypedRecord::TotalAmount(Decimal::new(-89200, 2)),
                TypedRecord::Payee("ACME PROPERTY".into()),
                TypedRecord::Split(Split {
                    category: "Rent".into(),
                    amount: Decimal::new(-85000, 2),
                    memo: None,
                }),
                TypedRecord::Split(Split {
                    category: "Utilities:Electric".into(),
                    amount: Decimal::new(-4200, 2),
                    memo: Some("monthly bill".into()),
                }),
            ],
            transactions[0].records
        );
    }

    #[test]
    fn test_lexical_error_ends_the_sequence() {
        let f = File::mem("PVERIZON\n^\nQ^\nPAfter\n^\n");
        let mut parser = Parser::new(&f);
        let first = parser.next().unwrap().unwrap();
        assert_eq!(
            vec![TypedRecord::Payee("VERIZON".into())],
            first.records
        );
        let err = match parser.next() {
            Some(Err(ParseError::Syntax(e))) => e,
            o => panic!("expected a syntax error, got {:?}", o),
        };
        assert!(err.to_string().contains("Q^"));
        assert!(parser.next().is_none());
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_cast_error_ends_the_sequence() {
        let f = File::mem("D13/32'16\nPVERIZON\n^\n");
        let mut parser = Parser::new(&f);
        assert!(matches!(
            parser.next(),
            Some(Err(ParseError::Model(ModelError::InvalidDate(_))))
        ));
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_truncated_input() {
        let f = File::mem("D11/ 8'16\nPVERIZON\n");
        let mut parser = Parser::new(&f);
        assert_eq!(
            Some(Err(ParseError::Truncated(TruncatedTransaction {
                pending: 2
            }))),
            parser.next()
        );
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_empty_input() {
        let f = File::mem("");
        assert_eq!(0, Parser::new(&f).count());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let f = File::mem("D11/ 8'16\nT-107.88\nPVERIZON\n^\nSRent\n$-850.00\n^\n");
        let first = Parser::new(&f).collect::<Result<Vec<_>>>().unwrap();
        let second = Parser::new(&f).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(first, second);
    }
}
