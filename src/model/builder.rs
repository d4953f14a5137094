use std::mem;

use thiserror::Error;

use super::entities::{Transaction, TransactionKind, TypedRecord};

/// The input ended while records were still buffered, with no closing `^`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected end of input: {pending} record(s) without a closing '^'")]
pub struct TruncatedTransaction {
    pub pending: usize,
}

/// Accumulates typed records and emits a transaction for each terminator
/// record. The buffer is moved out on emission, never copied.
#[derive(Debug)]
pub struct Builder {
    records: Vec<TypedRecord>,
    kind: TransactionKind,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            records: Vec::new(),
            kind: TransactionKind::Normal,
        }
    }

    /// Buffers the record, or emits the completed transaction when the
    /// record is the terminator. The terminator itself is not buffered.
    pub fn feed(&mut self, record: TypedRecord) -> Option<Transaction> {
        match record {
            TypedRecord::End => {
                let records = mem::take(&mut self.records);
                let kind = mem::replace(&mut self.kind, TransactionKind::Normal);
                Some(Transaction { kind, records })
            }
            record => {
                if let TypedRecord::Split(_) = record {
                    self.kind = TransactionKind::Split;
                }
                self.records.push(record);
                None
            }
        }
    }

    /// Checks that no records are left buffered at the end of the input.
    pub fn finish(&self) -> Result<(), TruncatedTransaction> {
        if self.records.is_empty() {
            Ok(())
        } else {
            Err(TruncatedTransaction {
                pending: self.records.len(),
            })
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use crate::model::entities::Split;

    #[test]
    fn test_grouping_preserves_order() {
        let mut builder = Builder::new();
        assert_eq!(None, builder.feed(TypedRecord::Payee("VERIZON".into())));
        assert_eq!(
            None,
            builder.feed(TypedRecord::Category("Utilities".into()))
        );
        assert_eq!(
            Some(Transaction {
                kind: TransactionKind::Normal,
                records: vec![
                    TypedRecord::Payee("VERIZON".into()),
                    TypedRecord::Category("Utilities".into()),
                ],
            }),
            builder.feed(TypedRecord::End)
        );
        assert_eq!(Ok(()), builder.finish());
    }

    #[test]
    fn test_split_tags_the_transaction() {
        let mut builder = Builder::new();
        builder.feed(TypedRecord::Payee("LANDLORD".into()));
        builder.feed(TypedRecord::Split(Split {
            category: "Rent".into(),
            amount: Decimal::new(-85000, 2),
            memo: None,
        }));
        let transaction = builder.feed(TypedRecord::End).unwrap();
        assert_eq!(TransactionKind::Split, transaction.kind);
        assert_eq!(2, transaction.records.len());
    }

    #[test]
    fn test_buffer_resets_between_transactions() {
        let mut builder = Builder::new();
        builder.feed(TypedRecord::Split(Split {
            category: "Rent".into(),
            amount: Decimal::new(-85000, 2),
            memo: None,
        }));
        assert_eq!(
            TransactionKind::Split,
            builder.feed(TypedRecord::End).unwrap().kind
        );
        builder.feed(TypedRecord::Payee("VERIZON".into()));
        let second = builder.feed(TypedRecord::End).unwrap();
        assert_eq!(TransactionKind::Normal, second.kind);
        assert_eq!(vec![TypedRecord::Payee("VERIZON".into())], second.records);
    }

    #[test]
    fn test_empty_transaction() {
        let mut builder = Builder::new();
        assert_eq!(
            Some(Transaction {
                kind: TransactionKind::Normal,
                records: vec![],
            }),
            builder.feed(TypedRecord::End)
        );
    }

    #[test]
    fn test_finish_with_pending_records() {
        let mut builder = Builder::new();
        builder.feed(TypedRecord::Payee("VERIZON".into()));
        builder.feed(TypedRecord::Memo("left open".into()));
        assert_eq!(Err(TruncatedTransaction { pending: 2 }), builder.finish());
    }
}
