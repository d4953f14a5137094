use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A record with its fields resolved to their semantic types. String-valued
/// records carry their text verbatim; for Header that is the sub-type
/// discriminator following `!Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedRecord {
    Header(String),
    Date(NaiveDate),
    TotalAmount(Decimal),
    UnitAmount(Decimal),
    Cleared(String),
    Payee(String),
    Memo(String),
    Category(String),
    Address(String),
    Number(String),
    Split(Split),
    End,
}

/// One allocation of a transaction's funds: target category, amount and an
/// optional memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub category: String,
    pub amount: Decimal,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Normal,
    Split,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TransactionKind::Normal => write!(f, "normal"),
            TransactionKind::Split => write!(f, "split"),
        }
    }
}

/// The records between two terminator lines, in file order. The terminator
/// itself is never part of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub records: Vec<TypedRecord>,
}
