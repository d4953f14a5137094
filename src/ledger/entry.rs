use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::entities::{Transaction, TypedRecord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction has no date record")]
    MissingDate,
    #[error("transaction has no payee record")]
    MissingPayee,
    #[error("transaction without splits has no category record")]
    MissingCategory,
    #[error("transaction without splits has no amount record")]
    MissingAmount,
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub account: String,
    pub amount: Option<Decimal>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub payee: String,
    pub memo: Option<String>,
    pub postings: Vec<Posting>,
}

/// Maps parsed transactions onto Ledger entries booked against a single
/// asset account.
pub struct Mapper {
    account: String,
    separators: Regex,
}

impl Mapper {
    pub fn new(asset_account: &str) -> std::result::Result<Mapper, regex::Error> {
        Ok(Mapper {
            account: asset_account.to_string(),
            separators: Regex::new(r"[ ]{2,}|\t")?,
        })
    }

    /// QIF amounts are in source-account terms; a Ledger posting books them
    /// against the target account, so nonzero amounts change sign.
    fn flip(amount: Decimal) -> Decimal {
        if amount.is_zero() {
            amount
        } else {
            -amount
        }
    }

    /// Collapses hard separators in an account name, which Ledger would
    /// otherwise read as the account/amount boundary.
    fn account_name(&self, name: &str) -> String {
        self.separators.replace_all(name, " ").into_owned()
    }

    pub fn entry(&self, transaction: &Transaction) -> Result<Entry> {
        let mut date = None;
        let mut payee = None;
        let mut memo = None;
        let mut amount = None;
        let mut category = None;
        let mut postings = Vec::new();
        for record in &transaction.records {
            match record {
                TypedRecord::Date(d) => date = Some(*d),
                TypedRecord::Payee(p) => payee = Some(p.clone()),
                TypedRecord::Memo(m) => memo = Some(m.clone()),
                TypedRecord::TotalAmount(a) | TypedRecord::UnitAmount(a) => amount = Some(*a),
                TypedRecord::Category(c) => category = Some(c.clone()),
                TypedRecord::Split(s) => postings.push(Posting {
                    account: self.account_name(&s.category),
                    amount: Some(Self::flip(s.amount)),
                    memo: s.memo.clone(),
                }),
                _ => (),
            }
        }
        if postings.is_empty() {
            postings.push(Posting {
                account: self.account_name(&category.ok_or(LedgerError::MissingCategory)?),
                amount: Some(Self::flip(amount.ok_or(LedgerError::MissingAmount)?)),
                memo: None,
            });
        }
        postings.push(Posting {
            account: self.account.clone(),
            amount: None,
            memo: None,
        });
        Ok(Entry {
            date: date.ok_or(LedgerError::MissingDate)?,
            payee: payee.ok_or(LedgerError::MissingPayee)?,
            memo,
            postings,
        })
    }
}
