use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::entities::{Split, TypedRecord};
use super::error::ModelError;
use crate::syntax::cst::{self, Record, Rng, Year};

pub type Result<T> = std::result::Result<T, ModelError>;

/// Converts a recognized record into its typed form. Dates and amounts are
/// resolved or rejected; string-valued records are copied verbatim.
pub fn cast(record: &Record) -> Result<TypedRecord> {
    match record {
        Record::Header(v) => Ok(TypedRecord::Header(v.0.text().to_string())),
        Record::Date(d) => date(d),
        Record::TotalAmount(v) => Ok(TypedRecord::TotalAmount(amount(&v.0)?)),
        Record::UnitAmount(v) => Ok(TypedRecord::UnitAmount(amount(&v.0)?)),
        Record::Cleared(v) => Ok(TypedRecord::Cleared(v.0.text().to_string())),
        Record::Payee(v) => Ok(TypedRecord::Payee(v.0.text().to_string())),
        Record::Memo(v) => Ok(TypedRecord::Memo(v.0.text().to_string())),
        Record::Category(v) => Ok(TypedRecord::Category(v.0.text().to_string())),
        Record::Address(v) => Ok(TypedRecord::Address(v.0.text().to_string())),
        Record::Number(v) => Ok(TypedRecord::Number(v.0.text().to_string())),
        Record::Split(s) => split(s),
        Record::End => Ok(TypedRecord::End),
    }
}

fn date(d: &cst::Date) -> Result<TypedRecord> {
    let month = number(&d.month)?;
    let day = number(&d.day)?;
    let year = match &d.year {
        Year::Long(rng) => number(rng)? as i32,
        // Two-digit years pivot at 50.
        Year::Short(rng) => {
            let year = number(rng)? as i32;
            if year <= 50 {
                year + 2000
            } else {
                year + 1900
            }
        }
    };
    NaiveDate::from_ymd_opt(year, month, day)
        .map(TypedRecord::Date)
        .ok_or_else(|| ModelError::InvalidDate(d.range.clone()))
}

fn number(rng: &Rng) -> Result<u32> {
    rng.text()
        .trim_start()
        .parse()
        .map_err(|_| ModelError::InvalidDate(rng.clone()))
}

fn amount(rng: &Rng) -> Result<Decimal> {
    rng.text()
        .replace(',', "")
        .parse()
        .map_err(|_| ModelError::InvalidAmount(rng.clone()))
}

fn split(s: &cst::Split) -> Result<TypedRecord> {
    Ok(TypedRecord::Split(Split {
        category: s.category.text().to_string(),
        amount: amount(&s.amount)?,
        memo: s.memo.as_ref().map(|m| m.text().to_string()),
    }))
}
