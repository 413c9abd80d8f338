pub mod connection;
pub mod expense_repository;
pub mod goal_repository;
pub mod income_repository;
pub mod store;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

// Amounts are stored as decimal strings and dates as ISO text, so row
// mapping surfaces parse failures as rusqlite errors.
pub(crate) fn parse_amount(raw: &str) -> rusqlite::Result<Decimal> {
    Decimal::from_str(raw).map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))
}

pub(crate) fn parse_date(raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))
}
