use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct IncomeCategory {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Income {
    pub category: String,
    pub name: String,
    pub amount: Decimal,
    pub date_added: NaiveDate,
}

impl Income {
    pub fn new(category: String, name: String, amount: Decimal, date_added: NaiveDate) -> Self {
        Self {
            category,
            name,
            amount,
            date_added,
        }
    }
}
