use chrono::NaiveDate;
use rust_decimal::Decimal;

/// An expense category. A budget of zero means no budget has been set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCategory {
    pub name: String,
    pub budget: Decimal,
}

impl ExpenseCategory {
    pub fn new(name: String) -> Self {
        Self {
            name,
            budget: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub category: String,
    pub name: String,
    pub amount: Decimal,
    pub date_added: NaiveDate,
}

impl Expense {
    pub fn new(category: String, name: String, amount: Decimal, date_added: NaiveDate) -> Self {
        Self {
            category,
            name,
            amount,
            date_added,
        }
    }
}
