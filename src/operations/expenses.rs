use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::db::store::LedgerStore;
use crate::error::{Result, TrackerError};
use crate::models::expense::{Expense, ExpenseCategory};
use crate::operations::normalize_name;

pub fn add_category<S: LedgerStore>(store: &mut S, name: &str) -> Result<ExpenseCategory> {
    let name = normalize_name("expense category", name)?;
    if store.get_expense_category(&name)?.is_some() {
        return Err(TrackerError::duplicate("expense category", &name));
    }

    let category = ExpenseCategory::new(name);
    store.add_expense_category(&category)?;
    Ok(category)
}

/// Deletes a category and every expense in it as one multi-step operation.
pub fn delete_category<S: LedgerStore>(store: &mut S, name: &str) -> Result<()> {
    let name = normalize_name("expense category", name)?;
    store.delete_expense_category(&name)
}

pub fn set_category_budget<S: LedgerStore>(
    store: &mut S,
    name: &str,
    budget: Decimal,
) -> Result<()> {
    let name = normalize_name("expense category", name)?;
    store.set_category_budget(&name, budget.round_dp(2))
}

pub fn add_expense<S: LedgerStore>(
    store: &mut S,
    category: &str,
    name: &str,
    amount: Decimal,
    today: NaiveDate,
) -> Result<Expense> {
    let category = normalize_name("expense category", category)?;
    let name = normalize_name("expense", name)?;

    if store.get_expense_category(&category)?.is_none() {
        return Err(TrackerError::not_found("expense category", &category));
    }
    if store.get_expense(&name)?.is_some() {
        return Err(TrackerError::duplicate("expense", &name));
    }
    if amount <= Decimal::ZERO {
        return Err(TrackerError::InvalidInput(
            "expense amount must be greater than zero".to_string(),
        ));
    }

    let expense = Expense::new(category, name, amount.round_dp(2), today);
    store.add_expense(&expense)?;
    Ok(expense)
}

/// Fields left as None keep their current value. Edited expenses are
/// re-dated to the day of the edit.
#[derive(Debug, Default)]
pub struct ExpenseEdit {
    pub category: Option<String>,
    pub name: Option<String>,
    pub amount: Option<Decimal>,
}

pub fn edit_expense<S: LedgerStore>(
    store: &mut S,
    name: &str,
    edit: ExpenseEdit,
    today: NaiveDate,
) -> Result<Expense> {
    let name = normalize_name("expense", name)?;
    let current = store
        .get_expense(&name)?
        .ok_or_else(|| TrackerError::not_found("expense", &name))?;

    let mut updated = current.clone();
    updated.date_added = today;

    if let Some(category) = edit.category {
        let category = normalize_name("expense category", &category)?;
        if store.get_expense_category(&category)?.is_none() {
            return Err(TrackerError::not_found("expense category", &category));
        }
        updated.category = category;
    }
    if let Some(new_name) = edit.name {
        let new_name = normalize_name("expense", &new_name)?;
        if new_name != current.name && store.get_expense(&new_name)?.is_some() {
            return Err(TrackerError::duplicate("expense", &new_name));
        }
        updated.name = new_name;
    }
    if let Some(amount) = edit.amount {
        if amount <= Decimal::ZERO {
            return Err(TrackerError::InvalidInput(
                "expense amount must be greater than zero".to_string(),
            ));
        }
        updated.amount = amount.round_dp(2);
    }

    store.update_expense(&current.name, &updated)?;
    Ok(updated)
}

pub fn delete_expense<S: LedgerStore>(store: &mut S, name: &str) -> Result<()> {
    let name = normalize_name("expense", name)?;
    store.delete_expense(&name)
}
