use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::db::store::LedgerStore;
use crate::error::{Result, TrackerError};
use crate::models::income::{Income, IncomeCategory};
use crate::operations::goals::{ResyncReport, resync_income_goals};
use crate::operations::normalize_name;

/// Income mutations re-establish goal progress as a side effect. The
/// mutation stands even when the follow-up resync fails, so the resync
/// outcome is reported alongside the mutated value rather than as an error.
fn resync_after_mutation<S: LedgerStore>(store: &mut S) -> ResyncReport {
    match resync_income_goals(store) {
        Ok(report) => report,
        Err(error) => ResyncReport::aborted(error),
    }
}

pub fn add_category<S: LedgerStore>(store: &mut S, name: &str) -> Result<IncomeCategory> {
    let name = normalize_name("income category", name)?;
    if store.get_income_category(&name)?.is_some() {
        return Err(TrackerError::duplicate("income category", &name));
    }

    let category = IncomeCategory { name };
    store.add_income_category(&category)?;
    Ok(category)
}

/// Deletes a category, its income records, and its income goal (if any) as
/// one multi-step operation.
pub fn delete_category<S: LedgerStore>(store: &mut S, name: &str) -> Result<()> {
    let name = normalize_name("income category", name)?;
    store.delete_income_category(&name)
}

pub fn add_income<S: LedgerStore>(
    store: &mut S,
    category: &str,
    name: &str,
    amount: Decimal,
    today: NaiveDate,
) -> Result<(Income, ResyncReport)> {
    let category = normalize_name("income category", category)?;
    let name = normalize_name("income", name)?;

    if store.get_income_category(&category)?.is_none() {
        return Err(TrackerError::not_found("income category", &category));
    }
    if store.get_income(&name)?.is_some() {
        return Err(TrackerError::duplicate("income", &name));
    }

    let income = Income::new(category, name, amount.round_dp(2), today);
    store.add_income(&income)?;
    let resync = resync_after_mutation(store);
    Ok((income, resync))
}

/// Fields left as None keep their current value. Edited records are re-dated
/// to the day of the edit.
#[derive(Debug, Default)]
pub struct IncomeEdit {
    pub category: Option<String>,
    pub name: Option<String>,
    pub amount: Option<Decimal>,
}

pub fn edit_income<S: LedgerStore>(
    store: &mut S,
    name: &str,
    edit: IncomeEdit,
    today: NaiveDate,
) -> Result<(Income, ResyncReport)> {
    let name = normalize_name("income", name)?;
    let current = store
        .get_income(&name)?
        .ok_or_else(|| TrackerError::not_found("income", &name))?;

    let mut updated = current.clone();
    updated.date_added = today;

    if let Some(category) = edit.category {
        let category = normalize_name("income category", &category)?;
        if store.get_income_category(&category)?.is_none() {
            return Err(TrackerError::not_found("income category", &category));
        }
        updated.category = category;
    }
    if let Some(new_name) = edit.name {
        let new_name = normalize_name("income", &new_name)?;
        if new_name != current.name && store.get_income(&new_name)?.is_some() {
            return Err(TrackerError::duplicate("income", &new_name));
        }
        updated.name = new_name;
    }
    if let Some(amount) = edit.amount {
        updated.amount = amount.round_dp(2);
    }

    store.update_income(&current.name, &updated)?;
    let resync = resync_after_mutation(store);
    Ok((updated, resync))
}

pub fn delete_income<S: LedgerStore>(store: &mut S, name: &str) -> Result<ResyncReport> {
    let name = normalize_name("income", name)?;
    store.delete_income(&name)?;
    Ok(resync_after_mutation(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::SqliteStore;
    use crate::models::goal::GoalKind;
    use crate::operations::goals::{create_income_goal, create_saving_goal};
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn test_add_income_requires_category() {
        let mut store = SqliteStore::in_memory().unwrap();
        let result = add_income(&mut store, "salary", "january pay", dec("10.00"), today());
        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
    }

    #[test]
    fn test_add_income_resyncs_goal() {
        let mut store = SqliteStore::in_memory().unwrap();
        add_category(&mut store, "salary").unwrap();
        create_income_goal(&mut store, "salary", dec("100.00")).unwrap();

        let (income, resync) =
            add_income(&mut store, "salary", "january pay", dec("10.00"), today()).unwrap();
        assert_eq!(income.amount, dec("10.00"));
        assert!(resync.is_clean());
        assert_eq!(resync.updated, vec!["salary".to_string()]);

        let goal = store.get_goal("salary").unwrap().unwrap();
        assert_eq!(goal.progress, dec("10.00"));
    }

    #[test]
    fn test_delete_income_resyncs_goal() {
        let mut store = SqliteStore::in_memory().unwrap();
        add_category(&mut store, "salary").unwrap();
        add_income(&mut store, "salary", "january pay", dec("10.00"), today()).unwrap();
        add_income(&mut store, "salary", "bonus", dec("20.00"), today()).unwrap();
        create_income_goal(&mut store, "salary", dec("100.00")).unwrap();

        let resync = delete_income(&mut store, "bonus").unwrap();
        assert!(resync.is_clean());

        let goal = store.get_goal("salary").unwrap().unwrap();
        assert_eq!(goal.progress, dec("10.00"));
    }

    #[test]
    fn test_edit_income_moves_progress_between_goals() {
        let mut store = SqliteStore::in_memory().unwrap();
        add_category(&mut store, "salary").unwrap();
        add_category(&mut store, "gifts").unwrap();
        add_income(&mut store, "salary", "january pay", dec("10.00"), today()).unwrap();
        create_income_goal(&mut store, "salary", dec("100.00")).unwrap();
        create_income_goal(&mut store, "gifts", dec("50.00")).unwrap();

        let (_, resync) = edit_income(
            &mut store,
            "january pay",
            IncomeEdit {
                category: Some("gifts".to_string()),
                ..IncomeEdit::default()
            },
            today(),
        )
        .unwrap();
        assert!(resync.is_clean());

        assert_eq!(store.get_goal("salary").unwrap().unwrap().progress, Decimal::ZERO);
        assert_eq!(store.get_goal("gifts").unwrap().unwrap().progress, dec("10.00"));
    }

    #[test]
    fn test_adding_income_never_touches_saving_goals() {
        let mut store = SqliteStore::in_memory().unwrap();
        add_category(&mut store, "vacation").unwrap();
        create_saving_goal(&mut store, "vacation", dec("500.00")).unwrap();

        let (_, resync) =
            add_income(&mut store, "vacation", "side job", dec("75.00"), today()).unwrap();
        assert!(resync.is_clean());
        assert!(resync.updated.is_empty());

        let goal = store.get_goal("vacation").unwrap().unwrap();
        assert_eq!(goal.kind, GoalKind::Saving);
        assert_eq!(goal.progress, Decimal::ZERO);
    }

    #[test]
    fn test_delete_category_removes_goal_and_records() {
        let mut store = SqliteStore::in_memory().unwrap();
        add_category(&mut store, "salary").unwrap();
        add_income(&mut store, "salary", "january pay", dec("10.00"), today()).unwrap();
        create_income_goal(&mut store, "salary", dec("100.00")).unwrap();

        delete_category(&mut store, "salary").unwrap();

        assert!(store.get_income_category("salary").unwrap().is_none());
        assert!(store.list_income(None).unwrap().is_empty());
        assert!(store.get_goal("salary").unwrap().is_none());
    }

    #[test]
    fn test_income_names_unique() {
        let mut store = SqliteStore::in_memory().unwrap();
        add_category(&mut store, "salary").unwrap();
        add_income(&mut store, "salary", "january pay", dec("10.00"), today()).unwrap();

        let result = add_income(&mut store, "salary", "January Pay", dec("5.00"), today());
        assert!(matches!(result, Err(TrackerError::DuplicateName { .. })));
    }
}
