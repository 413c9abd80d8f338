use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

use crate::db::{parse_amount, parse_date};
use crate::error::{Result, TrackerError};
use crate::models::expense::{Expense, ExpenseCategory};

fn read_category(row: &Row) -> rusqlite::Result<ExpenseCategory> {
    let budget: String = row.get(1)?;
    Ok(ExpenseCategory {
        name: row.get(0)?,
        budget: parse_amount(&budget)?,
    })
}

fn read_expense(row: &Row) -> rusqlite::Result<Expense> {
    let amount: String = row.get(2)?;
    let date_added: String = row.get(3)?;
    Ok(Expense {
        category: row.get(0)?,
        name: row.get(1)?,
        amount: parse_amount(&amount)?,
        date_added: parse_date(&date_added)?,
    })
}

pub fn add_category(conn: &Connection, category: &ExpenseCategory) -> Result<()> {
    conn.execute(
        "INSERT INTO expense_cats (name, budget) VALUES (?1, ?2)",
        params![category.name, category.budget.to_string()],
    )?;
    Ok(())
}

pub fn get_category(conn: &Connection, name: &str) -> Result<Option<ExpenseCategory>> {
    let mut stmt =
        conn.prepare("SELECT name, budget FROM expense_cats WHERE LOWER(name) = LOWER(?1)")?;
    let mut rows = stmt.query([name])?;
    match rows.next()? {
        Some(row) => Ok(Some(read_category(row)?)),
        None => Ok(None),
    }
}

pub fn get_all_categories(conn: &Connection) -> Result<Vec<ExpenseCategory>> {
    let mut stmt = conn.prepare("SELECT name, budget FROM expense_cats ORDER BY name ASC")?;
    let iter = stmt.query_map([], read_category)?;

    let mut categories = Vec::new();
    for category in iter {
        categories.push(category?);
    }
    Ok(categories)
}

pub fn set_budget(conn: &Connection, name: &str, budget: &Decimal) -> Result<()> {
    let rows = conn.execute(
        "UPDATE expense_cats SET budget = ?1 WHERE LOWER(name) = LOWER(?2)",
        params![budget.to_string(), name],
    )?;
    if rows == 0 {
        return Err(TrackerError::not_found("expense category", name));
    }
    Ok(())
}

/// Deletes a category together with every expense recorded against it, as a
/// single transaction.
pub fn delete_category_with_expenses(conn: &mut Connection, name: &str) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM expenses WHERE LOWER(category) = LOWER(?1)", [name])?;
    let rows = tx.execute("DELETE FROM expense_cats WHERE LOWER(name) = LOWER(?1)", [name])?;
    if rows == 0 {
        return Err(TrackerError::not_found("expense category", name));
    }
    tx.commit()?;
    Ok(())
}

pub fn add_expense(conn: &Connection, expense: &Expense) -> Result<()> {
    conn.execute(
        "INSERT INTO expenses (category, name, amount, date_added) VALUES (?1, ?2, ?3, ?4)",
        params![
            expense.category,
            expense.name,
            expense.amount.to_string(),
            expense.date_added.to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_expense(conn: &Connection, name: &str) -> Result<Option<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT category, name, amount, date_added FROM expenses WHERE LOWER(name) = LOWER(?1)",
    )?;
    let mut rows = stmt.query([name])?;
    match rows.next()? {
        Some(row) => Ok(Some(read_expense(row)?)),
        None => Ok(None),
    }
}

pub fn get_all_expenses(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT category, name, amount, date_added FROM expenses ORDER BY date_added ASC, name ASC",
    )?;
    let iter = stmt.query_map([], read_expense)?;

    let mut expenses = Vec::new();
    for expense in iter {
        expenses.push(expense?);
    }
    Ok(expenses)
}

pub fn get_expenses_by_category(conn: &Connection, category: &str) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT category, name, amount, date_added FROM expenses \
         WHERE LOWER(category) = LOWER(?1) ORDER BY date_added ASC, name ASC",
    )?;
    let iter = stmt.query_map([category], read_expense)?;

    let mut expenses = Vec::new();
    for expense in iter {
        expenses.push(expense?);
    }
    Ok(expenses)
}

pub fn update_expense(conn: &Connection, name: &str, updated: &Expense) -> Result<()> {
    let rows = conn.execute(
        "UPDATE expenses SET category = ?1, name = ?2, amount = ?3, date_added = ?4 \
         WHERE LOWER(name) = LOWER(?5)",
        params![
            updated.category,
            updated.name,
            updated.amount.to_string(),
            updated.date_added.to_string(),
            name,
        ],
    )?;
    if rows == 0 {
        return Err(TrackerError::not_found("expense", name));
    }
    Ok(())
}

pub fn delete_expense(conn: &Connection, name: &str) -> Result<()> {
    let rows = conn.execute("DELETE FROM expenses WHERE LOWER(name) = LOWER(?1)", [name])?;
    if rows == 0 {
        return Err(TrackerError::not_found("expense", name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use chrono::NaiveDate;

    fn test_expense(category: &str, name: &str, amount: Decimal) -> Expense {
        Expense::new(
            category.to_string(),
            name.to_string(),
            amount,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_add_and_get_category() {
        let conn = establish_test_connection().unwrap();
        add_category(&conn, &ExpenseCategory::new("food".to_string())).unwrap();

        let category = get_category(&conn, "food").unwrap().unwrap();
        assert_eq!(category.name, "food");
        assert_eq!(category.budget, Decimal::ZERO);
    }

    #[test]
    fn test_get_category_case_insensitive() {
        let conn = establish_test_connection().unwrap();
        add_category(&conn, &ExpenseCategory::new("food".to_string())).unwrap();

        assert!(get_category(&conn, "FOOD").unwrap().is_some());
    }

    #[test]
    fn test_set_budget_updates_value() {
        let conn = establish_test_connection().unwrap();
        add_category(&conn, &ExpenseCategory::new("food".to_string())).unwrap();

        set_budget(&conn, "food", &Decimal::new(10000, 2)).unwrap();

        let category = get_category(&conn, "food").unwrap().unwrap();
        assert_eq!(category.budget, Decimal::new(10000, 2));
    }

    #[test]
    fn test_set_budget_missing_category() {
        let conn = establish_test_connection().unwrap();
        let result = set_budget(&conn, "missing", &Decimal::ONE);
        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
    }

    #[test]
    fn test_delete_category_cascades_to_expenses() {
        let mut conn = establish_test_connection().unwrap();
        add_category(&conn, &ExpenseCategory::new("food".to_string())).unwrap();
        add_expense(&conn, &test_expense("food", "coffee", Decimal::new(350, 2))).unwrap();
        add_expense(&conn, &test_expense("food", "lunch", Decimal::new(1200, 2))).unwrap();

        delete_category_with_expenses(&mut conn, "food").unwrap();

        assert!(get_category(&conn, "food").unwrap().is_none());
        assert!(get_all_expenses(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_category_rolls_back() {
        let mut conn = establish_test_connection().unwrap();
        let result = delete_category_with_expenses(&mut conn, "missing");
        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
    }

    #[test]
    fn test_add_expense_duplicate_name() {
        let conn = establish_test_connection().unwrap();
        add_expense(&conn, &test_expense("food", "coffee", Decimal::ONE)).unwrap();

        let result = add_expense(&conn, &test_expense("food", "coffee", Decimal::ONE));
        assert!(matches!(result, Err(TrackerError::Storage(_))));
    }

    #[test]
    fn test_get_expenses_by_category() {
        let conn = establish_test_connection().unwrap();
        add_expense(&conn, &test_expense("food", "coffee", Decimal::ONE)).unwrap();
        add_expense(&conn, &test_expense("travel", "bus", Decimal::TWO)).unwrap();
        add_expense(&conn, &test_expense("food", "lunch", Decimal::TEN)).unwrap();

        let expenses = get_expenses_by_category(&conn, "Food").unwrap();
        assert_eq!(expenses.len(), 2);
        assert!(expenses.iter().all(|e| e.category == "food"));
    }

    #[test]
    fn test_update_expense_renames() {
        let conn = establish_test_connection().unwrap();
        add_expense(&conn, &test_expense("food", "coffee", Decimal::ONE)).unwrap();

        let updated = test_expense("food", "espresso", Decimal::TWO);
        update_expense(&conn, "coffee", &updated).unwrap();

        assert!(get_expense(&conn, "coffee").unwrap().is_none());
        let fetched = get_expense(&conn, "espresso").unwrap().unwrap();
        assert_eq!(fetched.amount, Decimal::TWO);
    }

    #[test]
    fn test_delete_expense_not_found() {
        let conn = establish_test_connection().unwrap();
        let result = delete_expense(&conn, "missing");
        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
    }
}
