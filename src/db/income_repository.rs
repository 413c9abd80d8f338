use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

use crate::db::{parse_amount, parse_date};
use crate::error::{Result, TrackerError};
use crate::models::income::{Income, IncomeCategory};

fn read_income(row: &Row) -> rusqlite::Result<Income> {
    let amount: String = row.get(2)?;
    let date_added: String = row.get(3)?;
    Ok(Income {
        category: row.get(0)?,
        name: row.get(1)?,
        amount: parse_amount(&amount)?,
        date_added: parse_date(&date_added)?,
    })
}

pub fn add_category(conn: &Connection, category: &IncomeCategory) -> Result<()> {
    conn.execute("INSERT INTO income_cats (name) VALUES (?1)", [&category.name])?;
    Ok(())
}

pub fn get_category(conn: &Connection, name: &str) -> Result<Option<IncomeCategory>> {
    let mut stmt = conn.prepare("SELECT name FROM income_cats WHERE LOWER(name) = LOWER(?1)")?;
    let mut rows = stmt.query([name])?;
    match rows.next()? {
        Some(row) => Ok(Some(IncomeCategory { name: row.get(0)? })),
        None => Ok(None),
    }
}

pub fn get_all_categories(conn: &Connection) -> Result<Vec<IncomeCategory>> {
    let mut stmt = conn.prepare("SELECT name FROM income_cats ORDER BY name ASC")?;
    let iter = stmt.query_map([], |row| Ok(IncomeCategory { name: row.get(0)? }))?;

    let mut categories = Vec::new();
    for category in iter {
        categories.push(category?);
    }
    Ok(categories)
}

/// Deletes a category, its income records, and any income-kind goal keyed by
/// the category name, as a single transaction.
pub fn delete_category_cascade(conn: &mut Connection, name: &str) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM income WHERE LOWER(category) = LOWER(?1)", [name])?;
    tx.execute(
        "DELETE FROM goals WHERE LOWER(name) = LOWER(?1) AND kind = 'income'",
        [name],
    )?;
    let rows = tx.execute("DELETE FROM income_cats WHERE LOWER(name) = LOWER(?1)", [name])?;
    if rows == 0 {
        return Err(TrackerError::not_found("income category", name));
    }
    tx.commit()?;
    Ok(())
}

pub fn add_income(conn: &Connection, income: &Income) -> Result<()> {
    conn.execute(
        "INSERT INTO income (category, name, amount, date_added) VALUES (?1, ?2, ?3, ?4)",
        params![
            income.category,
            income.name,
            income.amount.to_string(),
            income.date_added.to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_income(conn: &Connection, name: &str) -> Result<Option<Income>> {
    let mut stmt = conn.prepare(
        "SELECT category, name, amount, date_added FROM income WHERE LOWER(name) = LOWER(?1)",
    )?;
    let mut rows = stmt.query([name])?;
    match rows.next()? {
        Some(row) => Ok(Some(read_income(row)?)),
        None => Ok(None),
    }
}

pub fn get_all_income(conn: &Connection) -> Result<Vec<Income>> {
    let mut stmt = conn.prepare(
        "SELECT category, name, amount, date_added FROM income ORDER BY date_added ASC, name ASC",
    )?;
    let iter = stmt.query_map([], read_income)?;

    let mut records = Vec::new();
    for income in iter {
        records.push(income?);
    }
    Ok(records)
}

pub fn get_income_by_category(conn: &Connection, category: &str) -> Result<Vec<Income>> {
    let mut stmt = conn.prepare(
        "SELECT category, name, amount, date_added FROM income \
         WHERE LOWER(category) = LOWER(?1) ORDER BY date_added ASC, name ASC",
    )?;
    let iter = stmt.query_map([category], read_income)?;

    let mut records = Vec::new();
    for income in iter {
        records.push(income?);
    }
    Ok(records)
}

/// Sums income amounts in Rust rather than SQL so decimal precision is kept.
pub fn category_total(conn: &Connection, category: &str) -> Result<Decimal> {
    let mut stmt =
        conn.prepare("SELECT amount FROM income WHERE LOWER(category) = LOWER(?1)")?;
    let iter = stmt.query_map([category], |row| row.get::<_, String>(0))?;

    let mut total = Decimal::ZERO;
    for raw in iter {
        let raw = raw?;
        total += parse_amount(&raw)?;
    }
    Ok(total.round_dp(2))
}

pub fn update_income(conn: &Connection, name: &str, updated: &Income) -> Result<()> {
    let rows = conn.execute(
        "UPDATE income SET category = ?1, name = ?2, amount = ?3, date_added = ?4 \
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
        return Err(TrackerError::not_found("income", name));
    }
    Ok(())
}

pub fn delete_income(conn: &Connection, name: &str) -> Result<()> {
    let rows = conn.execute("DELETE FROM income WHERE LOWER(name) = LOWER(?1)", [name])?;
    if rows == 0 {
        return Err(TrackerError::not_found("income", name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::db::goal_repository;
    use crate::models::goal::{Goal, GoalKind};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn test_income(category: &str, name: &str, amount: &str) -> Income {
        Income::new(
            category.to_string(),
            name.to_string(),
            Decimal::from_str(amount).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        )
    }

    #[test]
    fn test_category_total_sums_amounts() {
        let conn = establish_test_connection().unwrap();
        add_income(&conn, &test_income("salary", "january pay", "10.00")).unwrap();
        add_income(&conn, &test_income("salary", "bonus", "20.00")).unwrap();
        add_income(&conn, &test_income("salary", "overtime", "5.50")).unwrap();
        add_income(&conn, &test_income("gifts", "birthday", "100.00")).unwrap();

        let total = category_total(&conn, "salary").unwrap();
        assert_eq!(total, Decimal::from_str("35.50").unwrap());
    }

    #[test]
    fn test_category_total_empty_category() {
        let conn = establish_test_connection().unwrap();
        assert_eq!(category_total(&conn, "salary").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_delete_category_cascade_removes_records_and_goal() {
        let mut conn = establish_test_connection().unwrap();
        add_category(&conn, &IncomeCategory { name: "salary".to_string() }).unwrap();
        add_income(&conn, &test_income("salary", "january pay", "10.00")).unwrap();
        goal_repository::add_goal(
            &conn,
            &Goal {
                name: "salary".to_string(),
                kind: GoalKind::Income,
                target: Decimal::ONE_HUNDRED,
                progress: Decimal::TEN,
            },
        )
        .unwrap();

        delete_category_cascade(&mut conn, "salary").unwrap();

        assert!(get_category(&conn, "salary").unwrap().is_none());
        assert!(get_all_income(&conn).unwrap().is_empty());
        assert!(goal_repository::get_goal(&conn, "salary").unwrap().is_none());
    }

    #[test]
    fn test_delete_category_cascade_keeps_saving_goal_with_same_name() {
        let mut conn = establish_test_connection().unwrap();
        add_category(&conn, &IncomeCategory { name: "salary".to_string() }).unwrap();
        goal_repository::add_goal(
            &conn,
            &Goal {
                name: "salary".to_string(),
                kind: GoalKind::Saving,
                target: Decimal::ONE_HUNDRED,
                progress: Decimal::ZERO,
            },
        )
        .unwrap();

        delete_category_cascade(&mut conn, "salary").unwrap();

        assert!(goal_repository::get_goal(&conn, "salary").unwrap().is_some());
    }

    #[test]
    fn test_update_income_moves_category() {
        let conn = establish_test_connection().unwrap();
        add_income(&conn, &test_income("salary", "january pay", "10.00")).unwrap();

        let updated = test_income("gifts", "january pay", "10.00");
        update_income(&conn, "january pay", &updated).unwrap();

        assert_eq!(category_total(&conn, "salary").unwrap(), Decimal::ZERO);
        assert_eq!(
            category_total(&conn, "gifts").unwrap(),
            Decimal::from_str("10.00").unwrap()
        );
    }

    #[test]
    fn test_delete_income_not_found() {
        let conn = establish_test_connection().unwrap();
        let result = delete_income(&conn, "missing");
        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
    }
}
