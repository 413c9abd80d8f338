use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::db::{expense_repository, goal_repository, income_repository};
use crate::error::Result;
use crate::models::expense::{Expense, ExpenseCategory};
use crate::models::goal::{Goal, GoalKind};
use crate::models::income::{Income, IncomeCategory};

/// The capability set the aggregation and goal-sync operations are written
/// against. Keeping it a trait lets tests substitute a misbehaving store.
pub trait LedgerStore {
    fn list_expense_categories(&self) -> Result<Vec<ExpenseCategory>>;
    fn get_expense_category(&self, name: &str) -> Result<Option<ExpenseCategory>>;
    fn add_expense_category(&mut self, category: &ExpenseCategory) -> Result<()>;
    fn set_category_budget(&mut self, name: &str, budget: Decimal) -> Result<()>;
    fn delete_expense_category(&mut self, name: &str) -> Result<()>;

    fn list_expenses(&self, category: Option<&str>) -> Result<Vec<Expense>>;
    fn get_expense(&self, name: &str) -> Result<Option<Expense>>;
    fn add_expense(&mut self, expense: &Expense) -> Result<()>;
    fn update_expense(&mut self, name: &str, updated: &Expense) -> Result<()>;
    fn delete_expense(&mut self, name: &str) -> Result<()>;

    fn list_income_categories(&self) -> Result<Vec<IncomeCategory>>;
    fn get_income_category(&self, name: &str) -> Result<Option<IncomeCategory>>;
    fn add_income_category(&mut self, category: &IncomeCategory) -> Result<()>;
    fn delete_income_category(&mut self, name: &str) -> Result<()>;

    fn list_income(&self, category: Option<&str>) -> Result<Vec<Income>>;
    fn get_income(&self, name: &str) -> Result<Option<Income>>;
    fn add_income(&mut self, income: &Income) -> Result<()>;
    fn update_income(&mut self, name: &str, updated: &Income) -> Result<()>;
    fn delete_income(&mut self, name: &str) -> Result<()>;
    fn category_income_total(&self, category: &str) -> Result<Decimal>;

    fn list_goals(&self, kind: Option<GoalKind>) -> Result<Vec<Goal>>;
    fn get_goal(&self, name: &str) -> Result<Option<Goal>>;
    fn add_goal(&mut self, goal: &Goal) -> Result<()>;
    fn update_goal(&mut self, name: &str, updated: &Goal) -> Result<()>;
    fn update_goal_progress(&mut self, name: &str, progress: Decimal) -> Result<()>;
    fn delete_goal(&mut self, name: &str, kind: GoalKind) -> Result<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(crate::db::connection::establish_test_connection()?))
    }
}

impl LedgerStore for SqliteStore {
    fn list_expense_categories(&self) -> Result<Vec<ExpenseCategory>> {
        expense_repository::get_all_categories(&self.conn)
    }

    fn get_expense_category(&self, name: &str) -> Result<Option<ExpenseCategory>> {
        expense_repository::get_category(&self.conn, name)
    }

    fn add_expense_category(&mut self, category: &ExpenseCategory) -> Result<()> {
        expense_repository::add_category(&self.conn, category)
    }

    fn set_category_budget(&mut self, name: &str, budget: Decimal) -> Result<()> {
        expense_repository::set_budget(&self.conn, name, &budget)
    }

    fn delete_expense_category(&mut self, name: &str) -> Result<()> {
        expense_repository::delete_category_with_expenses(&mut self.conn, name)
    }

    fn list_expenses(&self, category: Option<&str>) -> Result<Vec<Expense>> {
        match category {
            Some(category) => expense_repository::get_expenses_by_category(&self.conn, category),
            None => expense_repository::get_all_expenses(&self.conn),
        }
    }

    fn get_expense(&self, name: &str) -> Result<Option<Expense>> {
        expense_repository::get_expense(&self.conn, name)
    }

    fn add_expense(&mut self, expense: &Expense) -> Result<()> {
        expense_repository::add_expense(&self.conn, expense)
    }

    fn update_expense(&mut self, name: &str, updated: &Expense) -> Result<()> {
        expense_repository::update_expense(&self.conn, name, updated)
    }

    fn delete_expense(&mut self, name: &str) -> Result<()> {
        expense_repository::delete_expense(&self.conn, name)
    }

    fn list_income_categories(&self) -> Result<Vec<IncomeCategory>> {
        income_repository::get_all_categories(&self.conn)
    }

    fn get_income_category(&self, name: &str) -> Result<Option<IncomeCategory>> {
        income_repository::get_category(&self.conn, name)
    }

    fn add_income_category(&mut self, category: &IncomeCategory) -> Result<()> {
        income_repository::add_category(&self.conn, category)
    }

    fn delete_income_category(&mut self, name: &str) -> Result<()> {
        income_repository::delete_category_cascade(&mut self.conn, name)
    }

    fn list_income(&self, category: Option<&str>) -> Result<Vec<Income>> {
        match category {
            Some(category) => income_repository::get_income_by_category(&self.conn, category),
            None => income_repository::get_all_income(&self.conn),
        }
    }

    fn get_income(&self, name: &str) -> Result<Option<Income>> {
        income_repository::get_income(&self.conn, name)
    }

    fn add_income(&mut self, income: &Income) -> Result<()> {
        income_repository::add_income(&self.conn, income)
    }

    fn update_income(&mut self, name: &str, updated: &Income) -> Result<()> {
        income_repository::update_income(&self.conn, name, updated)
    }

    fn delete_income(&mut self, name: &str) -> Result<()> {
        income_repository::delete_income(&self.conn, name)
    }

    fn category_income_total(&self, category: &str) -> Result<Decimal> {
        income_repository::category_total(&self.conn, category)
    }

    fn list_goals(&self, kind: Option<GoalKind>) -> Result<Vec<Goal>> {
        goal_repository::get_goals(&self.conn, kind)
    }

    fn get_goal(&self, name: &str) -> Result<Option<Goal>> {
        goal_repository::get_goal(&self.conn, name)
    }

    fn add_goal(&mut self, goal: &Goal) -> Result<()> {
        goal_repository::add_goal(&self.conn, goal)
    }

    fn update_goal(&mut self, name: &str, updated: &Goal) -> Result<()> {
        goal_repository::update_goal(&self.conn, name, updated)
    }

    fn update_goal_progress(&mut self, name: &str, progress: Decimal) -> Result<()> {
        goal_repository::update_progress(&self.conn, name, &progress)
    }

    fn delete_goal(&mut self, name: &str, kind: GoalKind) -> Result<()> {
        goal_repository::delete_goal(&self.conn, name, kind)
    }
}
