use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::db::store::LedgerStore;
use crate::error::Result;
use crate::fmt::money;
use crate::models::expense::{Expense, ExpenseCategory};

/// How a category's spending compares to its budget. A budget of zero means
/// no budget has been set, which is distinct from the other outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetStatus {
    NoBudgetSet,
    NoExpensesYet,
    FullySpent,
    UnderBudget(Decimal),
    OverBudget(Decimal),
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetStatus::NoBudgetSet => write!(f, "You haven't added a budget yet."),
            BudgetStatus::NoExpensesYet => {
                write!(f, "You haven't added any expenses to this category.")
            }
            BudgetStatus::FullySpent => write!(f, "You've spent all your budget."),
            BudgetStatus::UnderBudget(diff) => {
                write!(f, "You are {} under your budget.", money(*diff))
            }
            BudgetStatus::OverBudget(diff) => {
                write!(f, "You are {} over your budget!", money(*diff))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStatus {
    pub category: String,
    pub budget: Decimal,
    pub total: Decimal,
    pub status: BudgetStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub name: String,
    pub amount: Decimal,
    pub date_added: NaiveDate,
}

/// Read-only projection of one category: its expense line items plus the
/// computed total and status.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub budget: Decimal,
    pub lines: Vec<BreakdownLine>,
    pub total: Decimal,
    pub status: BudgetStatus,
}

fn expense_total(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .map(|expense| expense.amount)
        .sum::<Decimal>()
        .round_dp(2)
}

/// First match wins: unset budget, empty category, spent exactly, under,
/// over. The difference is always the absolute gap between total and budget,
/// so the classification stays consistent for any decimal inputs.
fn classify(budget: Decimal, total: Decimal) -> BudgetStatus {
    let diff = (total - budget).abs().round_dp(2);
    if budget.is_zero() {
        BudgetStatus::NoBudgetSet
    } else if budget > Decimal::ZERO && total.is_zero() {
        BudgetStatus::NoExpensesYet
    } else if total == budget {
        BudgetStatus::FullySpent
    } else if total < budget {
        BudgetStatus::UnderBudget(diff)
    } else {
        BudgetStatus::OverBudget(diff)
    }
}

/// Pure function of (budget, expense amounts); no I/O.
pub fn compute_category_status(category: &ExpenseCategory, expenses: &[Expense]) -> CategoryStatus {
    let budget = category.budget.round_dp(2);
    let total = expense_total(expenses);
    CategoryStatus {
        category: category.name.clone(),
        budget,
        total,
        status: classify(budget, total),
    }
}

pub fn category_breakdown(category: &ExpenseCategory, expenses: &[Expense]) -> CategoryBreakdown {
    let status = compute_category_status(category, expenses);
    CategoryBreakdown {
        category: status.category,
        budget: status.budget,
        lines: expenses
            .iter()
            .map(|expense| BreakdownLine {
                name: expense.name.clone(),
                amount: expense.amount,
                date_added: expense.date_added,
            })
            .collect(),
        total: status.total,
        status: status.status,
    }
}

/// The budget-vs-actual view across every expense category.
pub fn budget_overview<S: LedgerStore>(store: &S) -> Result<Vec<CategoryStatus>> {
    let categories = store.list_expense_categories()?;
    let expenses = store.list_expenses(None)?;

    Ok(categories
        .iter()
        .map(|category| {
            let in_category: Vec<Expense> = expenses
                .iter()
                .filter(|expense| expense.category.eq_ignore_ascii_case(&category.name))
                .cloned()
                .collect();
            compute_category_status(category, &in_category)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn category(budget: &str) -> ExpenseCategory {
        ExpenseCategory {
            name: "food".to_string(),
            budget: dec(budget),
        }
    }

    fn expense(name: &str, amount: &str) -> Expense {
        Expense {
            category: "food".to_string(),
            name: name.to_string(),
            amount: dec(amount),
            date_added: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        }
    }

    #[test]
    fn test_no_budget_set_wins_over_everything() {
        let status = compute_category_status(&category("0"), &[expense("coffee", "12.00")]);
        assert_eq!(status.status, BudgetStatus::NoBudgetSet);
        assert_eq!(status.total, dec("12.00"));
    }

    #[test]
    fn test_no_expenses_yet() {
        let status = compute_category_status(&category("100.00"), &[]);
        assert_eq!(status.status, BudgetStatus::NoExpensesYet);
        assert_eq!(status.total, Decimal::ZERO);
    }

    #[test]
    fn test_fully_spent() {
        let status = compute_category_status(
            &category("100.00"),
            &[expense("coffee", "40.00"), expense("lunch", "60.00")],
        );
        assert_eq!(status.status, BudgetStatus::FullySpent);
    }

    #[test]
    fn test_under_budget_carries_remaining() {
        let status = compute_category_status(&category("100.00"), &[expense("coffee", "60.00")]);
        assert_eq!(status.status, BudgetStatus::UnderBudget(dec("40.00")));
    }

    #[test]
    fn test_over_budget_carries_overrun() {
        let status = compute_category_status(&category("100.00"), &[expense("rent", "140.00")]);
        assert_eq!(status.status, BudgetStatus::OverBudget(dec("40.00")));
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let cat = category("75.50");
        let expenses = [expense("coffee", "3.33"), expense("lunch", "12.34")];
        let first = compute_category_status(&cat, &expenses);
        let second = compute_category_status(&cat, &expenses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_budget_still_classified_by_absolute_diff() {
        // Not validated here; a negative budget is simply compared against
        // the total.
        let status = compute_category_status(&category("-50.00"), &[]);
        assert_eq!(status.status, BudgetStatus::OverBudget(dec("50.00")));

        let status = compute_category_status(&category("-50.00"), &[expense("refund", "-80.00")]);
        assert_eq!(status.status, BudgetStatus::UnderBudget(dec("30.00")));
    }

    #[test]
    fn test_total_accumulates_at_two_decimals() {
        let status = compute_category_status(
            &category("1.00"),
            &[expense("a", "0.333"), expense("b", "0.333"), expense("c", "0.334")],
        );
        assert_eq!(status.total, dec("1.00"));
        assert_eq!(status.status, BudgetStatus::FullySpent);
    }

    #[test]
    fn test_breakdown_lists_every_line() {
        let expenses = [expense("coffee", "3.50"), expense("lunch", "12.00")];
        let breakdown = category_breakdown(&category("20.00"), &expenses);

        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.lines[0].name, "coffee");
        assert_eq!(breakdown.total, dec("15.50"));
        assert_eq!(breakdown.status, BudgetStatus::UnderBudget(dec("4.50")));
    }

    #[test]
    fn test_status_comments_match_display() {
        assert_eq!(
            BudgetStatus::UnderBudget(dec("40.00")).to_string(),
            "You are 40.00 under your budget."
        );
        assert_eq!(
            BudgetStatus::OverBudget(dec("40.00")).to_string(),
            "You are 40.00 over your budget!"
        );
        assert_eq!(
            BudgetStatus::NoBudgetSet.to_string(),
            "You haven't added a budget yet."
        );
    }

    #[test]
    fn test_budget_overview_covers_every_category() {
        use crate::db::store::SqliteStore;
        use crate::operations::expenses;

        let mut store = SqliteStore::in_memory().unwrap();
        expenses::add_category(&mut store, "food").unwrap();
        expenses::add_category(&mut store, "travel").unwrap();
        expenses::set_category_budget(&mut store, "food", dec("50.00")).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        expenses::add_expense(&mut store, "food", "coffee", dec("3.50"), today).unwrap();

        let overview = budget_overview(&store).unwrap();
        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].category, "food");
        assert_eq!(overview[0].status, BudgetStatus::UnderBudget(dec("46.50")));
        assert_eq!(overview[1].status, BudgetStatus::NoBudgetSet);
    }
}
