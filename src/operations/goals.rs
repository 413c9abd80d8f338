use rust_decimal::Decimal;

use crate::db::store::LedgerStore;
use crate::error::{Result, TrackerError};
use crate::models::goal::{Goal, GoalKind};
use crate::operations::normalize_name;

/// Outcome of one resynchronisation pass. A failed category does not stop
/// the others from being processed, so failures accumulate here instead of
/// aborting the pass.
#[derive(Debug, Default)]
pub struct ResyncReport {
    pub updated: Vec<String>,
    pub failures: Vec<ResyncFailure>,
    /// Set when the pass could not even enumerate the categories.
    pub aborted: Option<TrackerError>,
}

#[derive(Debug)]
pub struct ResyncFailure {
    pub category: String,
    pub error: TrackerError,
}

impl ResyncReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.aborted.is_none()
    }

    pub fn aborted(error: TrackerError) -> Self {
        ResyncReport {
            aborted: Some(error),
            ..ResyncReport::default()
        }
    }
}

/// Re-establishes the income-goal invariant: for every income category with
/// a matching income-kind goal, progress equals the live sum of that
/// category's income records. Categories without a goal are skipped; no goal
/// is auto-created.
pub fn resync_income_goals<S: LedgerStore>(store: &mut S) -> Result<ResyncReport> {
    let categories = store.list_income_categories()?;

    let mut report = ResyncReport::default();
    for category in categories {
        match resync_category(store, &category.name) {
            Ok(Some(name)) => report.updated.push(name),
            Ok(None) => {}
            Err(error) => report.failures.push(ResyncFailure {
                category: category.name.clone(),
                error,
            }),
        }
    }
    Ok(report)
}

/// Returns the goal name when its progress was actually rewritten.
fn resync_category<S: LedgerStore>(store: &mut S, category: &str) -> Result<Option<String>> {
    let Some(goal) = store.get_goal(category)? else {
        return Ok(None);
    };
    // A saving goal may share a name with an income category; it is never
    // touched by the resync.
    if goal.kind != GoalKind::Income {
        return Ok(None);
    }

    let new_progress = store.category_income_total(category)?;
    if new_progress != goal.progress {
        store.update_goal_progress(&goal.name, new_progress)?;
        return Ok(Some(goal.name));
    }
    Ok(None)
}

/// Creates an income goal named after an existing income category. Unlike a
/// saving goal, its progress starts at the category's current income total.
pub fn create_income_goal<S: LedgerStore>(
    store: &mut S,
    category: &str,
    target: Decimal,
) -> Result<Goal> {
    let category = normalize_name("income category", category)?;
    if store.get_income_category(&category)?.is_none() {
        return Err(TrackerError::not_found("income category", &category));
    }
    // Goal names are unique across both kinds.
    if store.get_goal(&category)?.is_some() {
        return Err(TrackerError::duplicate("goal", &category));
    }

    let progress = store.category_income_total(&category)?;
    let goal = Goal {
        name: category,
        kind: GoalKind::Income,
        target: target.round_dp(2),
        progress,
    };
    store.add_goal(&goal)?;
    Ok(goal)
}

pub fn create_saving_goal<S: LedgerStore>(
    store: &mut S,
    name: &str,
    target: Decimal,
) -> Result<Goal> {
    let name = normalize_name("goal", name)?;
    if store.get_goal(&name)?.is_some() {
        return Err(TrackerError::duplicate("goal", &name));
    }

    let goal = Goal {
        name,
        kind: GoalKind::Saving,
        target: target.round_dp(2),
        progress: Decimal::ZERO,
    };
    store.add_goal(&goal)?;
    Ok(goal)
}

/// Deposits into a saving goal. Overshooting the target is allowed.
pub fn add_to_saving_goal<S: LedgerStore>(
    store: &mut S,
    name: &str,
    amount: Decimal,
) -> Result<Decimal> {
    let name = normalize_name("goal", name)?;
    let goal = store
        .get_goal(&name)?
        .ok_or_else(|| TrackerError::not_found("saving goal", &name))?;
    if goal.kind != GoalKind::Saving {
        return Err(TrackerError::InvalidInput(format!(
            "'{name}' is an income goal; its progress tracks the income ledger"
        )));
    }

    let new_progress = (goal.progress + amount).round_dp(2);
    store.update_goal_progress(&goal.name, new_progress)?;
    Ok(new_progress)
}

/// Fields left as None keep their current value.
#[derive(Debug, Default)]
pub struct GoalEdit {
    pub name: Option<String>,
    pub target: Option<Decimal>,
    pub progress: Option<Decimal>,
}

pub fn edit_goal<S: LedgerStore>(store: &mut S, name: &str, edit: GoalEdit) -> Result<Goal> {
    let name = normalize_name("goal", name)?;
    let current = store
        .get_goal(&name)?
        .ok_or_else(|| TrackerError::not_found("goal", &name))?;

    let mut updated = current.clone();
    if let Some(new_name) = edit.name {
        if current.kind == GoalKind::Income {
            return Err(TrackerError::InvalidInput(
                "an income goal is named after its category and cannot be renamed".to_string(),
            ));
        }
        let new_name = normalize_name("goal", &new_name)?;
        if new_name != current.name && store.get_goal(&new_name)?.is_some() {
            return Err(TrackerError::duplicate("goal", &new_name));
        }
        updated.name = new_name;
    }
    if let Some(target) = edit.target {
        updated.target = target.round_dp(2);
    }
    if let Some(progress) = edit.progress {
        if current.kind == GoalKind::Income {
            return Err(TrackerError::InvalidInput(
                "income goal progress is derived from the income ledger".to_string(),
            ));
        }
        updated.progress = progress.round_dp(2);
    }

    store.update_goal(&current.name, &updated)?;
    Ok(updated)
}

pub fn delete_goal<S: LedgerStore>(store: &mut S, name: &str, kind: GoalKind) -> Result<()> {
    let name = normalize_name("goal", name)?;
    store.delete_goal(&name, kind)
}
