use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

use crate::db::parse_amount;
use crate::error::{Result, TrackerError};
use crate::models::goal::{Goal, GoalKind};

fn read_goal(row: &Row) -> rusqlite::Result<Goal> {
    let kind: String = row.get(1)?;
    let target: String = row.get(2)?;
    let progress: String = row.get(3)?;
    Ok(Goal {
        name: row.get(0)?,
        kind: GoalKind::from_str(&kind)
            .ok_or_else(|| rusqlite::Error::InvalidParameterName(format!("invalid goal kind '{kind}'")))?,
        target: parse_amount(&target)?,
        progress: parse_amount(&progress)?,
    })
}

pub fn add_goal(conn: &Connection, goal: &Goal) -> Result<()> {
    conn.execute(
        "INSERT INTO goals (name, kind, target, progress) VALUES (?1, ?2, ?3, ?4)",
        params![
            goal.name,
            goal.kind.as_str(),
            goal.target.to_string(),
            goal.progress.to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_goal(conn: &Connection, name: &str) -> Result<Option<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT name, kind, target, progress FROM goals WHERE LOWER(name) = LOWER(?1)",
    )?;
    let mut rows = stmt.query([name])?;
    match rows.next()? {
        Some(row) => Ok(Some(read_goal(row)?)),
        None => Ok(None),
    }
}

pub fn get_goals(conn: &Connection, kind: Option<GoalKind>) -> Result<Vec<Goal>> {
    let mut goals = Vec::new();
    match kind {
        Some(kind) => {
            let mut stmt = conn.prepare(
                "SELECT name, kind, target, progress FROM goals WHERE kind = ?1 ORDER BY name ASC",
            )?;
            let iter = stmt.query_map([kind.as_str()], read_goal)?;
            for goal in iter {
                goals.push(goal?);
            }
        }
        None => {
            let mut stmt = conn
                .prepare("SELECT name, kind, target, progress FROM goals ORDER BY name ASC")?;
            let iter = stmt.query_map([], read_goal)?;
            for goal in iter {
                goals.push(goal?);
            }
        }
    }
    Ok(goals)
}

pub fn update_goal(conn: &Connection, name: &str, updated: &Goal) -> Result<()> {
    let rows = conn.execute(
        "UPDATE goals SET name = ?1, kind = ?2, target = ?3, progress = ?4 \
         WHERE LOWER(name) = LOWER(?5)",
        params![
            updated.name,
            updated.kind.as_str(),
            updated.target.to_string(),
            updated.progress.to_string(),
            name,
        ],
    )?;
    if rows == 0 {
        return Err(TrackerError::not_found("goal", name));
    }
    Ok(())
}

/// Replaces only the progress field; name, kind, and target are untouched.
pub fn update_progress(conn: &Connection, name: &str, progress: &Decimal) -> Result<()> {
    let rows = conn.execute(
        "UPDATE goals SET progress = ?1 WHERE LOWER(name) = LOWER(?2)",
        params![progress.to_string(), name],
    )?;
    if rows == 0 {
        return Err(TrackerError::not_found("goal", name));
    }
    Ok(())
}

pub fn delete_goal(conn: &Connection, name: &str, kind: GoalKind) -> Result<()> {
    let rows = conn.execute(
        "DELETE FROM goals WHERE LOWER(name) = LOWER(?1) AND kind = ?2",
        params![name, kind.as_str()],
    )?;
    if rows == 0 {
        return Err(TrackerError::not_found("goal", name));
    }
    Ok(())
}
