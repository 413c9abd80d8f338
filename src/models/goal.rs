use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    /// Progress is deposited explicitly by the user.
    Saving,
    /// Named after an income category; progress is derived from that
    /// category's income records.
    Income,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Saving => "saving",
            GoalKind::Income => "income",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "saving" => Some(GoalKind::Saving),
            "income" => Some(GoalKind::Income),
            _ => None,
        }
    }
}

/// Goal names are unique across both kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: String,
    pub kind: GoalKind,
    pub target: Decimal,
    pub progress: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_kind_round_trip() {
        assert_eq!(GoalKind::from_str("saving"), Some(GoalKind::Saving));
        assert_eq!(GoalKind::from_str("income"), Some(GoalKind::Income));
        assert_eq!(GoalKind::Saving.as_str(), "saving");
        assert_eq!(GoalKind::Income.as_str(), "income");
    }

    #[test]
    fn test_goal_kind_rejects_unknown() {
        assert_eq!(GoalKind::from_str("spending"), None);
    }
}
