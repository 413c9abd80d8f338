pub mod budget;
pub mod expenses;
pub mod goals;
pub mod income;

use crate::error::{Result, TrackerError};

/// Names are stored lowercase and matched case-insensitively.
pub(crate) fn normalize_name(kind: &'static str, raw: &str) -> Result<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err(TrackerError::InvalidInput(format!("{kind} name cannot be empty")));
    }
    Ok(name)
}
