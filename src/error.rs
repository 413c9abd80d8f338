use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} '{name}' already exists")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    pub fn not_found(kind: &'static str, name: &str) -> Self {
        TrackerError::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    pub fn duplicate(kind: &'static str, name: &str) -> Self {
        TrackerError::DuplicateName {
            kind,
            name: name.to_string(),
        }
    }
}
