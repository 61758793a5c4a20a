use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid major code {query:?}: at least 3 characters are required")]
    InvalidMajor { query: String },

    #[error("Duplicate student id: {0}")]
    DuplicateId(i32),

    #[error("Student not found: {0}")]
    RecordNotFound(i32),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
