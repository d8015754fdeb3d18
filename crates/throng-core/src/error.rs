use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThrongError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recording config: {0}")]
    InvalidConfig(String),

    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Invalid video data document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Movement data error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {line}, field {field}: not an integer coordinate: {value:?}")]
    Parse {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("Row {line}: odd coordinate field count ({count}), cannot pair x/y")]
    RaggedRow { line: usize, count: usize },

    #[error("Plot rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ThrongError>;
