use thiserror::Error;

pub type Result<T> = std::result::Result<T, FuzzifyError>;

#[derive(Debug, Error)]
pub enum FuzzifyError {
    #[error("fuzzy variable '{key}' does not exist; available options: {}", format_options(.available))]
    NotFound { key: String, available: Vec<String> },
    #[error("no fuzzy variables yet, call fuzzify first")]
    NotFuzzified,
    #[error("input table has no rows or no columns")]
    EmptyTable,
    #[error("unsupported auto partition size {0}, expected one of 3, 5 or 7")]
    UnsupportedPartition(usize),
    #[error("invalid membership function for {feature};{modality}: {reason}")]
    InvalidMembership {
        feature: String,
        modality: String,
        reason: String,
    },
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("column '{column}' row {row}: '{value}' is not a finite number")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
    #[error("no input CSV: pass a path or set FUZZIFY_INPUT")]
    MissingInput,
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_options(available: &[String]) -> String {
    let quoted: Vec<String> = available.iter().map(|k| format!("'{k}'")).collect();
    format!("[{}]", quoted.join(", "))
}
