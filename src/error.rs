use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Dataset has no launch records")]
    EmptyDataset,
    #[error("Invalid launch record at row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Invalid event on line {line}: {reason}")]
    InvalidEvent { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
