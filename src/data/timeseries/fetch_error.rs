use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can go wrong between asking for a ticker and holding a clean price table.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider answered HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("provider error [{code}]: {description}")]
    Provider { code: String, description: String },
    #[error("no price rows returned for {0}")]
    NoData(String),
    #[error("duplicate date {0} in price history")]
    DuplicateDate(NaiveDate),
    #[error("could not read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV line {line}: {reason}")]
    CsvRow { line: u64, reason: String },
}
