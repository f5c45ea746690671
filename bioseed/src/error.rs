use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("JSON Error")]
    JsonError(#[from] serde_json::Error),
    #[error("Baseline values must be positive, finite numbers")]
    InvalidBaseline,
    #[error("Duplicate biometric name in catalog")]
    DuplicateBiometric,
    #[error("Catalog contains no biometric types")]
    EmptyCatalog,
}
