use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),
}
