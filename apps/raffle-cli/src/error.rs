use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV file error: {0}")]
    Csv(#[from] raffle_csvs::CsvError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Draw failed: {0}")]
    Engine(#[from] raffle_engine::EngineError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
