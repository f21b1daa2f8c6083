use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Unknown metric series '{0}'. Expected one of: clients, services, categories")]
    UnknownSeries(String),
}
