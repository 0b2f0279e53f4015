use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AggregatorError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Missing required argument: '{0}'")]
    MissingArgument(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for AggregatorError {
    fn from(err: std::io::Error) -> Self {
        AggregatorError::IoError(err.to_string())
    }
}
