mod args;
mod error;
mod logger;

pub use args::CliArgs;
pub use error::AggregatorError;
pub use logger::setup_logging;
