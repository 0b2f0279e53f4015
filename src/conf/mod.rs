mod config;
mod source;

pub use config::Config;
pub use source::SourceConfig;
