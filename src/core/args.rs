use clap::Parser;
use log::kv::{ToValue, Value};

/// Resolve the latest data aggregator CSV and print it as a GQI page.
#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    #[arg(short, long)]
    pub config: Option<String>,
    /// Path to the aggregator results folder.
    #[arg(short, long)]
    pub root: Option<String>,
    /// Substring the aggregator job's file name must contain.
    #[arg(short, long)]
    pub job: Option<String>,
    /// How many days to search back, today included.
    #[arg(short, long)]
    pub max_days: Option<String>,
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}
