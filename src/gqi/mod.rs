//! Host-facing side of the data source: argument declarations, the paged
//! result types, and the lifecycle the host drives.

mod arguments;
mod source;
mod types;

pub use arguments::{
    DEFAULT_MAX_DAYS, JOB_NAME, MAX_DAYS_TO_SEARCH, RESULTS_FOLDER, parse_max_days,
};
pub use source::{AggregatorCsvSource, DataSource};
pub use types::{Argument, ArgumentValues, Cell, Column, ColumnType, Page, Row};
