use log::{debug, info};

use crate::core::AggregatorError;
use crate::discovery::{Clock, FileLocator, SearchSpec, SystemClock};
use crate::table::{Table, TableLoader};

use super::arguments::{JOB_NAME, MAX_DAYS_TO_SEARCH, RESULTS_FOLDER, parse_max_days};
use super::types::{Argument, ArgumentValues, Column, Page, Row};

/// Lifecycle the host drives: `on_init`, `on_arguments_processed`, then
/// `columns` and `next_page` until a page reports no successor, and finally
/// `on_destroy`.
pub trait DataSource {
    fn name(&self) -> &'static str;

    fn input_arguments(&self) -> Vec<Argument>;

    fn on_init(&mut self) {}

    fn on_arguments_processed(&mut self, args: &ArgumentValues) -> Result<(), AggregatorError>;

    fn columns(&self) -> Vec<Column>;

    fn next_page(&mut self) -> Page;

    fn on_destroy(&mut self) {}
}

/// Exposes the latest CSV of a data aggregator job as a string table.
#[derive(Debug)]
pub struct AggregatorCsvSource<C: Clock = SystemClock> {
    locator: FileLocator<C>,
    loader: TableLoader,
    table: Option<Table>,
}

impl AggregatorCsvSource<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for AggregatorCsvSource<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AggregatorCsvSource<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            locator: FileLocator::with_clock(clock),
            loader: TableLoader::new(),
            table: None,
        }
    }

    /// The table built by the last `on_arguments_processed`, if any.
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }
}

impl<C: Clock> DataSource for AggregatorCsvSource<C> {
    fn name(&self) -> &'static str {
        "General DataAggregator CSV Data source (,)"
    }

    fn input_arguments(&self) -> Vec<Argument> {
        vec![RESULTS_FOLDER, JOB_NAME, MAX_DAYS_TO_SEARCH]
    }

    fn on_init(&mut self) {
        debug!("{}: init", self.name());
    }

    fn on_arguments_processed(&mut self, args: &ArgumentValues) -> Result<(), AggregatorError> {
        self.table = None;
        let root = args.get(&RESULTS_FOLDER)?;
        let job = args.get(&JOB_NAME)?;
        let max_days = parse_max_days(&args.get(&MAX_DAYS_TO_SEARCH)?);

        let spec = SearchSpec::new(root, job, max_days)?;
        let path = self.locator.resolve(&spec);
        let table = self.loader.load(&path);
        info!(
            "{}: {} columns, {} rows for job '{}'",
            self.name(),
            table.num_columns(),
            table.num_rows(),
            spec.contains
        );
        self.table = Some(table);
        Ok(())
    }

    fn columns(&self) -> Vec<Column> {
        self.table
            .iter()
            .flat_map(|table| table.columns())
            .map(Column::string)
            .collect()
    }

    fn next_page(&mut self) -> Page {
        let rows = self
            .table
            .iter()
            .flat_map(|table| table.rows())
            .map(|row| Row::from_values(row.iter().cloned()))
            .collect();
        Page {
            rows,
            has_next_page: false,
        }
    }

    fn on_destroy(&mut self) {
        debug!("{}: destroy", self.name());
        self.table = None;
    }
}
