use super::types::Argument;

pub const DEFAULT_MAX_DAYS: u32 = 7;

pub const RESULTS_FOLDER: Argument = Argument::required("Path to Aggregator Results folder");
pub const JOB_NAME: Argument = Argument::required("Job name");
pub const MAX_DAYS_TO_SEARCH: Argument = Argument::optional("Max days to search back", "7");

/// Lenient parse of the look-back window; anything that is not a positive
/// integer becomes [`DEFAULT_MAX_DAYS`].
pub fn parse_max_days(value: &str) -> u32 {
    match value.trim().parse::<i32>() {
        Ok(days) if days > 0 => days.unsigned_abs(),
        _ => DEFAULT_MAX_DAYS,
    }
}
