use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Returns the `root/YYYY/MM/DD` directory holding a day's aggregator output.
pub fn partition_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.format("%Y").to_string())
        .join(date.format("%m").to_string())
        .join(date.format("%d").to_string())
}

/// Returns the placeholder path used when no day in the window had a match.
/// The loader turns it into an `Errors` table.
pub fn sentinel_path(root: &Path, contains: &str, today: NaiveDate) -> PathBuf {
    root.join(format!(
        "FileNotFound_{}_{}.csv",
        contains,
        today.format("%Y%m%d")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_dir_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let dir = partition_dir(Path::new("/data/results"), date);
        assert_eq!(dir, PathBuf::from("/data/results/2024/01/05"));
    }

    #[test]
    fn test_partition_dir_two_digit_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let dir = partition_dir(Path::new("root"), date);
        assert_eq!(dir, PathBuf::from("root/2023/12/31"));
    }

    #[test]
    fn test_sentinel_path() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let path = sentinel_path(Path::new("/data/results"), "DailyKpi", today);
        assert_eq!(
            path,
            PathBuf::from("/data/results/FileNotFound_DailyKpi_20240307.csv")
        );
    }
}
