//! Test and benchmark utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

use crate::discovery::partition_dir;

/// Number of columns for benchmarks
pub const BENCH_NUM_COLUMNS: usize = 10;

/// RNG seed for deterministic cell generation
pub const BENCH_RNG_SEED: u64 = 42;

/// A temporary aggregator results folder laid out as `YYYY/MM/DD`.
/// Dates are relative to a fixed `today`.
pub struct AggregatorTree {
    dir: TempDir,
    today: NaiveDate,
}

impl AggregatorTree {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            today,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Creates (if needed) and returns the directory for `today - days_back`.
    pub fn day_dir(&self, days_back: u64) -> PathBuf {
        let date = self.today.checked_sub_days(Days::new(days_back)).unwrap();
        let dir = partition_dir(self.root(), date);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes `content` to `name` on the given day, last modified `age` ago.
    pub fn write_file(&self, days_back: u64, name: &str, content: &str, age: Duration) -> PathBuf {
        let path = self.day_dir(days_back).join(name);
        fs::write(&path, content).unwrap();
        set_age(&path, age);
        path
    }
}

/// Sets the modification time of `path` to `age` before now.
pub fn set_age(path: &Path, age: Duration) {
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

/// Generate column names for benchmarks: col_0, col_1, ..., col_9
pub fn bench_column_names() -> Vec<String> {
    (0..BENCH_NUM_COLUMNS)
        .map(|i| format!("col_{}", i))
        .collect()
}

/// Generate a deterministic aggregator-style CSV: a header and `num_rows`
/// rows of random numbers, with a quoted field and an encoded entity every
/// few rows and an occasional short row.
pub fn bench_generate_csv(num_rows: usize) -> String {
    let mut rng = StdRng::seed_from_u64(BENCH_RNG_SEED);
    let mut out = bench_column_names().join(",");
    out.push('\n');

    for i in 0..num_rows {
        let width = if i % 97 == 0 {
            BENCH_NUM_COLUMNS / 2
        } else {
            BENCH_NUM_COLUMNS
        };
        let cells: Vec<String> = (0..width)
            .map(|c| match (i + c) % 13 {
                0 => format!("\"{}\"", rng.gen_range(0..1_000_000)),
                1 => format!("R&amp;D {}", rng.gen_range(0..100)),
                _ => rng.gen_range(0.0..1000.0f64).to_string(),
            })
            .collect();
        out.push_str(&cells.join(","));
        out.push_str("\t\n");
    }
    out
}

/// Set up a single-day tree holding one generated file named `<job>.csv`.
/// Returns (tree, file path) - keep the tree alive!
pub fn setup_benchmark_file(job: &str, num_rows: usize) -> (AggregatorTree, PathBuf) {
    let tree = AggregatorTree::new(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
    let path = tree.write_file(
        0,
        &format!("{}.csv", job),
        &bench_generate_csv(num_rows),
        Duration::ZERO,
    );
    (tree, path)
}
