use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Days;
use log::{debug, info, warn};

use crate::core::AggregatorError;

use super::clock::{Clock, SystemClock};
use super::partition::{partition_dir, sentinel_path};

/// Longest look-back window; larger requests are clamped to it.
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// What to look for, built once per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    pub root: PathBuf,
    pub contains: String,
    pub max_days_back: u32,
}

impl SearchSpec {
    pub fn new(
        root: impl Into<PathBuf>,
        contains: impl Into<String>,
        max_days_back: u32,
    ) -> Result<Self, AggregatorError> {
        if max_days_back == 0 {
            return Err(AggregatorError::InvalidArgument(
                "max days back must be positive".to_string(),
            ));
        }
        if max_days_back > MAX_WINDOW_DAYS {
            warn!(
                "max days back {} exceeds {}, clamping",
                max_days_back, MAX_WINDOW_DAYS
            );
        }
        Ok(Self {
            root: root.into(),
            contains: contains.into(),
            max_days_back: max_days_back.min(MAX_WINDOW_DAYS),
        })
    }
}

struct Candidate {
    name: String,
    path: PathBuf,
    modified: SystemTime,
}

impl Candidate {
    /// Newest first; equal timestamps fall back to the smaller file name.
    fn rank(&self, other: &Self) -> Ordering {
        self.modified
            .cmp(&other.modified)
            .then_with(|| other.name.cmp(&self.name))
    }
}

/// Walks `root/YYYY/MM/DD` partitions backward from today looking for the
/// latest file produced by an aggregator job.
#[derive(Debug, Clone, Default)]
pub struct FileLocator<C: Clock = SystemClock> {
    clock: C,
}

impl FileLocator<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> FileLocator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the newest matching file from the most recent day that has one,
    /// or a sentinel path when the whole window is empty. Never fails.
    pub fn resolve(&self, spec: &SearchSpec) -> PathBuf {
        let today = self.clock.today();

        for days_back in 0..spec.max_days_back {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(days_back))) else {
                break;
            };
            let dir = partition_dir(&spec.root, date);
            if !dir.is_dir() {
                debug!("No partition directory {}, skipping", dir.display());
                continue;
            }

            if let Some(found) = newest_match(&dir, &spec.contains) {
                info!(
                    "Resolved '{}' to {} ({} day(s) back)",
                    spec.contains,
                    found.display(),
                    days_back
                );
                return found;
            }
            debug!("No file containing '{}' in {}", spec.contains, dir.display());
        }

        let fallback = sentinel_path(&spec.root, &spec.contains, today);
        warn!(
            "No file containing '{}' under {} within {} day(s), using {}",
            spec.contains,
            spec.root.display(),
            spec.max_days_back,
            fallback.display()
        );
        fallback
    }
}

/// Newest regular file directly inside `dir` whose name contains `contains`.
fn newest_match(dir: &Path, contains: &str) -> Option<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("reading directory {}: {}", dir.display(), e);
            return None;
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("reading entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.contains(contains) {
                return None;
            }
            let path = entry.path();
            let metadata = match std::fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("reading metadata for {}: {}", path.display(), e);
                    return None;
                }
            };
            if !metadata.is_file() {
                return None;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            Some(Candidate {
                name,
                path,
                modified,
            })
        })
        .max_by(Candidate::rank)
        .map(|candidate| candidate.path)
}
