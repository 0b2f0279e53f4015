use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{error, info, warn};

use crate::core::AggregatorError;

use super::line::split_line;
use super::table::Table;

/// Reads aggregator CSV output into a [`Table`].
///
/// Loading never fails: a missing file or a read error becomes a one-row
/// `Errors` table so the condition reaches the user as query output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLoader;

impl TableLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Table {
        let path = path.as_ref();
        if !path.is_file() {
            warn!("File does not exist: {}", path.display());
            return Table::errors(format!("File does not exist: {}", path.display()));
        }

        info!("Reading CSV file: {}", path.display());
        match read_table(path) {
            Ok(table) => {
                info!(
                    "Loaded {} rows x {} columns from {}",
                    table.num_rows(),
                    table.num_columns(),
                    path.display()
                );
                table
            }
            Err(e) => {
                error!("reading {}: {}", path.display(), e);
                Table::errors(format!("Failed to read file: {}: {}", path.display(), e))
            }
        }
    }
}

fn read_table(path: &Path) -> Result<Table, AggregatorError> {
    let text = read_text(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let mut lines = split_lines(text);
    let Some(header) = lines.next() else {
        return Ok(Table::default());
    };
    let columns = split_line(header);
    Ok(Table::new(columns, lines.map(split_line)))
}

/// Reads the whole file so the handle is closed before parsing.
/// Invalid UTF-8 is replaced rather than rejected.
fn read_text(path: &Path) -> Result<String, AggregatorError> {
    let file = File::open(path)
        .map_err(|e| AggregatorError::IoError(format!("opening {}: {}", path.display(), e)))?;
    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A final terminator does not
/// produce a trailing empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}
