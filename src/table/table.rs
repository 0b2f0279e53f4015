use serde::Serialize;

/// Filler for cells a short row did not provide.
pub const AUTO_APPENDED: &str = "###auto appended###";

/// Single column of the table produced when the aggregator file is missing.
pub const ERRORS_COLUMN: &str = "Errors";

/// In-memory string table. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, truncating long rows and padding short ones with
    /// [`AUTO_APPENDED`].
    pub fn new(columns: Vec<String>, rows: impl IntoIterator<Item = Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, AUTO_APPENDED.to_string());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// One-column, one-row table carrying `message` under [`ERRORS_COLUMN`].
    pub fn errors(message: impl Into<String>) -> Self {
        Self {
            columns: vec![ERRORS_COLUMN.to_string()],
            rows: vec![vec![message.into()]],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
