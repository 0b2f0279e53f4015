use std::collections::HashMap;

use serde::Serialize;

use crate::core::AggregatorError;

/// A string argument the data source asks the host for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: &'static str,
    pub required: bool,
    pub default_value: Option<&'static str>,
}

impl Argument {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            default_value: None,
        }
    }

    pub const fn optional(name: &'static str, default_value: &'static str) -> Self {
        Self {
            name,
            required: false,
            default_value: Some(default_value),
        }
    }
}

/// Argument values as supplied by the host, keyed by argument name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentValues {
    values: HashMap<String, String>,
}

impl ArgumentValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Looks up `argument`, falling back to its default. Blank values count
    /// as absent.
    pub fn get(&self, argument: &Argument) -> Result<String, AggregatorError> {
        let supplied = self
            .values
            .get(argument.name)
            .filter(|value| !value.trim().is_empty());

        match (supplied, argument.default_value) {
            (Some(value), _) => Ok(value.clone()),
            (None, Some(default)) => Ok(default.to_string()),
            (None, None) if argument.required => {
                Err(AggregatorError::MissingArgument(argument.name.to_string()))
            }
            (None, None) => Ok(String::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: values
                .into_iter()
                .map(|value| Cell {
                    value: value.into(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub rows: Vec<Row>,
    pub has_next_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: Argument = Argument::required("Job name");
    const OPTIONAL: Argument = Argument::optional("Max days to search back", "7");

    #[test]
    fn test_get_supplied_value() {
        let values = ArgumentValues::new().with("Job name", "DailyKpi");
        assert_eq!(values.get(&REQUIRED), Ok("DailyKpi".to_string()));
    }

    #[test]
    fn test_get_missing_required() {
        let values = ArgumentValues::new();
        assert_eq!(
            values.get(&REQUIRED),
            Err(AggregatorError::MissingArgument("Job name".to_string()))
        );
    }

    #[test]
    fn test_get_blank_required_is_missing() {
        let values = ArgumentValues::new().with("Job name", "  ");
        assert!(matches!(
            values.get(&REQUIRED),
            Err(AggregatorError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_get_optional_default() {
        let values = ArgumentValues::new();
        assert_eq!(values.get(&OPTIONAL), Ok("7".to_string()));
    }

    #[test]
    fn test_row_from_values() {
        let row = Row::from_values(["a", "b"]);
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[1].value, "b");
    }
}
