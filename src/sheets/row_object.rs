// src/sheets/row_object.rs

use serde_json::Value;

use super::codec;
use super::error::{UpdateError, UpdateResult};

/// Member of a row element that carries its relative index instead of a column value.
pub const ROW_INDEX_KEY: &str = "rowIndex";

/// One logical sheet row: column name -> text value in insertion order,
/// tagged with its 0-based position relative to the row below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowObject {
    relative_index: usize,
    values: Vec<(String, String)>,
}

impl RowObject {
    pub fn new(relative_index: usize, values: Vec<(String, String)>) -> Self {
        Self {
            relative_index,
            values,
        }
    }

    /// Build a row from one element of a JSON row array.
    ///
    /// An explicit `rowIndex` member wins over the array position and is not
    /// kept as a column.
    pub fn from_json(element: &Value, position: usize) -> UpdateResult<Self> {
        let mut values = codec::to_flat_map(element, position)?;
        let mut relative_index = position;

        if let Some(slot) = values.iter().position(|(k, _)| k == ROW_INDEX_KEY) {
            let (_, raw) = values.remove(slot);
            relative_index = raw
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(|index| usize::try_from(index).ok())
                .ok_or_else(|| {
                    UpdateError::Parse(format!(
                        "Row at position {} has an invalid {} '{}'",
                        position, ROW_INDEX_KEY, raw
                    ))
                })?;
        }

        Ok(Self::new(relative_index, values))
    }

    pub fn relative_index(&self) -> usize {
        self.relative_index
    }

    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.values.iter().any(|(k, _)| k == column)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.values.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Overwrite an existing column in place. Unknown columns are left alone
    /// and reported with `false`.
    pub fn overwrite_existing(&mut self, column: &str, value: &str) -> bool {
        match self.values.iter_mut().find(|(k, _)| k == column) {
            Some((_, slot)) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Project the row onto a fixed column order. Columns the row lacks become `None`.
    pub fn to_sheet_values(&self, column_order: &[String]) -> Vec<Option<String>> {
        column_order
            .iter()
            .map(|column| self.get(column).map(str::to_string))
            .collect()
    }
}
