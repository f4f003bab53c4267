// src/sheets/row_index.rs
//! Relative-index ordered row collections and the parser that builds them.
//!
//! `RowIndexMap` is a sorted vector searched with binary search. It is never
//! empty: every constructor rejects empty input, so `first_key`/`last_key`
//! are always defined.

use serde_json::Value;

use super::codec;
use super::error::{UpdateError, UpdateResult};
use super::row_object::RowObject;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIndexMap {
    rows: Vec<RowObject>,
}

impl RowIndexMap {
    /// Index rows by relative index. A later row claiming an index already
    /// seen replaces the earlier one.
    pub fn from_rows<I>(rows: I) -> UpdateResult<Self>
    where
        I: IntoIterator<Item = RowObject>,
    {
        let mut map = Self { rows: Vec::new() };
        for row in rows {
            map.insert(row);
        }
        if map.rows.is_empty() {
            return Err(UpdateError::EmptyPayload);
        }
        Ok(map)
    }

    fn insert(&mut self, row: RowObject) {
        match self
            .rows
            .binary_search_by_key(&row.relative_index(), RowObject::relative_index)
        {
            Ok(slot) => self.rows[slot] = row,
            Err(slot) => self.rows.insert(slot, row),
        }
    }

    pub fn first_key(&self) -> usize {
        self.rows[0].relative_index()
    }

    pub fn last_key(&self) -> usize {
        self.rows[self.rows.len() - 1].relative_index()
    }

    pub fn get(&self, relative_index: usize) -> Option<&RowObject> {
        self.rows
            .binary_search_by_key(&relative_index, RowObject::relative_index)
            .ok()
            .map(|slot| &self.rows[slot])
    }

    /// Rows in ascending relative index order.
    pub fn iter(&self) -> impl Iterator<Item = &RowObject> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<RowObject> {
        self.rows
    }
}

/// Parse a JSON row array into a `RowIndexMap`.
pub fn parse_rows(body: &Value) -> UpdateResult<RowIndexMap> {
    let elements = body.as_array().ok_or(UpdateError::MalformedInput)?;
    if elements.is_empty() {
        return Err(UpdateError::EmptyPayload);
    }

    let rows = elements
        .iter()
        .enumerate()
        .map(|(position, element)| RowObject::from_json(element, position))
        .collect::<UpdateResult<Vec<_>>>()?;

    RowIndexMap::from_rows(rows)
}

/// Parse caller payload text straight into a `RowIndexMap`.
pub fn parse_payload_text(text: &str) -> UpdateResult<RowIndexMap> {
    let body = codec::parse_payload(text)?;
    parse_rows(&body)
}
