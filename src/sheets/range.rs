// src/sheets/range.rs
// Header index validation and absolute row range arithmetic

use std::fmt;

use super::error::{
    UpdateError, UpdateResult, HEADER_INDEX_FORMAT_MESSAGE, HEADER_INDEX_VALUE_MESSAGE,
};
use super::row_index::RowIndexMap;

/// Absolute, 1-based row number of the column header row. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeaderIndex(u32);

impl HeaderIndex {
    pub fn new(value: u32) -> UpdateResult<Self> {
        if value == 0 {
            return Err(UpdateError::InvalidHeaderIndex(HEADER_INDEX_VALUE_MESSAGE));
        }
        Ok(Self(value))
    }

    /// Validate the raw header index as the caller typed it.
    ///
    /// Absent, blank or non-numeric input is a format error; numbers <= 0 are
    /// a value error.
    pub fn parse(raw: Option<&str>) -> UpdateResult<Self> {
        let raw = match raw {
            Some(r) if !r.trim().is_empty() => r,
            _ => return Err(UpdateError::InvalidHeaderIndex(HEADER_INDEX_FORMAT_MESSAGE)),
        };
        let parsed: i32 = raw
            .parse()
            .map_err(|_| UpdateError::InvalidHeaderIndex(HEADER_INDEX_FORMAT_MESSAGE))?;
        if parsed <= 0 {
            return Err(UpdateError::InvalidHeaderIndex(HEADER_INDEX_VALUE_MESSAGE));
        }
        Self::new(parsed as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// A1 range covering just the header row, e.g. `'Sheet1'!1:1`.
    pub fn to_a1(self, sheet_name: &str) -> String {
        format!("{}!{}:{}", quote_sheet_name(sheet_name), self.0, self.0)
    }
}

/// Absolute rows to fetch for a set of relative row indices. Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    header: HeaderIndex,
    first_relative: usize,
    last_relative: usize,
    start: u32,
    end: u32,
}

impl RowRange {
    /// `start = header + first + 1`, `end = header + last + 1`.
    ///
    /// Rows past the last addressable sheet row are rejected instead of wrapping.
    pub fn for_rows(header: HeaderIndex, rows: &RowIndexMap) -> UpdateResult<Self> {
        let first_relative = rows.first_key();
        let last_relative = rows.last_key();
        Ok(Self {
            header,
            first_relative,
            last_relative,
            start: absolute_row(header, first_relative)?,
            end: absolute_row(header, last_relative)?,
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn header(&self) -> HeaderIndex {
        self.header
    }

    /// Relative index of the row at `offset` within the fetched range.
    pub fn relative_index_at(&self, offset: usize) -> usize {
        self.first_relative.saturating_add(offset)
    }

    pub fn row_count(&self) -> usize {
        self.last_relative - self.first_relative + 1
    }

    pub fn to_a1(&self, sheet_name: &str) -> String {
        format!("{}!{}", quote_sheet_name(sheet_name), self)
    }
}

fn absolute_row(header: HeaderIndex, relative_index: usize) -> UpdateResult<u32> {
    u32::try_from(relative_index)
        .ok()
        .and_then(|relative| header.get().checked_add(relative))
        .and_then(|row| row.checked_add(1))
        .ok_or_else(|| {
            UpdateError::Parse(format!(
                "Row index {} is beyond the last sheet row after header row {}",
                relative_index,
                header.get()
            ))
        })
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start(), self.end())
    }
}

/// Quote a sheet name for A1 notation. Embedded quotes are doubled.
pub fn quote_sheet_name(sheet_name: &str) -> String {
    format!("'{}'", sheet_name.replace('\'', "''"))
}
