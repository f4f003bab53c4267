// src/sheets/update/merge.rs
// Overlay caller values onto the fetched baseline rows

use crate::sheets::error::{UpdateError, UpdateResult};
use crate::sheets::row_index::RowIndexMap;
use crate::sheets::row_object::RowObject;

/// Baseline rows after the overlay was applied, in relative index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    rows: Vec<RowObject>,
    overwritten_cells: usize,
}

impl MergeResult {
    pub fn rows(&self) -> &[RowObject] {
        &self.rows
    }

    pub fn overwritten_cells(&self) -> usize {
        self.overwritten_cells
    }

    /// Column order for the write: the first row's columns as stored.
    pub fn column_order(&self) -> Vec<String> {
        self.rows
            .first()
            .map(RowObject::column_names)
            .unwrap_or_default()
    }
}

/// Replace baseline cells with overlay values for matching rows.
///
/// Only columns the baseline row already has are touched; overlay columns the
/// sheet does not know are dropped. Fails with `NothingToUpdate` when no cell
/// at all was overwritten.
pub fn merge_rows(baseline: RowIndexMap, overlay: &RowIndexMap) -> UpdateResult<MergeResult> {
    let mut rows = baseline.into_rows();
    let mut overwritten_cells = 0;

    for row in rows.iter_mut() {
        let Some(update) = overlay.get(row.relative_index()) else {
            continue;
        };
        for (column, value) in update.values() {
            if row.overwrite_existing(column, value) {
                overwritten_cells += 1;
            } else {
                tracing::debug!(
                    row = row.relative_index(),
                    %column,
                    "column not present in sheet, skipped"
                );
            }
        }
    }

    if overwritten_cells == 0 {
        return Err(UpdateError::NothingToUpdate);
    }

    Ok(MergeResult {
        rows,
        overwritten_cells,
    })
}
