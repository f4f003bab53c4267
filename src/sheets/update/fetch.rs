// src/sheets/update/fetch.rs
//! Fetch the rows currently stored at the target range.
//!
//! The read asks for two ranges: the header row and the data rows. The
//! response is turned into the same JSON row objects a range read would hand
//! back (header name -> cell text, plus `rowIndex`), then parsed with the
//! regular row parser so baseline and overlay rows share one representation.

use serde_json::{Map, Value};

use crate::sheets::api::protocol::remote_error_message;
use crate::sheets::api::{
    BatchGetResponse, HttpMethod, HttpRequest, SheetsEndpoints, SheetsTransport, ValueRange,
};
use crate::sheets::codec;
use crate::sheets::error::{UpdateError, UpdateResult, READ_FALLBACK_MESSAGE};
use crate::sheets::range::RowRange;
use crate::sheets::row_index::{parse_rows, RowIndexMap};
use crate::sheets::row_object::ROW_INDEX_KEY;
use crate::sheets::validation::ValidatedRequest;

/// Baseline rows plus the range string the store echoed for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingRows {
    pub rows: RowIndexMap,
    pub echoed_range: String,
}

pub async fn fetch_existing_rows<T: SheetsTransport>(
    transport: &T,
    endpoints: &SheetsEndpoints,
    request: &ValidatedRequest,
    range: RowRange,
    bearer_token: &str,
) -> UpdateResult<ExistingRows> {
    let ranges = vec![
        range.header().to_a1(&request.sheet_name),
        range.to_a1(&request.sheet_name),
    ];
    let http = HttpRequest {
        method: HttpMethod::Get,
        url: endpoints.batch_get(&request.table_id, &ranges),
        bearer_token: bearer_token.to_string(),
        body: None,
    };

    let response = transport.send(http).await?;
    if !response.is_success() {
        let message = remote_error_message(&response.body)
            .unwrap_or_else(|| READ_FALLBACK_MESSAGE.to_string());
        tracing::warn!(status = response.status, %message, "range read rejected");
        return Err(UpdateError::Remote(message));
    }
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(UpdateError::NoExistingData);
    }

    let batch: BatchGetResponse = codec::decode_body(&response.body)?;
    let Some(data_range) = batch.value_ranges.get(1) else {
        return Err(UpdateError::NoExistingData);
    };

    let rows_json = rows_from_value_ranges(&batch.value_ranges, range);
    if rows_json.as_array().map_or(true, Vec::is_empty) {
        return Err(UpdateError::NoExistingData);
    }

    let rows = parse_rows(&rows_json)?;
    tracing::debug!(rows = rows.len(), range = %data_range.range, "fetched baseline rows");

    Ok(ExistingRows {
        rows,
        echoed_range: data_range.range.clone(),
    })
}

/// Zip the data rows against the header row.
///
/// Cells the store trimmed from the end of a row become empty strings. A
/// blank or repeated header gets a positional key (`#3`, `Name#5`) so every
/// column keeps its slot when the row is written back.
pub fn rows_from_value_ranges(value_ranges: &[ValueRange], range: RowRange) -> Value {
    let headers = header_keys(value_ranges.first());
    let data = value_ranges
        .get(1)
        .map(|r| r.values.as_slice())
        .unwrap_or_default();

    let rows = data
        .iter()
        .enumerate()
        .map(|(offset, cells)| {
            let mut object = Map::new();
            object.insert(
                ROW_INDEX_KEY.to_string(),
                Value::String(range.relative_index_at(offset).to_string()),
            );
            for (column, key) in headers.iter().enumerate() {
                let text = cells
                    .get(column)
                    .and_then(codec::scalar_to_string)
                    .unwrap_or_default();
                object.insert(key.clone(), Value::String(text));
            }
            Value::Object(object)
        })
        .collect();

    Value::Array(rows)
}

fn header_keys(header_range: Option<&ValueRange>) -> Vec<String> {
    let cells = header_range
        .and_then(|r| r.values.first())
        .map(|row| row.as_slice())
        .unwrap_or_default();

    let mut keys: Vec<String> = Vec::with_capacity(cells.len());
    for (column, cell) in cells.iter().enumerate() {
        let name = codec::scalar_to_string(cell).unwrap_or_default();
        let clashes = name.trim().is_empty() || name == ROW_INDEX_KEY || keys.contains(&name);
        if !clashes {
            keys.push(name);
            continue;
        }
        let mut key = format!("{}#{}", name.trim(), column + 1);
        while key == ROW_INDEX_KEY || keys.contains(&key) {
            key.push('#');
        }
        keys.push(key);
    }
    keys
}
