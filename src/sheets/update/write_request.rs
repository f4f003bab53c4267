// src/sheets/update/write_request.rs
// Build the bulk write payload from merged rows

use serde::Serialize;

use crate::sheets::api::protocol::MajorDimension;
use crate::sheets::api::{
    HttpMethod, HttpRequest, SheetsEndpoints, UpdateValuesBody, ValueInputOption,
};
use crate::sheets::error::{UpdateError, UpdateResult};

use super::merge::MergeResult;

/// Final write for a bulk update, ready to be sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRequest {
    pub table_id: String,
    /// Range as echoed by the store on the read, not recomputed locally.
    pub range: String,
    pub column_order: Vec<String>,
    /// One vector per row, positioned by `column_order`. `None` is a cell
    /// the row has no value for.
    pub matrix: Vec<Vec<Option<String>>>,
    pub value_input_option: ValueInputOption,
    pub include_values_in_response: bool,
}

impl WriteRequest {
    pub fn body(&self) -> UpdateValuesBody {
        UpdateValuesBody {
            range: self.range.clone(),
            major_dimension: MajorDimension::Rows,
            values: self.matrix.clone(),
        }
    }

    pub fn to_http(&self, endpoints: &SheetsEndpoints, bearer_token: &str) -> UpdateResult<HttpRequest> {
        let body = serde_json::to_value(self.body())
            .map_err(|e| UpdateError::Parse(format!("Unable to encode write body: {}", e)))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: endpoints.update_values(
                &self.table_id,
                &self.range,
                self.value_input_option,
                self.include_values_in_response,
            ),
            bearer_token: bearer_token.to_string(),
            body: Some(body),
        })
    }
}

/// Project every merged row onto the first row's column order.
pub fn build_write_request(table_id: &str, echoed_range: &str, merged: &MergeResult) -> WriteRequest {
    let column_order = merged.column_order();
    let matrix = merged
        .rows()
        .iter()
        .map(|row| row.to_sheet_values(&column_order))
        .collect();

    WriteRequest {
        table_id: table_id.to_string(),
        range: echoed_range.to_string(),
        column_order,
        matrix,
        value_input_option: ValueInputOption::UserEntered,
        include_values_in_response: true,
    }
}
