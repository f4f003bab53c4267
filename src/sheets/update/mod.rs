// src/sheets/update/mod.rs
// Bulk row update: fetch the live rows, merge caller values, build the write

pub mod fetch;
pub mod merge;
pub mod orchestrator;
pub mod write_request;

use serde_json::{json, Value};

use super::error::{UpdateError, UpdateResult};

pub use fetch::{fetch_existing_rows, ExistingRows};
pub use merge::{merge_rows, MergeResult};
pub use orchestrator::{Pipeline, PipelineState, RowsBulkUpdate};
pub use write_request::{build_write_request, WriteRequest};

pub const UPDATE_SUCCESS_MESSAGE: &str = "Updated sheet successfully!";

/// Replace the store's write confirmation with the fixed success object.
pub fn transform_response(write_result: Option<&Value>) -> UpdateResult<Value> {
    match write_result {
        Some(_) => Ok(json!({ "message": UPDATE_SUCCESS_MESSAGE })),
        None => Err(UpdateError::Remote("Missing a valid response object.".to_string())),
    }
}
