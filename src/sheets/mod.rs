// src/sheets/mod.rs

// --- Public Interface ---
pub mod api;
pub mod codec;
pub mod credentials;
pub mod error;
pub mod range;
pub mod row_index;
pub mod row_object;
pub mod update;
pub mod validation;

pub use error::{ErrorKind, ErrorReport, UpdateError, UpdateResult};
pub use range::{HeaderIndex, RowRange};
pub use row_index::{parse_rows, RowIndexMap};
pub use row_object::RowObject;
pub use update::{transform_response, RowsBulkUpdate, WriteRequest};
pub use validation::{validate, UpdateRequest, ValidatedRequest};
