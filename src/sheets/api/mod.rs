// src/sheets/api/mod.rs
// Remote sheet values API: wire types, URL building and the HTTP seam

pub mod endpoints;
pub mod protocol;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use endpoints::{extract_table_id, SheetsEndpoints, DEFAULT_API_BASE_URL};
pub use protocol::{BatchGetResponse, UpdateValuesBody, ValueInputOption, ValueRange};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, SheetsTransport};
