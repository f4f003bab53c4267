// tests/common/mod.rs
// Shared fixtures: a scripted transport standing in for the sheets API

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{json, Value};
use sheetrows::sheets::api::{
    HttpRequest, HttpResponse, SheetsEndpoints, SheetsTransport, DEFAULT_API_BASE_URL,
};
use sheetrows::sheets::{RowsBulkUpdate, UpdateError, UpdateRequest, UpdateResult};

/// Answers requests from a queue and keeps every request it received.
#[derive(Default)]
pub struct FakeSheetsApi {
    replies: Mutex<VecDeque<UpdateResult<HttpResponse>>>,
    received: Mutex<Vec<HttpRequest>>,
}

impl FakeSheetsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string().into_bytes(),
        }));
        self
    }

    pub fn reply_bytes(self, status: u16, body: &[u8]) -> Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_vec(),
        }));
        self
    }

    pub fn drop_connection(self, reason: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(UpdateError::Transport(reason.to_string().into())));
        self
    }

    pub fn received(&self) -> Vec<HttpRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl SheetsTransport for FakeSheetsApi {
    async fn send(&self, request: HttpRequest) -> UpdateResult<HttpResponse> {
        self.received.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("FakeSheetsApi ran out of replies")
    }
}

pub fn runner(api: &FakeSheetsApi) -> RowsBulkUpdate<&FakeSheetsApi> {
    RowsBulkUpdate::new(api, SheetsEndpoints::new(DEFAULT_API_BASE_URL).unwrap())
}

pub fn update_request(header_index: &str, rows: Value) -> UpdateRequest {
    UpdateRequest {
        table_id: Some("sheet-123".to_string()),
        sheet_name: Some("People".to_string()),
        table_header_index: Some(header_index.to_string()),
        row_objects: Some(rows.to_string()),
    }
}

/// batchGet reply with a header row and the given data rows.
pub fn read_reply(header: &[&str], data_range: &str, rows: Value) -> Value {
    json!({
        "spreadsheetId": "sheet-123",
        "valueRanges": [
            {"range": "People!A1:Z1", "majorDimension": "ROWS", "values": [header]},
            {"range": data_range, "majorDimension": "ROWS", "values": rows}
        ]
    })
}
