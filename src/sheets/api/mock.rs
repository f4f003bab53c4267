// src/sheets/api/mock.rs
// Scripted in-memory transport for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, SheetsTransport};
use crate::sheets::error::{UpdateError, UpdateResult};

pub(crate) enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, body.to_string().into_bytes())
    }

    pub fn respond_raw(self, status: u16, body: Vec<u8>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Respond(HttpResponse { status, body }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl SheetsTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> UpdateResult<HttpResponse> {
        self.seen.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(UpdateError::Transport(message.into())),
            None => panic!("MockTransport: no scripted response left"),
        }
    }
}
