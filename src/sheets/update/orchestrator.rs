// src/sheets/update/orchestrator.rs
//! Bulk row update pipeline.
//!
//! Validating -> Fetching -> Merging -> Building -> Done, with `Failed`
//! reachable from every step. The first error ends the run; nothing after it
//! executes, so the write is never sent when the fetch or the merge failed.
//! Dropping the returned future cancels whichever request is in flight.

use serde_json::Value;

use crate::sheets::api::protocol::remote_error_message;
use crate::sheets::api::{SheetsEndpoints, SheetsTransport};
use crate::sheets::codec;
use crate::sheets::error::{UpdateError, UpdateResult, WRITE_FALLBACK_MESSAGE};
use crate::sheets::range::RowRange;
use crate::sheets::validation::{validate, UpdateRequest};

use super::fetch::fetch_existing_rows;
use super::merge::merge_rows;
use super::write_request::{build_write_request, WriteRequest};
use super::transform_response;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineState {
    Validating,
    Fetching,
    Merging,
    Building,
    Done,
    Failed,
}

/// Tracks where a single run currently is. States only move forward.
#[derive(Debug)]
pub struct Pipeline {
    state: PipelineState,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            state: PipelineState::Validating,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn advance(&mut self, next: PipelineState) {
        debug_assert!(next > self.state, "pipeline moved from {:?} to {:?}", self.state, next);
        tracing::debug!(from = ?self.state, to = ?next, "bulk update state change");
        self.state = next;
    }

    fn fail(&mut self, error: UpdateError) -> UpdateError {
        tracing::warn!(at = ?self.state, kind = ?error.kind(), %error, "bulk update failed");
        self.state = PipelineState::Failed;
        error
    }

    fn check<T>(&mut self, result: UpdateResult<T>) -> UpdateResult<T> {
        result.map_err(|e| self.fail(e))
    }
}

/// Read-merge-write runner bound to one transport and API base.
pub struct RowsBulkUpdate<T> {
    transport: T,
    endpoints: SheetsEndpoints,
}

impl<T: SheetsTransport> RowsBulkUpdate<T> {
    pub fn new(transport: T, endpoints: SheetsEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Run the pipeline up to the finished write request without sending it.
    pub async fn prepare_write(&self, request: &UpdateRequest, bearer_token: &str) -> UpdateResult<WriteRequest> {
        self.prepare_write_tracked(request, bearer_token, &mut Pipeline::new())
            .await
    }

    /// Same as `prepare_write`, reporting progress through `pipeline`.
    pub async fn prepare_write_tracked(
        &self,
        request: &UpdateRequest,
        bearer_token: &str,
        pipeline: &mut Pipeline,
    ) -> UpdateResult<WriteRequest> {
        let validated = pipeline.check(validate(request))?;
        let range = pipeline.check(RowRange::for_rows(validated.header_index, &validated.rows))?;

        pipeline.advance(PipelineState::Fetching);
        tracing::info!(
            table = %validated.table_id,
            sheet = %validated.sheet_name,
            rows = validated.rows.len(),
            range = %range,
            "fetching existing rows"
        );
        let existing = pipeline.check(
            fetch_existing_rows(&self.transport, &self.endpoints, &validated, range, bearer_token)
                .await,
        )?;

        pipeline.advance(PipelineState::Merging);
        let merged = pipeline.check(merge_rows(existing.rows, &validated.rows))?;

        pipeline.advance(PipelineState::Building);
        let write = build_write_request(&validated.table_id, &existing.echoed_range, &merged);
        tracing::info!(
            range = %write.range,
            rows = write.matrix.len(),
            cells = merged.overwritten_cells(),
            "write request ready"
        );

        pipeline.advance(PipelineState::Done);
        Ok(write)
    }

    /// Prepare the write, send it, and return the confirmation object.
    pub async fn execute(&self, request: &UpdateRequest, bearer_token: &str) -> UpdateResult<Value> {
        let write = self.prepare_write(request, bearer_token).await?;
        self.send_write(&write, bearer_token).await
    }

    pub async fn send_write(&self, write: &WriteRequest, bearer_token: &str) -> UpdateResult<Value> {
        let http = write.to_http(&self.endpoints, bearer_token)?;
        let response = self.transport.send(http).await?;

        if !response.is_success() {
            let message = remote_error_message(&response.body)
                .unwrap_or_else(|| WRITE_FALLBACK_MESSAGE.to_string());
            tracing::warn!(status = response.status, %message, "bulk write rejected");
            return Err(UpdateError::Remote(message));
        }

        let body = if response.body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(codec::decode_body::<Value>(&response.body)?)
        };
        transform_response(body.as_ref())
    }
}
