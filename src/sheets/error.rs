// src/sheets/error.rs

use serde::Serialize;
use thiserror::Error;

pub const MISSING_TABLE_ID_MESSAGE: &str = "Missing required field Spreadsheet Url";
pub const MISSING_SHEET_NAME_MESSAGE: &str = "Missing required field Sheet name";
pub const HEADER_INDEX_VALUE_MESSAGE: &str =
    "Unexpected value for table header index. Please use a number starting from 1";
pub const HEADER_INDEX_FORMAT_MESSAGE: &str =
    "Unexpected format for table header index. Please use a number starting from 1";
pub const EMPTY_PAYLOAD_MESSAGE: &str = "Update request body is empty or invalid";
pub const NOT_AN_ARRAY_MESSAGE: &str = "Request body was not an array.";
pub const UNPARSABLE_BODY_MESSAGE: &str =
    "Unable to parse request body. Expected a list of row objects.";
pub const READ_FALLBACK_MESSAGE: &str = "Could not map request back to existing data";
pub const WRITE_FALLBACK_MESSAGE: &str = "Could not update rows in sheet";
pub const NO_EXISTING_DATA_MESSAGE: &str =
    "No data found at these row indices. Do you want to try inserting something first?";
pub const NOTHING_TO_UPDATE_MESSAGE: &str = "Could not map to existing data. Nothing to update.";

/// Coarse error categories reported to callers alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    Parse,
    Remote,
    NoExistingData,
    NothingToUpdate,
    Transport,
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("{}", MISSING_TABLE_ID_MESSAGE)]
    MissingTableId,
    #[error("{}", MISSING_SHEET_NAME_MESSAGE)]
    MissingSheetName,
    #[error("{0}")]
    InvalidHeaderIndex(&'static str),
    #[error("{}", NOT_AN_ARRAY_MESSAGE)]
    MalformedInput,
    #[error("{}", EMPTY_PAYLOAD_MESSAGE)]
    EmptyPayload,
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Remote(String),
    #[error("{}", NO_EXISTING_DATA_MESSAGE)]
    NoExistingData,
    #[error("{}", NOTHING_TO_UPDATE_MESSAGE)]
    NothingToUpdate,
    /// Network level failure, surfaced as the transport reported it.
    #[error("{0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type UpdateResult<T> = Result<T, UpdateError>;

impl UpdateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UpdateError::MissingTableId
            | UpdateError::MissingSheetName
            | UpdateError::InvalidHeaderIndex(_)
            | UpdateError::MalformedInput
            | UpdateError::EmptyPayload => ErrorKind::Validation,
            UpdateError::Parse(_) => ErrorKind::Parse,
            UpdateError::Remote(_) => ErrorKind::Remote,
            UpdateError::NoExistingData => ErrorKind::NoExistingData,
            UpdateError::NothingToUpdate => ErrorKind::NothingToUpdate,
            UpdateError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Structured form handed back to callers: kind plus readable message.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl From<reqwest::Error> for UpdateError {
    fn from(e: reqwest::Error) -> Self {
        UpdateError::Transport(Box::new(e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}
