// src/sheets/api/protocol.rs
//! Wire types for the sheet values API.
//!
//! Only the fields the bulk update reads or writes are modelled; everything
//! else in the store's responses is ignored by serde.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of a `values:batchGet` read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetResponse {
    #[serde(default)]
    pub value_ranges: Vec<ValueRange>,
}

/// One range of values as echoed back by the store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// Canonical A1 range chosen by the store, e.g. `Sheet1!A2:C4`.
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    /// Rows of cells. Trailing empty cells and rows are omitted by the store.
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorDimension {
    Rows,
}

/// How the store interprets written values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Parsed as if typed into the UI (numbers, dates, formulas).
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// Body of a `values.update` PUT. `None` cells are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesBody {
    pub range: String,
    pub major_dimension: MajorDimension,
    pub values: Vec<Vec<Option<String>>>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract `error.message` from a failure body, if the store sent one.
pub fn remote_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_get_response_parses_store_shape() {
        let body = json!({
            "spreadsheetId": "abc",
            "valueRanges": [
                {"range": "Sheet1!A1:C1", "majorDimension": "ROWS", "values": [["Name", "Age"]]},
                {"range": "Sheet1!A2:C2", "majorDimension": "ROWS"}
            ]
        });
        let parsed: BatchGetResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.value_ranges.len(), 2);
        assert!(parsed.value_ranges[1].values.is_empty());
    }

    #[test]
    fn test_update_body_serializes_rows_and_nulls() {
        let body = UpdateValuesBody {
            range: "Sheet1!A2:B2".to_string(),
            major_dimension: MajorDimension::Rows,
            values: vec![vec![Some("X".to_string()), None]],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"range": "Sheet1!A2:B2", "majorDimension": "ROWS", "values": [["X", null]]})
        );
    }

    #[test]
    fn test_remote_error_message() {
        let body = br#"{"error": {"code": 400, "message": "Unable to parse range", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(remote_error_message(body).as_deref(), Some("Unable to parse range"));
        assert_eq!(remote_error_message(b"{\"error\": {}}"), None);
        assert_eq!(remote_error_message(b"<html>"), None);
    }

    #[test]
    fn test_value_input_option_names() {
        assert_eq!(ValueInputOption::UserEntered.as_str(), "USER_ENTERED");
        assert_eq!(
            serde_json::to_value(ValueInputOption::UserEntered).unwrap(),
            json!("USER_ENTERED")
        );
    }
}
