// src/sheets/validation.rs
// Precondition checks for a bulk row update request

use serde::{Deserialize, Serialize};

use super::api::extract_table_id;
use super::error::{UpdateError, UpdateResult};
use super::range::HeaderIndex;
use super::row_index::{parse_payload_text, RowIndexMap};

/// Bulk update request as the caller assembled it. Every field is raw text;
/// nothing is trusted until `validate` has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// Spreadsheet id, or a spreadsheet URL containing it.
    pub table_id: Option<String>,
    pub sheet_name: Option<String>,
    pub table_header_index: Option<String>,
    /// JSON array of row objects.
    pub row_objects: Option<String>,
}

/// A request that passed every precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub table_id: String,
    pub sheet_name: String,
    pub header_index: HeaderIndex,
    pub rows: RowIndexMap,
}

/// Check table id, sheet name, header index and payload, in that order.
pub fn validate(request: &UpdateRequest) -> UpdateResult<ValidatedRequest> {
    let table_id = request
        .table_id
        .as_deref()
        .and_then(extract_table_id)
        .ok_or(UpdateError::MissingTableId)?;

    let sheet_name = request
        .sheet_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .ok_or(UpdateError::MissingSheetName)?
        .to_string();

    let header_index = HeaderIndex::parse(request.table_header_index.as_deref())?;

    let rows = parse_payload_text(request.row_objects.as_deref().unwrap_or_default())?;

    Ok(ValidatedRequest {
        table_id,
        sheet_name,
        header_index,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::error::ErrorKind;

    fn request() -> UpdateRequest {
        UpdateRequest {
            table_id: Some("abc".to_string()),
            sheet_name: Some("Sheet1".to_string()),
            table_header_index: Some("1".to_string()),
            row_objects: Some(r#"[{"rowIndex": "0", "Name": "X"}]"#.to_string()),
        }
    }

    #[test]
    fn test_valid_request() {
        let validated = validate(&request()).unwrap();
        assert_eq!(validated.table_id, "abc");
        assert_eq!(validated.sheet_name, "Sheet1");
        assert_eq!(validated.header_index.get(), 1);
        assert_eq!(validated.rows.len(), 1);
    }

    #[test]
    fn test_table_id_from_url() {
        let mut req = request();
        req.table_id = Some("https://docs.google.com/spreadsheets/d/XYZ/edit".to_string());
        assert_eq!(validate(&req).unwrap().table_id, "XYZ");
    }

    #[test]
    fn test_missing_fields() {
        let mut req = request();
        req.table_id = Some(" ".to_string());
        assert!(matches!(validate(&req), Err(UpdateError::MissingTableId)));

        let mut req = request();
        req.sheet_name = None;
        assert!(matches!(validate(&req), Err(UpdateError::MissingSheetName)));

        let mut req = request();
        req.table_header_index = Some("0".to_string());
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, UpdateError::InvalidHeaderIndex(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_payload_errors() {
        let mut req = request();
        req.row_objects = None;
        assert!(matches!(validate(&req), Err(UpdateError::EmptyPayload)));

        req.row_objects = Some("[]".to_string());
        assert!(matches!(validate(&req), Err(UpdateError::EmptyPayload)));

        req.row_objects = Some(r#"{"Name": "X"}"#.to_string());
        assert!(matches!(validate(&req), Err(UpdateError::MalformedInput)));

        req.row_objects = Some("not json".to_string());
        let err = validate(&req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: UpdateRequest = serde_json::from_str(
            r#"{"tableId": "abc", "sheetName": "S", "tableHeaderIndex": "2", "rowObjects": "[]"}"#,
        )
        .unwrap();
        assert_eq!(req.table_header_index.as_deref(), Some("2"));
    }
}
