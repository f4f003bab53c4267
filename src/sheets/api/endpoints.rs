// src/sheets/api/endpoints.rs

use reqwest::Url;

use crate::sheets::error::{UpdateError, UpdateResult};

use super::protocol::ValueInputOption;

pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// URL builder for the values API rooted at a spreadsheets base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsEndpoints {
    base: Url,
}

impl SheetsEndpoints {
    pub fn new(base_url: &str) -> UpdateResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| UpdateError::Parse(format!("Invalid API base url '{}': {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(UpdateError::Parse(format!(
                "Invalid API base url '{}': not a base url",
                base_url
            )));
        }
        Ok(Self { base })
    }

    fn table_url(&self, table_id: &str, tail: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(table_id).extend(tail);
        }
        url
    }

    /// `GET {base}/{id}/values:batchGet?ranges=..&majorDimension=ROWS`
    pub fn batch_get(&self, table_id: &str, ranges: &[String]) -> Url {
        let mut url = self.table_url(table_id, &["values:batchGet"]);
        {
            let mut query = url.query_pairs_mut();
            for range in ranges {
                query.append_pair("ranges", range);
            }
            query.append_pair("majorDimension", "ROWS");
        }
        url
    }

    /// `PUT {base}/{id}/values/{range}?valueInputOption=..&includeValuesInResponse=..`
    pub fn update_values(
        &self,
        table_id: &str,
        range: &str,
        input_option: ValueInputOption,
        include_values_in_response: bool,
    ) -> Url {
        let mut url = self.table_url(table_id, &["values", range]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", input_option.as_str())
            .append_pair(
                "includeValuesInResponse",
                if include_values_in_response { "true" } else { "false" },
            );
        url
    }
}

/// Accept either a bare table id or a full spreadsheet URL and return the id.
pub fn extract_table_id(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.split_once("/spreadsheets/d/") {
        Some((_, rest)) => rest
            .split(|c| c == '/' || c == '?' || c == '#')
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        None => Some(raw.to_string()),
    }
}
