pub mod io;

use serde::{Deserialize, Serialize};

use crate::sheets::api::DEFAULT_API_BASE_URL;

pub const DEFAULT_TOKEN_ENV_VAR: &str = "SHEETS_ACCESS_TOKEN";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    /// Base of the spreadsheets values API.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Environment variable consulted for the bearer token.
    pub token_env_var: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            token_env_var: DEFAULT_TOKEN_ENV_VAR.to_string(),
        }
    }
}
