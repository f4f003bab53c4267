// src/cli/mod.rs
// Command line entry points for bulk row updates

pub mod store_token;
pub mod update_rows;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

use sheetrows::settings::AppSettings;
use sheetrows::sheets::credentials::{
    CredentialError, CredentialProvider, EnvToken, FirstAvailable, KeyringToken, StaticToken,
};
use sheetrows::sheets::{UpdateError, UpdateRequest};

#[derive(Parser)]
#[command(name = "sheetrows")]
#[command(about = "Bulk update existing spreadsheet rows without touching unmentioned columns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the given row values into the sheet and write them back
    Update(RowsArgs),

    /// Show the write request that `update` would send, without sending it
    Preview(RowsArgs),

    /// Only check the request arguments and row payload
    Validate(RowsArgs),

    /// Save an access token in the OS keyring
    StoreToken {
        /// Token to store
        token: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RowsArgs {
    /// Spreadsheet id or full spreadsheet URL
    #[arg(long)]
    pub table: String,

    /// Sheet (tab) name
    #[arg(long)]
    pub sheet: String,

    /// Row number of the column header row, starting from 1
    #[arg(long = "header-index", default_value = "1")]
    pub header_index: String,

    /// JSON file with an array of row objects, `-` for stdin
    #[arg(long)]
    pub rows: PathBuf,

    /// Access token; defaults to the configured environment variable, then the keyring
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read row objects: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Update(#[from] UpdateError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl RowsArgs {
    pub fn to_request(&self) -> Result<UpdateRequest, CliError> {
        let row_objects = if self.rows.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(&self.rows)?
        };

        Ok(UpdateRequest {
            table_id: Some(self.table.clone()),
            sheet_name: Some(self.sheet.clone()),
            table_header_index: Some(self.header_index.clone()),
            row_objects: Some(row_objects),
        })
    }

    pub fn bearer_token(&self, settings: &AppSettings) -> Result<String, CliError> {
        let mut sources: Vec<Box<dyn CredentialProvider>> = Vec::new();
        if let Some(token) = &self.token {
            sources.push(Box::new(StaticToken(token.clone())));
        }
        sources.push(Box::new(EnvToken {
            var: settings.token_env_var.clone(),
        }));
        sources.push(Box::new(KeyringToken::default()));
        Ok(FirstAvailable(sources).bearer_token()?)
    }
}
