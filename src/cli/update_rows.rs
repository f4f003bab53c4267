// src/cli/update_rows.rs

use sheetrows::settings::AppSettings;
use sheetrows::sheets::api::{ReqwestTransport, SheetsEndpoints};
use sheetrows::sheets::{validate, RowsBulkUpdate};

use super::{CliError, RowsArgs};

fn runner(settings: &AppSettings) -> Result<RowsBulkUpdate<ReqwestTransport>, CliError> {
    let transport = ReqwestTransport::new(settings)?;
    let endpoints = SheetsEndpoints::new(&settings.api_base_url)?;
    Ok(RowsBulkUpdate::new(transport, endpoints))
}

pub async fn update(args: &RowsArgs, settings: &AppSettings) -> Result<(), CliError> {
    let request = args.to_request()?;
    let token = args.bearer_token(settings)?;
    let confirmation = runner(settings)?.execute(&request, &token).await?;
    println!("{}", confirmation);
    Ok(())
}

pub async fn preview(args: &RowsArgs, settings: &AppSettings) -> Result<(), CliError> {
    let request = args.to_request()?;
    let token = args.bearer_token(settings)?;
    let write = runner(settings)?.prepare_write(&request, &token).await?;
    let rendered = serde_json::to_string_pretty(&write)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    println!("{}", rendered);
    Ok(())
}

pub fn validate_only(args: &RowsArgs) -> Result<(), CliError> {
    let request = args.to_request()?;
    let validated = validate(&request)?;
    println!(
        "OK: {} row(s) for '{}' in {}, header row {}",
        validated.rows.len(),
        validated.sheet_name,
        validated.table_id,
        validated.header_index.get()
    );
    Ok(())
}
