use sheetrows::sheets::credentials::KeyringToken;

use super::CliError;

pub fn run(token: &str) -> Result<(), CliError> {
    KeyringToken::default().store(token.trim())?;
    println!("Access token saved.");
    Ok(())
}
