use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::AppSettings;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "SheetRows";
const APPLICATION: &str = "sheetrows";
const CONFIG_FILE: &str = "app_settings.json";

pub const ENV_API_BASE_URL: &str = "SHEETS_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "SHEETS_REQUEST_TIMEOUT_SECS";

pub fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(io::ErrorKind::NotFound, "Could not determine project directories for app settings."))
    }
}

/// Settings from the per-user config file, then `.env` / environment overrides.
pub fn load_settings() -> io::Result<AppSettings> {
    let config_file = get_config_path()?;
    let mut settings: AppSettings = load_settings_from_path(&config_file)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn load_settings_from_path<T: for<'de> serde::de::Deserialize<'de> + Default>(config_file: &Path) -> io::Result<T> {
    info!("AppSettings: Attempting to load settings from {:?}", config_file);
    match fs::File::open(config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => {
                    info!("AppSettings: Successfully deserialized settings.");
                    Ok(settings)
                }
                Err(e) => {
                    error!("AppSettings: Failed to parse settings file {:?}: {}", config_file, e);
                    Err(io::Error::new(ErrorKind::InvalidData, format!("Failed to parse settings file: {}", e)))
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: Settings file not found at {:?}. Returning default.", config_file);
            Ok(Default::default())
        }
        Err(e) => {
            error!("AppSettings: Failed to open settings file {:?}: {}", config_file, e);
            Err(e)
        }
    }
}

pub fn apply_env_overrides<F>(settings: &mut AppSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
        debug!("AppSettings: api_base_url overridden from environment");
        settings.api_base_url = url;
    }
    if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT) {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => settings.request_timeout_secs = secs,
            _ => warn!("AppSettings: ignoring invalid {}={:?}", ENV_REQUEST_TIMEOUT, raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings: AppSettings = load_settings_from_path(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_written_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let settings = AppSettings {
            api_base_url: "http://localhost:9000/v4/spreadsheets/".to_string(),
            request_timeout_secs: 5,
            ..AppSettings::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded: AppSettings = load_settings_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"request_timeout_secs": 12}"#).unwrap();
        let loaded: AppSettings = load_settings_from_path(&path).unwrap();
        assert_eq!(loaded.request_timeout_secs, 12);
        assert_eq!(loaded.token_env_var, AppSettings::default().token_env_var);
    }

    #[test]
    fn test_corrupt_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings_from_path::<AppSettings>(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = AppSettings::default();
        apply_env_overrides(&mut settings, |key| match key {
            ENV_API_BASE_URL => Some("http://127.0.0.1:8080/".to_string()),
            ENV_REQUEST_TIMEOUT => Some("abc".to_string()),
            _ => None,
        });
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8080/");
        assert_eq!(settings.request_timeout_secs, 30);
    }
}
