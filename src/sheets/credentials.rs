// src/sheets/credentials.rs
// Bearer token sources. Token refresh is the caller's business.

use thiserror::Error;

pub const KEYRING_SERVICE_NAME: &str = "sheetrows";
pub const KEYRING_TOKEN_USERNAME: &str = "sheets_access_token";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Environment variable {0} is not set")]
    MissingEnv(String),
    #[error("No access token stored in keyring")]
    NoKeyringEntry,
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

pub trait CredentialProvider {
    /// Bearer token to attach to the next request.
    fn bearer_token(&self) -> Result<String, CredentialError>;
}

/// Token handed over directly by the caller.
#[derive(Clone)]
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Result<String, CredentialError> {
        Ok(self.0.clone())
    }
}

/// Token read from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvToken {
    pub var: String,
}

impl CredentialProvider for EnvToken {
    fn bearer_token(&self) -> Result<String, CredentialError> {
        std::env::var(&self.var)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| CredentialError::MissingEnv(self.var.clone()))
    }
}

/// Token kept in the OS keyring.
#[derive(Debug, Clone)]
pub struct KeyringToken {
    pub service: String,
    pub username: String,
}

impl Default for KeyringToken {
    fn default() -> Self {
        Self {
            service: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_TOKEN_USERNAME.to_string(),
        }
    }
}

impl KeyringToken {
    pub fn store(&self, token: &str) -> Result<(), CredentialError> {
        let entry = keyring::Entry::new(&self.service, &self.username)?;
        entry.set_password(token)?;
        tracing::info!(service = %self.service, "access token stored in keyring");
        Ok(())
    }
}

impl CredentialProvider for KeyringToken {
    fn bearer_token(&self) -> Result<String, CredentialError> {
        let entry = keyring::Entry::new(&self.service, &self.username)?;
        match entry.get_password() {
            Ok(token) => Ok(token),
            Err(keyring::Error::NoEntry) => Err(CredentialError::NoKeyringEntry),
            Err(e) => Err(e.into()),
        }
    }
}

/// First provider that yields a token wins.
pub struct FirstAvailable(pub Vec<Box<dyn CredentialProvider>>);

impl CredentialProvider for FirstAvailable {
    fn bearer_token(&self) -> Result<String, CredentialError> {
        let mut last_error = CredentialError::NoKeyringEntry;
        for provider in &self.0 {
            match provider.bearer_token() {
                Ok(token) => return Ok(token),
                Err(e) => {
                    tracing::debug!(error = %e, "credential source unavailable");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken("abc".to_string()).bearer_token().unwrap(), "abc");
    }

    #[test]
    fn test_env_token_missing() {
        let provider = EnvToken {
            var: "SHEETROWS_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
        };
        assert!(matches!(
            provider.bearer_token(),
            Err(CredentialError::MissingEnv(_))
        ));
    }

    #[test]
    fn test_first_available_falls_through() {
        let chain = FirstAvailable(vec![
            Box::new(EnvToken {
                var: "SHEETROWS_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
            }),
            Box::new(StaticToken("fallback".to_string())),
        ]);
        assert_eq!(chain.bearer_token().unwrap(), "fallback");
    }
}
