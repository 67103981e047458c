use std::sync::Arc;

use super::DetectionError;

const BEARER_PREFIX: &str = "Bearer ";

/// Raw credential header values as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub authorization: Option<String>,
}

impl Credentials {
    /// The dedicated API-key header wins over `Authorization`. A `Bearer `
    /// prefix is stripped; any other authorization value is used as-is.
    pub fn token(&self) -> Option<&str> {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            return Some(key);
        }

        self.authorization
            .as_deref()
            .map(|value| value.strip_prefix(BEARER_PREFIX).unwrap_or(value))
            .filter(|token| !token.is_empty())
    }
}

/// Compares caller tokens against the secret configured at startup.
#[derive(Clone)]
pub struct CredentialGate {
    secret: Arc<str>,
}

impl CredentialGate {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn verify(&self, credentials: &Credentials) -> Result<(), DetectionError> {
        let token = credentials.token().ok_or_else(|| {
            DetectionError::Unauthenticated("Missing API key".to_string())
        })?;

        if token != &*self.secret {
            return Err(DetectionError::Forbidden("Invalid API key".to_string()));
        }

        Ok(())
    }
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
