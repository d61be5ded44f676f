use std::env;

use crate::error::{AuditError, Result};

/// Environment variable naming the organization to export.
pub const ORG_VAR: &str = "GITHUB_ORG";
/// Environment variable holding the API access token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Run-time configuration resolved once at startup.
///
/// The aggregation logic never reads the process environment; everything it
/// needs travels in this struct, validated before any network call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the organization whose roster is exported.
    pub organization: String,
    /// Bearer token used to authenticate API requests.
    pub token: String,
}

impl Config {
    /// Reads the organization name and access token from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            organization: required(ORG_VAR)?,
            token: required(TOKEN_VAR)?,
        })
    }
}

fn required(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AuditError::MissingConfig(name)),
    }
}
