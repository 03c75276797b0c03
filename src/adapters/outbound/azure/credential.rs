use crate::shared::error::EstateError;
use crate::shared::Result;
use serde::Deserialize;
use std::sync::Mutex;
use tokio::process::Command;

/// Resource the token is requested for.
const ARM_RESOURCE: &str = "https://management.azure.com";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// AzureCliCredential - access tokens via the logged-in Azure CLI
///
/// Shells out to `az account get-access-token` and caches the token for
/// the lifetime of the process; one scan is far shorter than a token's
/// validity window. Requires a prior `az login`.
pub struct AzureCliCredential {
    cached: Mutex<Option<String>>,
}

impl AzureCliCredential {
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// Returns a bearer token for the ARM endpoint, acquiring one on
    /// first use.
    pub async fn token(&self) -> Result<String> {
        if let Some(token) = self.cached.lock().unwrap().clone() {
            return Ok(token);
        }

        let output = Command::new("az")
            .args([
                "account",
                "get-access-token",
                "--resource",
                ARM_RESOURCE,
                "--output",
                "json",
            ])
            .output()
            .await
            .map_err(|e| EstateError::CredentialAcquisition {
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(EstateError::CredentialAcquisition {
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let response: TokenResponse =
            serde_json::from_slice(&output.stdout).map_err(|e| {
                EstateError::CredentialAcquisition {
                    details: format!("Unexpected token response: {}", e),
                }
            })?;

        *self.cached.lock().unwrap() = Some(response.access_token.clone());
        Ok(response.access_token)
    }
}

impl Default for AzureCliCredential {
    fn default() -> Self {
        Self::new()
    }
}
