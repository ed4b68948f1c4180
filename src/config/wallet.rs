//! Wallet configuration and signing key resolution.

use std::fs;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable holding a raw private key.
pub const PRIVATE_KEY_ENV: &str = "WALLET_PRIVATE_KEY";

/// Environment variable holding the keystore password.
pub const KEYSTORE_PASSWORD_ENV: &str = "SWAPDESK_KEYSTORE_PASSWORD";

/// Environment variable naming a file that holds the keystore password.
pub const KEYSTORE_PASSWORD_FILE_ENV: &str = "SWAPDESK_KEYSTORE_PASSWORD_FILE";

/// Wallet configuration.
/// Private key is loaded from `WALLET_PRIVATE_KEY` env var at runtime (never from config file).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Optional keystore path for encrypted wallet storage.
    #[serde(default)]
    pub keystore_path: Option<String>,
    /// Private key resolved at load time.
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl WalletConfig {
    /// Resolve the signing key: `WALLET_PRIVATE_KEY` first, then the keystore.
    ///
    /// Leaves `private_key` empty when neither is configured; connecting will
    /// then fail with `NoWallet`.
    #[allow(clippy::result_large_err)]
    pub(crate) fn resolve_private_key(&mut self) -> Result<()> {
        self.private_key = std::env::var(PRIVATE_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if self.private_key.is_some() {
            return Ok(());
        }

        if let Some(ref keystore_path) = self.keystore_path {
            let password = read_keystore_password()?;
            self.private_key = Some(decrypt_keystore_private_key(keystore_path, &password)?);
        }
        Ok(())
    }
}

fn read_keystore_password() -> Result<String> {
    if let Ok(password) = std::env::var(KEYSTORE_PASSWORD_ENV) {
        return Ok(password);
    }
    if let Ok(path) = std::env::var(KEYSTORE_PASSWORD_FILE_ENV) {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: KEYSTORE_PASSWORD_FILE_ENV,
                reason: "password file is empty".to_string(),
            }
            .into());
        }
        return Ok(password);
    }
    Err(ConfigError::MissingField {
        field: KEYSTORE_PASSWORD_ENV,
    }
    .into())
}

#[cfg(feature = "evm")]
fn decrypt_keystore_private_key(path: &str, password: &str) -> Result<String> {
    use alloy_signer_local::PrivateKeySigner;

    let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
        ConfigError::InvalidValue {
            field: "keystore_path",
            reason: e.to_string(),
        }
    })?;
    Ok(alloy_primitives::hex::encode(signer.to_bytes()))
}

#[cfg(not(feature = "evm"))]
fn decrypt_keystore_private_key(_path: &str, _password: &str) -> Result<String> {
    Err(ConfigError::InvalidValue {
        field: "keystore_path",
        reason: "keystore support requires the evm feature".to_string(),
    }
    .into())
}
