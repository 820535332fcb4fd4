//! Loading accounts from a JSON seed file

use crate::core::{Account, StoreError};
use std::path::Path;

/// Read a JSON array of accounts
///
/// Extra fields on each entry (names, ids) are ignored.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Account>, StoreError> {
    let path = path.as_ref();
    let seed_error = |message: String| StoreError::Seed {
        path: path.display().to_string(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
    let accounts: Vec<Account> =
        serde_json::from_str(&content).map_err(|e| seed_error(e.to_string()))?;

    tracing::info!(count = accounts.len(), path = %path.display(), "Loaded seed accounts");
    Ok(accounts)
}
