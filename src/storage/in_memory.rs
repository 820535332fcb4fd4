//! In-memory implementation of AccountStore for testing and development

use crate::core::{Account, AccountStore, Card, StoreError};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory account store implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// each store call takes the lock once, so a lookup followed by an update
/// is not atomic.
#[derive(Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl InMemoryAccountStore {
    /// Create an empty in-memory account store
    pub fn new() -> Self {
        Self::with_accounts(Vec::new())
    }

    /// Create a store pre-filled with accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }

    /// Provision an account
    pub fn insert(&self, account: Account) -> Result<(), StoreError> {
        self.accounts
            .write()
            .map_err(|_| StoreError::Poisoned("write"))?
            .push(account);
        Ok(())
    }

    /// Snapshot of every stored account
    pub fn accounts(&self) -> Result<Vec<Account>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::Poisoned("read"))?;
        Ok(accounts.clone())
    }

    /// Current credit of the first account matching `card`
    pub fn credit_of(&self, card: &Card) -> Result<Option<f64>, StoreError> {
        Ok(self
            .accounts()?
            .into_iter()
            .find(|account| &account.card == card)
            .map(|account| account.credit))
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_credit(&self, card: &Card) -> Result<Option<f64>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::Poisoned("read"))?;

        Ok(accounts
            .iter()
            .find(|account| &account.card == card)
            .map(|account| account.credit))
    }

    async fn update_credit(&self, card: &Card, credit: f64) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::Poisoned("write"))?;

        if let Some(account) = accounts.iter_mut().find(|account| &account.card == card) {
            account.credit = credit;
        }

        Ok(())
    }
}
