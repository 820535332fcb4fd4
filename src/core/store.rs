//! Account store abstraction consumed by the order processor

use crate::core::error::StoreError;
use crate::core::order::Card;
use async_trait::async_trait;

/// Storage for accounts, keyed by exact card equality
///
/// The order processor only needs two primitives: a find-one that projects
/// the credit, and an update-one that sets it. Both use the same card filter.
/// Implementations do not re-check the credit when updating.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find the credit of the account whose card equals `card`
    ///
    /// Returns `Ok(None)` when no account matches.
    async fn find_credit(&self, card: &Card) -> Result<Option<f64>, StoreError>;

    /// Set the credit of the account whose card equals `card`
    ///
    /// Matching nothing is not an error.
    async fn update_credit(&self, card: &Card, credit: f64) -> Result<(), StoreError>;
}
