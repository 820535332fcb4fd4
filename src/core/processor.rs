//! Order processor: lookup, credit check and debit

use crate::core::error::{OrderError, OrderResult};
use crate::core::order::{OrderRequest, Outcome, exceeds_credit};
use crate::core::store::AccountStore;
use crate::core::validation::validate_order;
use serde_json::Value;
use std::sync::Arc;

/// Processes validated orders against an account store
///
/// The store is injected at construction; the processor itself holds no
/// per-request state and can be cloned freely across handlers.
///
/// # Example
///
/// ```rust,ignore
/// let processor = OrderProcessor::new(Arc::new(InMemoryAccountStore::new()));
/// let outcome = processor.process(&order).await?;
/// ```
#[derive(Clone)]
pub struct OrderProcessor {
    store: Arc<dyn AccountStore>,
}

impl OrderProcessor {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    /// Process one validated order
    ///
    /// 1. look up the credit of the account matching the card
    /// 2. refuse when `amount >= credit`
    /// 3. otherwise set the credit to `credit - amount`
    ///
    /// The lookup and the update are separate store calls; the credit is not
    /// re-checked at update time.
    pub async fn process(&self, order: &OrderRequest) -> OrderResult<Outcome> {
        let card = order.card();

        tracing::debug!(card = %card.last_four(), "Looking up account");
        let credit = self
            .store
            .find_credit(&card)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Account lookup failed"))?
            .ok_or_else(|| {
                tracing::warn!(card = %card.last_four(), "No account matches card");
                OrderError::CardNotFound
            })?;

        if exceeds_credit(order.amount, credit) {
            tracing::info!(
                card = %card.last_four(),
                amount = order.amount,
                credit,
                "Payment refused"
            );
            return Ok(Outcome::PaymentRefused);
        }

        self.store
            .update_credit(&card, credit - order.amount)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Account debit failed"))?;

        tracing::info!(
            card = %card.last_four(),
            amount = order.amount,
            remaining = credit - order.amount,
            "Payment accepted"
        );
        Ok(Outcome::PaymentAccepted)
    }

    /// Validate a raw payload, then process it
    pub async fn process_payload(&self, payload: &Value) -> OrderResult<Outcome> {
        let order = validate_order(payload)?;
        self.process(&order).await
    }
}
