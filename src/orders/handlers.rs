//! HTTP handlers for order operations

use crate::core::{AccountStore, OrderError, OrderProcessor, Outcome, ValidatedOrder};
use axum::extract::State;
use std::sync::Arc;

/// Application state shared across order handlers
#[derive(Clone)]
pub struct OrderState {
    pub processor: OrderProcessor,
}

impl OrderState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            processor: OrderProcessor::new(store),
        }
    }
}

/// Process a card payment order
///
/// POST /order/process
///
/// - 200 `Payment accepted` / `Payment refused, the amount is too high`
/// - 400 JSON array of validation messages
/// - 404 `No matching card`
/// - 500 store error detail
pub async fn process_order(
    State(state): State<OrderState>,
    ValidatedOrder(order): ValidatedOrder,
) -> Result<Outcome, OrderError> {
    state.processor.process(&order).await
}
