//! Router builder utilities for order routes

use crate::orders::handlers::{OrderState, process_order};
use axum::{Router, routing::post};

/// Path of the order processing endpoint
pub const PROCESS_ORDER_PATH: &str = "/order/process";

/// Build order routes
///
/// - POST /order/process - Validate an order, check credit and debit the account
pub fn build_order_routes(state: OrderState) -> Router {
    Router::new()
        .route(PROCESS_ORDER_PATH, post(process_order))
        .with_state(state)
}
