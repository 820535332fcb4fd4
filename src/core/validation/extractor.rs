//! Axum extractor for validated orders
//!
//! This module provides the `ValidatedOrder` extractor that decodes the JSON
//! body and checks it against the order schema before the handler runs.

use super::order::validate_order;
use crate::core::error::{OrderError, ValidationErrors};
use crate::core::order::OrderRequest;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde_json::Value;

/// Axum extractor yielding an order that passed schema validation
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn process_order(
///     ValidatedOrder(order): ValidatedOrder,
/// ) -> Result<Outcome, OrderError> {
///     // order is already validated
/// }
/// ```
///
/// Rejections are [`OrderError::Validation`], rendered as a 400 with the
/// list of messages. A body that is not JSON yields a single message; a
/// body sent without a JSON content type is validated as an empty object.
#[derive(Debug, Clone)]
pub struct ValidatedOrder(pub OrderRequest);

impl ValidatedOrder {
    /// Get the inner order
    pub fn into_inner(self) -> OrderRequest {
        self.0
    }
}

impl std::ops::Deref for ValidatedOrder {
    type Target = OrderRequest;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequest<S> for ValidatedOrder
where
    S: Send + Sync,
{
    type Rejection = OrderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match Json::<Value>::from_request(req, state).await {
            Ok(Json(payload)) => payload,
            // Bodies not declared as JSON are read as an empty object
            Err(JsonRejection::MissingJsonContentType(_)) => {
                tracing::debug!("Order sent without a JSON content type");
                Value::Object(Default::default())
            }
            Err(e) => {
                tracing::warn!(error = %e.body_text(), "Rejected order with unreadable body");
                return Err(OrderError::Validation(ValidationErrors::new(vec![format!(
                    "instance is not valid JSON: {}",
                    e.body_text()
                )])));
            }
        };

        match validate_order(&payload) {
            Ok(order) => Ok(ValidatedOrder(order)),
            Err(errors) => {
                tracing::warn!(violations = errors.len(), "Rejected order failing validation");
                Err(OrderError::Validation(errors))
            }
        }
    }
}
