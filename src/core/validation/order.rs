//! Schema of the `POST /order/process` payload

use super::schema::Schema;
use crate::core::error::ValidationErrors;
use crate::core::order::OrderRequest;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

pub const NUMBERS_PATTERN: &str = "^[0-9]{16}$";
pub const CVV_PATTERN: &str = "^[0-9]{3}$";
pub const MONTH_PATTERN: &str = "^(0?[1-9]|1[012])$";
pub const YEAR_PATTERN: &str = "^[0-9]{2}$";

/// The order schema, built once
pub fn order_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::object()
            .property(
                "numbers",
                Schema::string().pattern(Regex::new(NUMBERS_PATTERN).unwrap()),
            )
            .property("cvv", Schema::string().pattern(Regex::new(CVV_PATTERN).unwrap()))
            .property(
                "date",
                Schema::object()
                    .property(
                        "month",
                        Schema::string().pattern(Regex::new(MONTH_PATTERN).unwrap()),
                    )
                    .property(
                        "year",
                        Schema::string().pattern(Regex::new(YEAR_PATTERN).unwrap()),
                    )
                    .required(["month", "year"]),
            )
            .property("amount", Schema::number())
            .required(["numbers", "cvv", "date", "amount"])
    })
}

/// Validate a raw order payload and narrow it to an [`OrderRequest`]
///
/// All violations are reported together. Field values are passed through
/// untouched.
pub fn validate_order(payload: &Value) -> Result<OrderRequest, ValidationErrors> {
    let errors = order_schema().validate(payload);
    if !errors.is_empty() {
        return Err(ValidationErrors::new(errors));
    }

    OrderRequest::deserialize(payload)
        .map_err(|e| ValidationErrors::new(vec![format!("instance {}", e)]))
}
