//! Validation of incoming order payloads
//!
//! The order schema is declared as a tree of composable field-level rules
//! (type, pattern, required) that are evaluated independently; every
//! violation is collected into an ordered list of messages.

pub mod extractor;
pub mod order;
pub mod schema;
pub mod validators;

pub use extractor::ValidatedOrder;
pub use order::{order_schema, validate_order};
pub use schema::Schema;
pub use validators::JsonType;
