//! Core module containing the order pipeline: types, validation, the
//! account store abstraction and the processor

pub mod error;
pub mod order;
pub mod processor;
pub mod store;
pub mod validation;

pub use error::{ConfigError, OrderError, OrderResult, StoreError, ValidationErrors};
pub use order::{Account, Card, CardDate, OrderRequest, Outcome, exceeds_credit};
pub use processor::OrderProcessor;
pub use store::AccountStore;
pub use validation::{ValidatedOrder, validate_order};
