//! Order endpoint: handlers and their shared state

pub mod handlers;

pub use handlers::{OrderState, process_order};
