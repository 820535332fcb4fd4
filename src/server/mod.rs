//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires the account store into
//! the order processor and registers the order route.

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::{PROCESS_ORDER_PATH, build_order_routes};
