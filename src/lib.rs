//! # card-order
//!
//! A card payment order service exposing a single REST endpoint,
//! `POST /order/process`.
//!
//! ## Pipeline
//!
//! - **Validation**: the JSON body is checked against the order schema and
//!   every violation is reported (400)
//! - **Lookup**: the account whose card matches the order exactly is found
//!   in the account store (404 when none does)
//! - **Credit check**: orders whose amount is not strictly below the
//!   available credit are refused (200)
//! - **Debit**: otherwise the credit is decreased by the amount (200)
//!
//! Store failures surface as 500 with the store's own message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use card_order::prelude::*;
//!
//! let store = InMemoryAccountStore::with_accounts(vec![Account::new(
//!     Card {
//!         numbers: "1234123412341234".into(),
//!         cvv: "123".into(),
//!         date: CardDate { month: "01".into(), year: "01".into() },
//!     },
//!     300.0,
//! )]);
//!
//! ServerBuilder::new()
//!     .with_account_store(store)
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod orders;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Account, AccountStore, Card, CardDate, ConfigError, OrderError, OrderProcessor,
        OrderRequest, OrderResult, Outcome, StoreError, ValidatedOrder, ValidationErrors,
        exceeds_credit, validate_order,
    };

    // === Handlers ===
    pub use crate::orders::{OrderState, process_order};

    // === Storage ===
    pub use crate::storage::{InMemoryAccountStore, load_seed_file};
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoAccountStore;

    // === Config ===
    pub use crate::config::{ApiConfig, MongoConfig, ServiceConfig, StorageBackend, StorageConfig};

    // === Server ===
    pub use crate::server::{PROCESS_ORDER_PATH, ServerBuilder, build_order_routes};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
