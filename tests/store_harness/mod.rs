//! Shared test harness for account store backends
//!
//! Provides seed accounts, order payload builders and a router factory, plus
//! two macros that run the same suites against any backend:
//! `account_store_tests!` (store contract) and `order_api_tests!` (HTTP
//! round-trips through `POST /order/process`).
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//!
//! account_store_tests!(InMemoryAccountStore::with_accounts(seed_accounts()));
//! ```
//!
//! The factory expression must yield a store that already holds exactly
//! [`seed_accounts`].

#![allow(dead_code)]

#[macro_use]
pub mod api_tests;
#[macro_use]
pub mod store_tests;

use axum_test::TestServer;
use card_order::core::{Account, AccountStore, Card, CardDate};
use card_order::server::ServerBuilder;
use serde_json::{Value, json};
use std::sync::Arc;

/// Credit of the primary seed account
pub const PRIMARY_CREDIT: f64 = 300.0;

/// Credit of the secondary seed account
pub const SECONDARY_CREDIT: f64 = 50.0;

/// Card of the primary seed account
pub fn primary_card() -> Card {
    Card {
        numbers: "1234123412341234".to_string(),
        cvv: "123".to_string(),
        date: CardDate {
            month: "01".to_string(),
            year: "01".to_string(),
        },
    }
}

/// Card of the secondary seed account
pub fn secondary_card() -> Card {
    Card {
        numbers: "4321432143214321".to_string(),
        cvv: "987".to_string(),
        date: CardDate {
            month: "12".to_string(),
            year: "29".to_string(),
        },
    }
}

/// Accounts every backend factory must start with
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account::new(primary_card(), PRIMARY_CREDIT),
        Account::new(secondary_card(), SECONDARY_CREDIT),
    ]
}

/// Order payload for `card` and `amount`
pub fn order_payload(card: &Card, amount: f64) -> Value {
    json!({
        "numbers": card.numbers,
        "cvv": card.cvv,
        "date": {
            "month": card.date.month,
            "year": card.date.year,
        },
        "amount": amount,
    })
}

/// A valid order against the primary account
pub fn valid_order(amount: f64) -> Value {
    order_payload(&primary_card(), amount)
}

/// Build a test server over `store`
pub fn test_server(store: Arc<dyn AccountStore>) -> TestServer {
    let app = ServerBuilder::new()
        .with_shared_store(store)
        .build()
        .expect("router should build with a store");
    TestServer::try_new(app).expect("Failed to create test server")
}

/// Current credit of the account matching `card`
pub async fn credit_of(store: &Arc<dyn AccountStore>, card: &Card) -> Option<f64> {
    store
        .find_credit(card)
        .await
        .expect("store lookup should succeed")
}
