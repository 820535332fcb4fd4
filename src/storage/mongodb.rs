//! MongoDB account store using the official MongoDB async driver.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! card-order = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Accounts live in a single collection (`users` by default), one document
//! per account:
//!
//! ```json
//! { "card": { "numbers": "...", "cvv": "...", "date": { "month": "01", "year": "01" } },
//!   "credit": 300 }
//! ```
//!
//! Lookups match the whole `card` embedded document, so field order matters:
//! documents must be written as `numbers, cvv, date { month, year }`, which
//! is what [`MongoAccountStore::insert_account`] does.

use crate::config::MongoConfig;
use crate::core::{Account, AccountStore, Card, StoreError};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Collection, Database};

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Filter matching the account whose card equals `card`
fn card_filter(card: &Card) -> Document {
    doc! {
        "card": {
            "numbers": card.numbers.as_str(),
            "cvv": card.cvv.as_str(),
            "date": {
                "month": card.date.month.as_str(),
                "year": card.date.year.as_str(),
            },
        }
    }
}

/// Stored form of a credit: whole values stay integers, the rest are doubles.
fn credit_to_bson(credit: f64) -> Bson {
    if credit.fract() == 0.0 && credit >= f64::from(i32::MIN) && credit <= f64::from(i32::MAX) {
        Bson::Int32(credit as i32)
    } else if credit.fract() == 0.0 && credit.abs() < 9_007_199_254_740_992.0 {
        Bson::Int64(credit as i64)
    } else {
        Bson::Double(credit)
    }
}

/// Read the numeric `credit` field of a projected account document.
fn credit_from_document(doc: &Document) -> Result<f64, StoreError> {
    match doc.get("credit") {
        Some(Bson::Double(credit)) => Ok(*credit),
        Some(Bson::Int32(credit)) => Ok(f64::from(*credit)),
        Some(Bson::Int64(credit)) => Ok(*credit as f64),
        Some(other) => Err(StoreError::InvalidDocument(format!(
            "credit has unexpected type {:?}",
            other.element_type()
        ))),
        None => Err(StoreError::InvalidDocument("credit is missing".to_string())),
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

// ---------------------------------------------------------------------------
// MongoAccountStore
// ---------------------------------------------------------------------------

/// Account store backed by a MongoDB collection.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use card_order::storage::MongoAccountStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoAccountStore::new(client.database("bank"), "users");
/// ```
#[derive(Clone, Debug)]
pub struct MongoAccountStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoAccountStore {
    /// Create a store over `collection` in the given database.
    pub fn new(database: Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
            database,
        }
    }

    /// Connect using the service configuration.
    ///
    /// Pings the server so the connection is known to work before any
    /// request is routed to the store.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let uri = config.connection_uri();
        tracing::info!(uri = %uri, "Connecting to MongoDB");

        let client = Client::with_uri_str(&uri).await.map_err(backend)?;
        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(backend)?;

        Ok(Self::new(database, &config.collection))
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get a reference to the accounts collection.
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// Provision an account document.
    pub async fn insert_account(&self, account: &Account) -> Result<(), StoreError> {
        let document = mongodb::bson::to_document(account)
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;

        self.collection
            .insert_one(document)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

#[async_trait]
impl AccountStore for MongoAccountStore {
    /// Find one account by card, projecting only the credit.
    async fn find_credit(&self, card: &Card) -> Result<Option<f64>, StoreError> {
        let found = self
            .collection
            .find_one(card_filter(card))
            .projection(doc! { "credit": 1 })
            .await
            .map_err(backend)?;

        found.as_ref().map(credit_from_document).transpose()
    }

    /// `$set` the credit of the account matching the card.
    async fn update_credit(&self, card: &Card, credit: f64) -> Result<(), StoreError> {
        let result = self
            .collection
            .update_one(
                card_filter(card),
                doc! { "$set": { "credit": credit_to_bson(credit) } },
            )
            .await
            .map_err(backend)?;

        tracing::debug!(matched = result.matched_count, "Credit updated");
        Ok(())
    }
}
