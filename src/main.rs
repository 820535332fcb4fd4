//! card-order server
//!
//! Configuration is read from the YAML file named by `CONFIG_FILE` when set,
//! otherwise from environment variables (a `.env` file is honoured).

use anyhow::Result;
use card_order::config::{ServiceConfig, StorageBackend};
use card_order::core::AccountStore;
use card_order::server::ServerBuilder;
use card_order::storage::{InMemoryAccountStore, load_seed_file};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("CONFIG_FILE") {
        Ok(path) => {
            let mut config = ServiceConfig::from_yaml_file(&path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            config
        }
        Err(_) => ServiceConfig::from_env()?,
    };

    let store = account_store(&config).await?;
    let addr = config.api.bind_addr();

    ServerBuilder::new()
        .with_shared_store(store)
        .serve(&addr)
        .await
}

/// Build the configured backend; the store is ready before any route exists
async fn account_store(config: &ServiceConfig) -> Result<Arc<dyn AccountStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            let accounts = match &config.storage.seed_file {
                Some(path) => load_seed_file(path)?,
                None => Vec::new(),
            };
            tracing::info!(accounts = accounts.len(), "Using in-memory account store");
            Ok(Arc::new(InMemoryAccountStore::with_accounts(accounts)))
        }
        #[cfg(feature = "mongodb_backend")]
        StorageBackend::Mongodb => {
            let store = card_order::storage::MongoAccountStore::connect(&config.mongodb)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to MongoDB: {}", e))?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb_backend"))]
        StorageBackend::Mongodb => {
            anyhow::bail!("MongoDB backend requested but the `mongodb_backend` feature is disabled")
        }
    }
}
