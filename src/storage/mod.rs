//! Account store implementations for different backends

pub mod in_memory;
#[cfg(feature = "mongodb_backend")]
pub mod mongodb;
pub mod seed;

pub use in_memory::InMemoryAccountStore;
#[cfg(feature = "mongodb_backend")]
pub use self::mongodb::MongoAccountStore;
pub use seed::load_seed_file;
