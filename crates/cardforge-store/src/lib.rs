//! # CardForge Store
//!
//! Document storage for the CardForge ID-card template backend:
//! - A [`DocumentStore`] trait covering insert, find, delete and
//!   collection listing over schema-flexible BSON documents
//! - An in-memory backend for tests and development
//! - A MongoDB backend (feature `mongo`, enabled by default)
//! - Typed conversion between public string ids and store-native ObjectIds
//!
//! ## Example Usage
//!
//! ```rust
//! use cardforge_store::{DocumentStore, MemoryStore, bson::doc, parse_id};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::default();
//!
//! let id = store.insert_one("template", doc! { "name": "Badge1" }).await?;
//! let found = store.find_one_by_id("template", &parse_id(&id.to_hex())?).await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod id;
pub mod storage;

pub use bson;
pub use error::{Result, StoreError};
pub use id::parse_id;
pub use storage::{DocumentStore, MemoryStore};

#[cfg(feature = "mongo")]
pub use storage::mongo_storage::MongoStore;
