//! Storage abstraction for schema-flexible documents

use async_trait::async_trait;
use bson::{Document, oid::ObjectId};

use crate::error::Result;

pub mod memory_storage;

pub use memory_storage::MemoryStore;

// MongoDB implementation
#[cfg(feature = "mongo")]
pub mod mongo_storage;

/// Abstraction for document store backends
///
/// Documents are addressed by a store-generated [`ObjectId`] kept in the
/// `_id` field.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database
    fn name(&self) -> &str;

    /// Insert a document, assigning `_id` when absent, and return its id
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<ObjectId>;

    /// Find documents whose top-level fields equal every field in `filter`
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>>;

    /// Find a single document by id
    async fn find_one_by_id(&self, collection: &str, id: &ObjectId) -> Result<Option<Document>>;

    /// Delete at most one document by id, returning whether one was removed
    async fn delete_one_by_id(&self, collection: &str, id: &ObjectId) -> Result<bool>;

    /// Names of all collections in the database
    async fn list_collection_names(&self) -> Result<Vec<String>>;
}
