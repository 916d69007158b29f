//! In-memory document store for testing and development

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::document::ID_FIELD;
use crate::error::{Result, StoreError};
use crate::storage::DocumentStore;

/// In-memory storage implementation
///
/// Collections keep documents in insertion order.
#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: &str) -> Result<usize> {
        Ok(self.lock()?.get(collection).map_or(0, Vec::len))
    }

    /// Check if a collection is empty or missing
    pub fn is_empty(&self, collection: &str) -> Result<bool> {
        Ok(self.len(collection)? == 0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Vec<Document>>>> {
        self.collections
            .lock()
            .map_err(|_| StoreError::backend("Lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

fn matches_filter(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(k, v)| doc.get(k) == Some(v))
}

fn has_id(doc: &Document, id: &ObjectId) -> bool {
    matches!(doc.get(ID_FIELD), Some(Bson::ObjectId(oid)) if oid == id)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, mut doc: Document) -> Result<ObjectId> {
        let id = match doc.get(ID_FIELD) {
            Some(Bson::ObjectId(oid)) => *oid,
            Some(other) => {
                return Err(StoreError::InvalidId {
                    id: other.to_string(),
                    reason: "only ObjectId identifiers are supported".into(),
                });
            }
            None => {
                let oid = ObjectId::new();
                doc.insert(ID_FIELD, oid);
                oid
            }
        };

        let mut collections = self.lock()?;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs.iter().any(|d| has_id(d, &id)) {
            return Err(StoreError::backend(format!(
                "Duplicate key {} in collection '{}'",
                id, collection
            )));
        }

        docs.push(doc);
        Ok(id)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>> {
        let collections = self.lock()?;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        // Non-positive limits mean "no limit", as in MongoDB
        let limit = match limit {
            Some(n) if n > 0 => n as usize,
            _ => usize::MAX,
        };

        Ok(docs
            .iter()
            .filter(|d| matches_filter(d, &filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_one_by_id(&self, collection: &str, id: &ObjectId) -> Result<Option<Document>> {
        let collections = self.lock()?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| has_id(d, id)))
            .cloned())
    }

    async fn delete_one_by_id(&self, collection: &str, id: &ObjectId) -> Result<bool> {
        let mut collections = self.lock()?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };

        match docs.iter().position(|d| has_id(d, id)) {
            Some(index) => {
                docs.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
