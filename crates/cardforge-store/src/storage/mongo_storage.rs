//! MongoDB storage implementation
//!
//! Works with any MongoDB-compatible deployment reachable through a
//! standard connection string.

use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use futures_util::TryStreamExt;
use mongodb::{Client, Collection, Database};

use crate::error::{Result, StoreError};
use crate::storage::DocumentStore;

/// MongoDB-backed document store
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Create a store over an existing database handle
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Connect to `uri` and use the database `database_name`
    ///
    /// The driver connects lazily, so an unreachable server is only
    /// reported by the first operation.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::backend(format!("Failed to create MongoDB client: {}", e)))?;

        Ok(Self::new(client.database(database_name)))
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.database.name()
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<ObjectId> {
        let result = self.collection(collection).insert_one(doc).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::backend(format!(
                "Inserted id {} in '{}' is not an ObjectId",
                result.inserted_id, collection
            ))
        })
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>> {
        let collection = self.collection(collection);
        let mut find = collection.find(filter);
        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        let docs: Vec<Document> = find.await?.try_collect().await?;
        Ok(docs)
    }

    async fn find_one_by_id(&self, collection: &str, id: &ObjectId) -> Result<Option<Document>> {
        let doc = self.collection(collection).find_one(doc! { "_id": *id }).await?;
        Ok(doc)
    }

    async fn delete_one_by_id(&self, collection: &str, id: &ObjectId) -> Result<bool> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": *id })
            .await?;
        Ok(result.deleted_count == 1)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let names = self.database.list_collection_names().await?;
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let result = MongoStore::connect("not-a-uri", "cards").await;

        match result {
            Err(StoreError::Backend(msg)) => {
                assert!(msg.starts_with("Failed to create MongoDB client"))
            }
            other => panic!("Expected Backend error, got {:?}", other.map(|_| ())),
        }
    }

    // Requires a running MongoDB reachable through DATABASE_URL
    #[tokio::test]
    #[ignore]
    async fn test_mongo_store_roundtrip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let store = MongoStore::connect(&url, "cardforge_test").await.unwrap();
        assert_eq!(store.name(), "cardforge_test");

        let collection = format!("template_{}", ObjectId::new().to_hex());

        let id = store
            .insert_one(&collection, doc! { "name": "Badge1", "data": { "w": 100 } })
            .await
            .unwrap();
        store
            .insert_one(&collection, doc! { "name": "Badge2" })
            .await
            .unwrap();

        let found = store.find_one_by_id(&collection, &id).await.unwrap().unwrap();
        assert_eq!(found.get_str("name").unwrap(), "Badge1");
        assert_eq!(found.get_object_id("_id").unwrap(), id);

        let limited = store
            .find_many(&collection, Document::new(), Some(1))
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);

        let filtered = store
            .find_many(&collection, doc! { "name": "Badge2" }, None)
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);

        assert!(store
            .list_collection_names()
            .await
            .unwrap()
            .contains(&collection));

        assert!(store.delete_one_by_id(&collection, &id).await.unwrap());
        assert!(!store.delete_one_by_id(&collection, &id).await.unwrap());
        assert!(store.find_one_by_id(&collection, &id).await.unwrap().is_none());

        store.database.collection::<Document>(&collection).drop().await.unwrap();
    }
}
