//! Template-related API models

use cardforge_store::bson::{self, DateTime, Document, doc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// Collection holding template records
pub const TEMPLATE_COLLECTION: &str = "template";

/// Field used to order template listings
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Template payload accepted on creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRequest {
    pub name: String,

    /// Data URL for a preview thumbnail
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Full design payload: background, elements, card size, dpi, bindings
    #[serde(default)]
    pub data: Map<String, Value>,

    /// Accepted for shape compatibility, overwritten on insert
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,

    /// Accepted for shape compatibility, overwritten on insert
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl TemplateRequest {
    /// Build the stored document, stamping both timestamps with `now`
    pub fn into_document(self, now: DateTime) -> cardforge_store::Result<Document> {
        Ok(doc! {
            "name": self.name,
            "thumbnail": self.thumbnail,
            "data": bson::to_bson(&self.data)?,
            "created_at": now,
            UPDATED_AT_FIELD: now,
        })
    }
}

/// Response to a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Response to a delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Order templates newest first by `updated_at`.
///
/// Records without a datetime `updated_at` sort as the oldest. The sort is
/// stable, so ties keep store order.
pub fn sort_by_updated_desc(docs: &mut [Document]) {
    fn updated_at(doc: &Document) -> i64 {
        doc.get_datetime(UPDATED_AT_FIELD)
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(i64::MIN)
    }

    docs.sort_by(|a, b| updated_at(b).cmp(&updated_at(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.get_str("name").unwrap()).collect()
    }

    #[test]
    fn test_into_document_stamps_same_instant() {
        let request: TemplateRequest = serde_json::from_value(json!({
            "name": "Badge1",
            "data": { "w": 100, "elements": [] },
            "created_at": "2001-01-01T00:00:00Z"
        }))
        .unwrap();

        let now = DateTime::from_millis(1_700_000_000_000);
        let doc = request.into_document(now).unwrap();

        assert_eq!(doc.get_str("name").unwrap(), "Badge1");
        assert_eq!(doc.get("thumbnail"), Some(&bson::Bson::Null));
        assert_eq!(*doc.get_datetime("created_at").unwrap(), now);
        assert_eq!(*doc.get_datetime("updated_at").unwrap(), now);
        assert_eq!(doc.get_document("data").unwrap().get_i64("w").unwrap(), 100);
    }

    #[test]
    fn test_request_defaults() {
        let request: TemplateRequest = serde_json::from_value(json!({ "name": "Empty" })).unwrap();
        assert!(request.thumbnail.is_none());
        assert!(request.data.is_empty());
        assert!(request.created_at.is_none());
    }

    #[test]
    fn test_sort_newest_first_missing_last() {
        let mut docs = vec![
            doc! { "name": "legacy" },
            doc! { "name": "old", "updated_at": DateTime::from_millis(1_000) },
            doc! { "name": "new", "updated_at": DateTime::from_millis(2_000) },
            doc! { "name": "text", "updated_at": "yesterday" },
        ];

        sort_by_updated_desc(&mut docs);

        assert_eq!(names(&docs), ["new", "old", "legacy", "text"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let at = DateTime::from_millis(5_000);
        let mut docs = vec![
            doc! { "name": "first", "updated_at": at },
            doc! { "name": "second", "updated_at": at },
        ];

        sort_by_updated_desc(&mut docs);

        assert_eq!(names(&docs), ["first", "second"]);
    }
}
