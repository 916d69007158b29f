//! Helpers for turning stored BSON documents into public JSON

use bson::{Bson, DateTime, Document};
use serde_json::{Map, Value};

/// Name of the internal identifier field
pub const ID_FIELD: &str = "_id";

/// Name of the public identifier field
pub const PUBLIC_ID_FIELD: &str = "id";

/// Current time as a BSON datetime (millisecond precision)
pub fn now() -> DateTime {
    DateTime::from_time_0_3(time::OffsetDateTime::now_utc())
}

/// Render a stored document as public JSON.
///
/// The internal `_id` is removed and re-added as a string `id`. Datetimes
/// become RFC 3339 strings, nested documents and arrays are rendered
/// recursively.
pub fn to_public_json(mut doc: Document) -> Value {
    let id = doc.remove(ID_FIELD);

    let mut map = match bson_to_json(Bson::Document(doc)) {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    if let Some(id) = id {
        let id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        map.insert(PUBLIC_ID_FIELD.to_string(), Value::String(id));
    }

    Value::Object(map)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(k, v)| (k, bson_to_json(v)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
