//! Conversion between public string ids and store-native ObjectIds

use bson::oid::ObjectId;

use crate::error::{Result, StoreError};

/// Parse a public id string into a store-native [`ObjectId`].
///
/// Accepts exactly 24 hexadecimal characters; anything else is
/// [`StoreError::InvalidId`].
pub fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| StoreError::InvalidId {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_roundtrips_hex() {
        let oid = ObjectId::new();
        let parsed = parse_id(&oid.to_hex()).unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn test_parse_id_rejects_malformed() {
        for bad in ["", "not-an-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            match parse_id(bad) {
                Err(StoreError::InvalidId { id, .. }) => assert_eq!(id, bad),
                other => panic!("Expected InvalidId for {bad:?}, got {other:?}"),
            }
        }
    }
}
