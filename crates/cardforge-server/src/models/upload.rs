//! Upload-related API models

use base64::{Engine as _, engine::general_purpose::STANDARD};
use cardforge_store::bson::{DateTime, Document, doc};
use serde::{Deserialize, Serialize};

/// Collection holding uploaded files
pub const UPLOAD_COLLECTION: &str = "upload";

/// MIME type assumed when the upload does not declare one
pub const DEFAULT_UPLOAD_MIME: &str = "image/png";

/// Encode bytes as a `data:<mime>;base64,<payload>` URL
pub fn encode_data_url(mime: &str, content: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(content))
}

/// A stored upload before it is assigned an id
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub name: Option<String>,
    pub data_url: String,
}

impl NewUpload {
    pub fn new(name: Option<String>, mime: Option<&str>, content: &[u8]) -> Self {
        Self {
            name,
            data_url: encode_data_url(mime.unwrap_or(DEFAULT_UPLOAD_MIME), content),
        }
    }

    pub fn to_document(&self, now: DateTime) -> Document {
        doc! {
            "name": self.name.clone(),
            "data_url": self.data_url.clone(),
            "created_at": now,
        }
    }
}

/// Response to a successful upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub name: Option<String>,
    pub data_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_roundtrips_bytes() {
        let content = [0x89, b'P', b'N', b'G', 0x00, 0xff];
        let url = encode_data_url("image/webp", &content);

        let payload = url.strip_prefix("data:image/webp;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), content);
    }

    #[test]
    fn test_new_upload_defaults_mime() {
        let upload = NewUpload::new(Some("logo".into()), None, b"abc");
        assert_eq!(upload.data_url, "data:image/png;base64,YWJj");

        let doc = upload.to_document(DateTime::from_millis(0));
        assert_eq!(doc.get_str("name").unwrap(), "logo");
        assert_eq!(doc.get_str("data_url").unwrap(), "data:image/png;base64,YWJj");
        assert!(doc.get_datetime("created_at").is_ok());
    }

    #[test]
    fn test_unnamed_upload_stores_null() {
        let doc = NewUpload::new(None, Some("text/plain"), b"").to_document(DateTime::now());
        assert!(doc.is_null("name"));
        assert_eq!(doc.get_str("data_url").unwrap(), "data:text/plain;base64,");
    }
}
