//! Upload routes

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{NewUpload, UPLOAD_COLLECTION, UploadResponse},
};
use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartError},
    routing::post,
};
use cardforge_store::document;
use tracing::{error, info};

/// Multipart part carrying the file
const FILE_FIELD: &str = "file";

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload_file))
}

fn read_error(e: MultipartError) -> ApiError {
    error!("Failed to read upload: {}", e);
    ApiError::Internal(e.body_text())
}

/// Store an uploaded file as a base64 data URL
async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let store = state.store()?;

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().map(str::to_string);
        let mime = field
            .content_type()
            .filter(|mime| !mime.is_empty())
            .map(str::to_string);
        let content = field.bytes().await.map_err(read_error)?;

        info!(
            "Uploading {:?} ({} bytes, {})",
            name,
            content.len(),
            mime.as_deref().unwrap_or("no content type")
        );

        let upload = NewUpload::new(name, mime.as_deref(), &content);
        let id = store
            .insert_one(UPLOAD_COLLECTION, upload.to_document(document::now()))
            .await
            .map_err(|e| {
                error!("Failed to store upload: {}", e);
                e
            })?;

        return Ok(Json(UploadResponse {
            id: id.to_hex(),
            name: upload.name,
            data_url: upload.data_url,
        }));
    }

    Err(ApiError::bad_request("Missing 'file' field in multipart body"))
}
