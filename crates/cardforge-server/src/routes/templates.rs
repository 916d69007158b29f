//! Template management routes

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{
        CreatedResponse, DeleteResponse, TEMPLATE_COLLECTION, TemplateRequest,
        sort_by_updated_desc,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use cardforge_store::{
    bson::Document,
    document::{self, to_public_json},
    parse_id,
};
use serde_json::Value;
use tracing::{debug, error, info};

/// Create template routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates).post(create_template))
        .route("/{template_id}", get(get_template).delete(delete_template))
}

/// Store a new template, stamping its timestamps
async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<TemplateRequest>,
) -> Result<Json<CreatedResponse>> {
    info!("Creating template: {}", request.name);

    let store = state.store()?;
    let doc = request.into_document(document::now())?;

    let id = store
        .insert_one(TEMPLATE_COLLECTION, doc)
        .await
        .map_err(|e| {
            error!("Failed to create template: {}", e);
            e
        })?;

    Ok(Json(CreatedResponse { id: id.to_hex() }))
}

/// List every template, most recently updated first
async fn list_templates(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    debug!("Listing templates");

    let store = state.store()?;
    let mut docs = store
        .find_many(TEMPLATE_COLLECTION, Document::new(), None)
        .await
        .map_err(|e| {
            error!("Failed to list templates: {}", e);
            e
        })?;

    sort_by_updated_desc(&mut docs);

    Ok(Json(docs.into_iter().map(to_public_json).collect()))
}

/// Get a single template by id
async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<Value>> {
    debug!("Getting template: {}", template_id);

    let id = parse_id(&template_id)?;
    let doc = state
        .store()?
        .find_one_by_id(TEMPLATE_COLLECTION, &id)
        .await?
        .ok_or_else(ApiError::template_not_found)?;

    Ok(Json(to_public_json(doc)))
}

/// Delete a template by id; absent ids report `deleted: false`
async fn delete_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    info!("Deleting template: {}", template_id);

    let id = parse_id(&template_id)?;
    let deleted = state
        .store()?
        .delete_one_by_id(TEMPLATE_COLLECTION, &id)
        .await?;

    Ok(Json(DeleteResponse { deleted }))
}
