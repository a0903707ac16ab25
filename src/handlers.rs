use crate::error::AppError;
use crate::models::{object_url, FileRecord, NewFileRecord};
use crate::store::{MetadataStore, ObjectStore};
use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub objects: Arc<dyn ObjectStore>,
    pub metadata: Arc<dyn MetadataStore>,
    pub storage_url: String,
}

/// Single endpoint, dispatched on method. Verbs other than POST/GET get a
/// 405 from the method router without any body parsing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/storage", post(upload_file).get(list_files))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadRequest {
    file_name: Option<String>,
    file_content: Option<String>,
    file_type: Option<String>,
    uploader_id: Option<String>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    message: String,
    file_url: String,
}

#[derive(Serialize)]
pub struct FileListing {
    files: Vec<FileRecord>,
}

pub async fn upload_file(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<UploadResponse>, AppError> {
    // An absent body is treated as an empty object, so it fails field
    // validation (400) rather than JSON parsing (500).
    let request: UploadRequest = if body.is_empty() {
        UploadRequest::default()
    } else {
        serde_json::from_str(&body).map_err(|err| AppError::Unexpected(err.to_string()))?
    };

    let (Some(file_name), Some(file_content), Some(file_type), Some(uploader_id)) = (
        request.file_name,
        request.file_content,
        request.file_type,
        request.uploader_id,
    ) else {
        return Err(AppError::MissingFields);
    };

    let bytes = BASE64
        .decode(file_content.as_bytes())
        .map_err(|err| AppError::Unexpected(err.to_string()))?;

    // Object write first; the metadata insert only runs if it succeeded. An
    // insert failure after a successful write leaves the object in place.
    let key = format!("{}/{}", uploader_id, file_name);
    state.objects.put_object(&key, bytes, &file_type).await?;

    let file_url = object_url(&state.storage_url, &uploader_id, &file_name);
    state
        .metadata
        .insert_record(NewFileRecord {
            uploader_id: &uploader_id,
            file_name: &file_name,
            file_type: &file_type,
            file_url: &file_url,
        })
        .await?;

    Ok(Json(UploadResponse {
        message: "File uploaded".to_string(),
        file_url,
    }))
}

pub async fn list_files(State(state): State<AppState>) -> Result<Json<FileListing>, AppError> {
    let mut files = state.metadata.list_records().await?;

    for record in &mut files {
        record.file_url = object_url(&state.storage_url, &record.uploader_id, &record.file_name);
    }

    Ok(Json(FileListing { files }))
}
