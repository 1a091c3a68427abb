use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppError, middleware::AdminSession, state::AppState};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

// Keep only a short alphanumeric extension from the client's filename.
fn safe_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .take(8)
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "bin".to_string())
}

/// POST /upload
///
/// Accepts a multipart form with a `file` part, stores it under the
/// configured uploads directory with a fresh UUID filename, and returns
/// the public URL it will be served from.
pub async fn upload_image(
    State(state): State<AppState>,
    _session: AdminSession,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::ValidationError("Invalid multipart payload".to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // Validate file type
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(AppError::ValidationError(
                "File must be an image".to_string(),
            ));
        }

        let ext = safe_extension(field.file_name());
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::ValidationError("Invalid multipart payload".to_string()))?;

        let filename = format!("{}.{}", Uuid::new_v4(), ext);
        tokio::fs::create_dir_all(&state.uploads_dir).await?;
        tokio::fs::write(state.uploads_dir.join(&filename), &bytes).await?;

        tracing::info!(%filename, size = bytes.len(), "image uploaded");
        return Ok(Json(UploadResponse {
            url: format!("/uploads/{}", filename),
        }));
    }

    Err(AppError::ValidationError("No file uploaded".to_string()))
}
