//! HTTP handlers for the food logging API

use axum::extract::{Multipart, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::services::enrichment::{enrich, EnrichedClassification};
use crate::FoodState;

struct ImageUpload {
    filename: String,
    data: Vec<u8>,
}

/// Classify an uploaded food photo and enrich it with nutrition estimates.
///
/// Always returns a complete nutrition record on success: enrichment-source
/// failures are absorbed into fallback values, so only a missing upload or a
/// missing model produce error responses.
pub async fn predict(
    State(state): State<FoodState>,
    mut multipart: Multipart,
) -> AppResult<Json<EnrichedClassification>> {
    let mut upload: Option<ImageUpload> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("image") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read image: {}", e)))?;
            upload = Some(ImageUpload {
                filename,
                data: data.to_vec(),
            });
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("No image uploaded".to_string()))?;

    let classifier = state.classifier.as_ref().ok_or(AppError::ModelUnavailable)?;

    if upload.filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    let classification = classifier.classify(&upload.data).await?;
    tracing::info!(
        food = %classification.label,
        confidence = classification.confidence,
        "Image classified"
    );

    let result = enrich(classification, &state.gemini).await;
    Ok(Json(result))
}
