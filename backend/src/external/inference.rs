//! Classification model serving client
//!
//! Client for the hosted food-101 image classification model. The model
//! returns a class index which is mapped through the shared label table.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{Classification, FOOD_LABELS};

use crate::classifier::FoodClassifier;
use crate::config::InferenceConfig;
use crate::error::{AppError, AppResult};

/// Client for the food classification model serving endpoint
#[derive(Clone)]
pub struct InferenceClient {
    endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to classify an image
#[derive(Debug, Serialize)]
struct ClassifyRequest {
    image_base64: String,
}

/// Response from the model serving endpoint
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    class_index: usize,
    confidence: f32,
}

impl InferenceClient {
    /// Create a new inference client
    pub fn new(endpoint: String, api_key: String) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            http_client,
        }
    }

    /// Create a client from configuration.
    ///
    /// Returns None when no endpoint is configured so the food API can start
    /// and report the model as unavailable.
    pub fn from_config(config: &InferenceConfig) -> Option<Self> {
        if config.endpoint.is_empty() {
            return None;
        }
        Some(Self::new(config.endpoint.clone(), config.api_key.clone()))
    }
}

#[async_trait]
impl FoodClassifier for InferenceClient {
    async fn classify(&self, image: &[u8]) -> AppResult<Classification> {
        let request = ClassifyRequest {
            image_base64: STANDARD.encode(image),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Inference(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| AppError::Inference(format!("Failed to parse response: {}", e)))?;

        let label = FOOD_LABELS
            .get(result.class_index)
            .ok_or_else(|| {
                AppError::Inference(format!("Unknown class index {}", result.class_index))
            })?
            .to_string();

        Ok(Classification {
            label,
            confidence: result.confidence,
        })
    }
}
