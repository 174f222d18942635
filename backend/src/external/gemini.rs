//! Gemini text-generation client
//!
//! Used by the nutrition enrichment pipeline to ask for portion and calorie
//! estimates. Every call is attempted exactly once with a bounded timeout;
//! any failure is returned as an error for the caller to absorb into
//! fallback values.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Request payload for generateContent
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Response payload from generateContent
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiClient {
    /// Create a new GeminiClient from configuration
    pub fn new(config: &GeminiConfig) -> Self {
        Self::with_base_url(
            config.api_key.clone(),
            config.api_url.clone(),
            config.timeout_secs,
        )
    }

    /// Create a new GeminiClient with a custom endpoint (for testing)
    pub fn with_base_url(api_key: String, base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Send a prompt and return the reply text of the first candidate.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}?key={}", self.base_url, self.api_key);
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::TextGeneration(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::TextGeneration(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::TextGeneration(format!("Failed to parse response: {}", e)))?;

        data.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| AppError::TextGeneration("Response contained no reply text".to_string()))
    }
}
