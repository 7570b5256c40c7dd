//! HTTP client service
//!
//! Encapsulates HTTP communication with the Gemini generateContent API

use crate::config::Settings;
use crate::models::gemini::*;
use crate::utils::error::{AppError, AppResult};
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    settings: Settings,
}

impl GeminiClient {
    /// Create a new client instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.gemini.timeout))
            .user_agent("tripplanner/0.1.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    /// Build the generateContent request URL
    fn build_url(&self) -> String {
        let base_url = self.settings.gemini.base_url.trim_end_matches('/');
        format!("{}/models/{}:generateContent", base_url, self.settings.gemini.model)
    }

    /// Send a prompt and await the full generated text (no streaming)
    pub async fn generate_content(&self, prompt: &str) -> AppResult<String> {
        debug!("Sending Gemini generateContent request");

        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.build_url())
            .header("x-goog-api-key", &self.settings.gemini.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle HTTP response
    async fn handle_response(&self, response: Response) -> AppResult<String> {
        let status = response.status();

        if status.is_success() {
            let gemini_response: GenerateContentResponse = response
                .json()
                .await
                .map_err(|e| AppError::Provider(format!("Failed to parse Gemini response: {}", e)))?;

            let text = gemini_response
                .text()
                .ok_or_else(|| AppError::Provider("Gemini response contained no text".to_string()))?;

            debug!("Gemini request completed successfully ({} chars)", text.len());
            Ok(text)
        } else {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as Gemini error format
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_text) {
                error!("Gemini API error: {:?}", error_response.error);
                Err(AppError::Provider(format!(
                    "Gemini API error: {}",
                    error_response.error.message
                )))
            } else {
                error!("Gemini API request failed: {} - {}", status, error_text);
                Err(AppError::Provider(format!(
                    "Gemini API request failed: {} - {}",
                    status, error_text
                )))
            }
        }
    }
}
