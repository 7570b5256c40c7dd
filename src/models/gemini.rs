//! Gemini API data models
//!
//! Defines the generateContent request and response structures

use serde::{Deserialize, Serialize};

/// generateContent request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation contents, a single user turn for this service
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn request from a prompt string
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.into() }],
            }],
        }
    }
}

/// A content turn made of text parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A single text part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// generateContent response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates; empty when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate
    ///
    /// Returns None when there is no candidate or the candidate carries
    /// no content (e.g. blocked by a safety filter).
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }

        Some(
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

/// A generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content; absent when generation was stopped early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Reason generation finished (e.g. "STOP", "SAFETY")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Gemini API error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiError,
}

/// Error detail inside a Gemini error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiError {
    /// HTTP status code echoed by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable error message
    pub message: String,
    /// Status string (e.g. "RESOURCE_EXHAUSTED")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
