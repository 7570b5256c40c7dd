//! Itinerary planning service
//!
//! Builds the prompt from a trip request, calls the Gemini client, and
//! sanitizes the returned text into a typed itinerary

use crate::config::Settings;
use crate::models::trip::{Itinerary, TripRequest};
use crate::services::client::GeminiClient;
use crate::utils::error::{AppError, AppResult};
use anyhow::Result;
use tracing::{debug, info};

/// Itinerary planner backed by the Gemini client
#[derive(Debug, Clone)]
pub struct ItineraryPlanner {
    client: GeminiClient,
}

impl ItineraryPlanner {
    /// Create a new planner instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = GeminiClient::new(settings)?;
        Ok(Self { client })
    }

    /// Generate an itinerary for the given trip request
    ///
    /// Any failure along the way (transport, provider error, unusable
    /// output) surfaces as an AppError and collapses to the uniform 500
    /// at the HTTP boundary.
    pub async fn generate(&self, request: &TripRequest) -> AppResult<Itinerary> {
        info!(
            "Generating itinerary: destination={}, days={}, budget=INR {}",
            request.destination, request.days, request.budget
        );

        let prompt = build_prompt(request);
        let raw_text = self.client.generate_content(&prompt).await?;

        let cleaned = strip_code_fences(&raw_text);
        debug!("Sanitized provider output: {} chars", cleaned.len());

        parse_itinerary(&cleaned)
    }
}

/// Build the prompt sent to the model
///
/// The prompt states the assistant's role, embeds the four request fields
/// as plain text, demands a bare JSON object, and inlines the exact target
/// schema so the model has a concrete template to follow.
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        r#"You are an expert travel planner specializing in creating personalized itineraries in India.
Your goal is to generate a detailed, day-by-day travel plan based on user preferences.
The output MUST be a valid JSON object, with no markdown formatting or any text outside the JSON structure.

User Preferences:
- Destination: {destination}
- Trip Duration: {days} days
- Total Budget: INR {budget}
- Key Interests: {interests}

JSON Output Structure Requirements:
{{
  "tripTitle": "A Wonderful X-Day Trip to [Destination]",
  "totalEstimatedCost": <total_estimated_cost_in_inr>,
  "itinerary": [
    {{
      "day": 1,
      "theme": "<A theme for the day, e.g., 'Arrival & Local Exploration'>",
      "activities": [
        {{
          "time": "<e.g., 'Morning' or '2:00 PM'>",
          "activity": "<Name of the activity>",
          "description": "<A brief, engaging description of the activity>",
          "estimatedCost": <cost_in_inr>
        }}
      ],
      "dailyTotalCost": <estimated_cost_for_the_day>
    }}
  ],
  "accommodationSuggestion": {{
    "type": "<e.g., 'Mid-Range Hotel' or 'Boutique Homestay'>",
    "name": "<A suggested name>",
    "estimatedCostPerNight": <cost_in_inr>
  }},
  "summary": "<A concluding summary of the trip plan>"
}}"#,
        destination = request.destination,
        days = request.days,
        budget = request.budget,
        interests = request.interests,
    )
}

/// Strip markdown code-fence markers and trim surrounding whitespace
///
/// Idempotent: already-clean input passes through unchanged.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse sanitized text into a typed itinerary
///
/// Deserialization enforces the response contract (required fields and
/// numeric costs); anything else is invalid output.
fn parse_itinerary(text: &str) -> AppResult<Itinerary> {
    serde_json::from_str(text).map_err(|e| {
        AppError::InvalidOutput(format!("Provider output is not a valid itinerary: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> TripRequest {
        TripRequest {
            destination: "Goa".to_string(),
            budget: "20000".to_string(),
            days: "3".to_string(),
            interests: "beaches, food".to_string(),
        }
    }

    fn sample_itinerary_text() -> String {
        serde_json::json!({
            "tripTitle": "A Wonderful 3-Day Trip to Goa",
            "totalEstimatedCost": 19500,
            "itinerary": [{
                "day": 1,
                "theme": "Beaches",
                "activities": [{
                    "time": "Morning",
                    "activity": "Baga Beach",
                    "description": "Sun and sand",
                    "estimatedCost": 0
                }],
                "dailyTotalCost": 2500
            }],
            "accommodationSuggestion": {
                "type": "Mid-Range Hotel",
                "name": "Hotel Sea Breeze",
                "estimatedCostPerNight": 3500
            },
            "summary": "A coastal getaway."
        })
        .to_string()
    }

    #[test]
    fn test_prompt_embeds_request_fields() {
        let prompt = build_prompt(&sample_request());

        assert!(prompt.contains("- Destination: Goa"));
        assert!(prompt.contains("- Trip Duration: 3 days"));
        assert!(prompt.contains("- Total Budget: INR 20000"));
        assert!(prompt.contains("- Key Interests: beaches, food"));
    }

    #[test]
    fn test_prompt_demands_bare_json_and_inlines_schema() {
        let prompt = build_prompt(&sample_request());

        assert!(prompt.contains("MUST be a valid JSON object"));
        assert!(prompt.contains("\"tripTitle\""));
        assert!(prompt.contains("\"accommodationSuggestion\""));
        assert!(prompt.contains("\"dailyTotalCost\""));
        assert!(prompt.contains("\"estimatedCostPerNight\""));
    }

    #[test]
    fn test_strip_code_fences() {
        let fenced = format!("```json\n{}\n```", sample_itinerary_text());
        assert_eq!(strip_code_fences(&fenced), sample_itinerary_text());

        // Bare fences without a language tag
        let bare = format!("```\n{}\n```", sample_itinerary_text());
        assert_eq!(strip_code_fences(&bare), sample_itinerary_text());
    }

    #[test]
    fn test_strip_code_fences_idempotent_on_clean_input() {
        let clean = sample_itinerary_text();
        let once = strip_code_fences(&clean);
        let twice = strip_code_fences(&once);

        assert_eq!(once, clean);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_parse_itinerary_valid() {
        let itinerary = parse_itinerary(&sample_itinerary_text()).unwrap();
        assert_eq!(itinerary.trip_title, "A Wonderful 3-Day Trip to Goa");
        assert_eq!(itinerary.itinerary.len(), 1);
    }

    #[test]
    fn test_parse_itinerary_rejects_non_json() {
        let result = parse_itinerary("Sorry, I cannot plan this trip.");
        assert!(matches!(result, Err(AppError::InvalidOutput(_))));
    }

    #[test]
    fn test_parse_itinerary_rejects_wrong_shape() {
        // Valid JSON, wrong contract
        let result = parse_itinerary(r#"{"tripTitle": "Goa"}"#);
        assert!(matches!(result, Err(AppError::InvalidOutput(_))));
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let fenced = format!("```json\n{}\n```", sample_itinerary_text());

        let from_fenced = parse_itinerary(&strip_code_fences(&fenced)).unwrap();
        let from_clean = parse_itinerary(&sample_itinerary_text()).unwrap();

        assert_eq!(from_fenced.trip_title, from_clean.trip_title);
        assert_eq!(from_fenced.total_estimated_cost, from_clean.total_estimated_cost);
        assert_eq!(from_fenced.itinerary.len(), from_clean.itinerary.len());
    }
}
