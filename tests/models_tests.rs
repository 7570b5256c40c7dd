//! Data model unit tests

use serde_json::json;
use tripplanner::models::gemini::*;
use tripplanner::models::trip::*;

fn full_itinerary_json() -> serde_json::Value {
    json!({
        "tripTitle": "A Wonderful 3-Day Trip to Goa",
        "totalEstimatedCost": 19500,
        "itinerary": [
            {
                "day": 1,
                "theme": "Arrival & Local Exploration",
                "activities": [
                    {
                        "time": "Morning",
                        "activity": "Baga Beach",
                        "description": "Relax on the sand",
                        "estimatedCost": 0
                    },
                    {
                        "time": "2:00 PM",
                        "activity": "Fort Aguada",
                        "description": "Portuguese-era fort with sea views",
                        "estimatedCost": 100
                    }
                ],
                "dailyTotalCost": 2100
            }
        ],
        "accommodationSuggestion": {
            "type": "Boutique Homestay",
            "name": "Casa Menezes",
            "estimatedCostPerNight": 2800
        },
        "summary": "A compact coastal trip."
    })
}

#[test]
fn test_itinerary_round_trip() {
    let itinerary: Itinerary = serde_json::from_value(full_itinerary_json()).unwrap();

    assert_eq!(itinerary.trip_title, "A Wonderful 3-Day Trip to Goa");
    assert_eq!(itinerary.total_estimated_cost, 19500.0);
    assert_eq!(itinerary.itinerary[0].activities.len(), 2);
    assert_eq!(itinerary.itinerary[0].activities[1].time, "2:00 PM");
    assert_eq!(itinerary.accommodation_suggestion.name, "Casa Menezes");

    // Serializing back reproduces the client-facing key names
    let value = serde_json::to_value(&itinerary).unwrap();
    assert!(value.get("tripTitle").is_some());
    assert!(value.get("totalEstimatedCost").is_some());
    assert!(value["accommodationSuggestion"].get("type").is_some());
    assert!(value["accommodationSuggestion"].get("estimatedCostPerNight").is_some());
    assert!(value["itinerary"][0].get("dailyTotalCost").is_some());
    assert_eq!(value["itinerary"][0]["activities"][0]["time"], "Morning");
}

#[test]
fn test_itinerary_requires_all_top_level_fields() {
    for field in [
        "tripTitle",
        "totalEstimatedCost",
        "itinerary",
        "accommodationSuggestion",
        "summary",
    ] {
        let mut value = full_itinerary_json();
        value.as_object_mut().unwrap().remove(field);

        let result: Result<Itinerary, _> = serde_json::from_value(value);
        assert!(result.is_err(), "expected missing {} to fail", field);
    }
}

#[test]
fn test_activity_requires_numeric_cost() {
    let mut value = full_itinerary_json();
    value["itinerary"][0]["activities"][0]["estimatedCost"] = json!("free");

    let result: Result<Itinerary, _> = serde_json::from_value(value);
    assert!(result.is_err());
}

#[test]
fn test_itinerary_ignores_extra_fields() {
    let mut value = full_itinerary_json();
    value["travelTips"] = json!(["Carry sunscreen"]);

    let result: Result<Itinerary, _> = serde_json::from_value(value);
    assert!(result.is_ok());
}

#[test]
fn test_trip_request_round_trip() {
    let request = TripRequest {
        destination: "Jaipur".to_string(),
        budget: "30000".to_string(),
        days: "4".to_string(),
        interests: "history, food".to_string(),
    };

    let json_text = serde_json::to_string(&request).unwrap();
    let deserialized: TripRequest = serde_json::from_str(&json_text).unwrap();

    assert_eq!(request.destination, deserialized.destination);
    assert_eq!(request.budget, deserialized.budget);
    assert_eq!(request.days, deserialized.days);
    assert_eq!(request.interests, deserialized.interests);
}

#[test]
fn test_gemini_request_wire_shape() {
    let request = GenerateContentRequest::from_prompt("plan a trip to Goa");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["contents"][0]["parts"][0]["text"], "plan a trip to Goa");
}

#[test]
fn test_gemini_response_text_extraction() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {"parts": [{"text": "{\"ok\":true}"}]},
            "finishReason": "STOP"
        }]
    }))
    .unwrap();

    assert_eq!(response.text().as_deref(), Some("{\"ok\":true}"));
}

#[test]
fn test_gemini_blocked_response_has_no_text() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"finishReason": "SAFETY"}]
    }))
    .unwrap();

    assert!(response.text().is_none());
}
