mod common;

use common::{designer, ScriptedInput};
use serde_json::json;
use wayfarer_cli::designer::{BOOKING_INSTRUCTIONS, DESTINATION_INSTRUCTIONS, EXPLORE_INSTRUCTIONS};
use wayfarer_cli::{run_with, CliError, Stage};
use wayfarer_core::test_utils::MockProvider;
use wayfarer_core::{AgentError, ContentBlock, ProviderError};
use wayfarer_tools::travel::GetFlightsTool;

#[tokio::test]
async fn test_destination_called_once_with_mood() {
    let provider = MockProvider::new()
        .with_text("Maldives")
        .with_text("Flights and hotels")
        .with_text("Snorkelling");

    designer(&provider).plan("relaxing", |_, _| {}).await.unwrap();

    let requests = provider.requests();
    let destination_calls: Vec<_> = requests
        .iter()
        .filter(|r| r.system_prompt.as_deref() == Some(DESTINATION_INSTRUCTIONS))
        .collect();
    assert_eq!(destination_calls.len(), 1);
    assert_eq!(destination_calls[0].messages.len(), 1);
    assert_eq!(destination_calls[0].messages[0].text(), "relaxing");
    assert!(destination_calls[0].tool_names.is_empty());
}

#[tokio::test]
async fn test_trimmed_destination_reaches_both_later_stages() {
    let provider = MockProvider::new()
        .with_text("\n  Lisbon, Portugal \n")
        .with_text("Flights and hotels")
        .with_text("Pastéis de nata");

    let itinerary = designer(&provider).plan("city break", |_, _| {}).await.unwrap();
    assert_eq!(itinerary.destination, "Lisbon, Portugal");

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);

    assert_eq!(requests[1].system_prompt.as_deref(), Some(BOOKING_INSTRUCTIONS));
    assert_eq!(requests[1].messages[0].text(), "Lisbon, Portugal");

    assert_eq!(requests[2].system_prompt.as_deref(), Some(EXPLORE_INSTRUCTIONS));
    assert_eq!(requests[2].messages[0].text(), "Lisbon, Portugal");
}

#[tokio::test]
async fn test_booking_stage_offers_exactly_two_tools() {
    let provider = MockProvider::new()
        .with_text("Oslo")
        .with_text("Booked")
        .with_text("Fjords");

    designer(&provider).plan("cold", |_, _| {}).await.unwrap();

    let requests = provider.requests();
    assert_eq!(
        requests[1].tool_names,
        vec!["get_flights".to_string(), "suggest_hotels".to_string()]
    );
    assert!(requests[2].tool_names.is_empty());
}

#[tokio::test]
async fn test_booking_tool_results_go_back_to_the_model() {
    let provider = MockProvider::new()
        .with_text("Patagonia")
        .with_tool_use("get_flights", json!({"destination": "Patagonia"}))
        .with_text("Fly with Sky Airline, stay at the lodge")
        .with_text("Hike Torres del Paine");

    let itinerary = designer(&provider).plan("adventure", |_, _| {}).await.unwrap();
    assert_eq!(itinerary.booking, "Fly with Sky Airline, stay at the lodge");

    let requests = provider.requests();
    assert_eq!(requests.len(), 4);

    let follow_up = &requests[2].messages;
    assert_eq!(follow_up.len(), 3);
    let result = follow_up[2]
        .content
        .iter()
        .find_map(|block| match block {
            ContentBlock::ToolResult(result) => Some(result.content.as_text()),
            _ => None,
        })
        .unwrap();
    assert_eq!(result, GetFlightsTool::listing("Patagonia"));

    assert_eq!(requests[3].messages[0].text(), "Patagonia");
}

#[tokio::test]
async fn test_failure_stops_later_stages() {
    let cases = [
        (Stage::Destination, 1),
        (Stage::Booking, 2),
        (Stage::Explore, 3),
    ];

    for (failing, expected_calls) in cases {
        let mut provider = MockProvider::new();
        for stage in Stage::ALL {
            provider = if stage == failing {
                provider.with_error(ProviderError::Network("connection reset".into()))
            } else {
                provider.with_text("Bruges")
            };
        }

        let mut seen = Vec::new();
        let err = designer(&provider)
            .plan("quiet", |stage, _| seen.push(stage))
            .await
            .unwrap_err();

        assert_eq!(err.stage, failing);
        assert!(matches!(
            err.source,
            AgentError::Provider(ProviderError::Network(_))
        ));
        assert_eq!(provider.call_count(), expected_calls);
        assert_eq!(seen.len(), expected_calls - 1);
    }
}

#[tokio::test]
async fn test_end_to_end_output_order() {
    let provider = MockProvider::new()
        .with_text("Patagonia\n")
        .with_tool_use("suggest_hotels", json!({"destination": "Patagonia"}))
        .with_text("Hotels booked")
        .with_text("Asado and glaciers");
    let designer = designer(&provider);
    let mut input = ScriptedInput::new(&["", "adventure"]);
    let mut out = Vec::new();

    let itinerary = run_with(&designer, &mut input, &mut out)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(input.prompts, 2);
    assert_eq!(itinerary.destination, "Patagonia");
    assert_eq!(provider.requests()[0].messages[0].text(), "adventure");

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed,
        "🌍 Welcome to AI Travel Designer!\n\n\
         \n✈️ Destination Suggested: Patagonia\n\
         \n🏨 Booking Info:\nHotels booked\n\
         \n🍽️ Explore Suggestions:\nAsado and glaciers\n"
    );
}

#[tokio::test]
async fn test_end_of_input_calls_nothing() {
    let provider = MockProvider::new().with_text("unused");
    let designer = designer(&provider);
    let mut input = ScriptedInput::new(&["  "]);
    let mut out = Vec::new();

    let result = run_with(&designer, &mut input, &mut out).await.unwrap();

    assert!(result.is_none());
    assert_eq!(provider.call_count(), 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "🌍 Welcome to AI Travel Designer!\n\n"
    );
}

#[tokio::test]
async fn test_failed_stage_keeps_earlier_output() {
    let provider = MockProvider::new()
        .with_text("Reykjavik")
        .with_error(ProviderError::RateLimited("quota exhausted".into()));
    let designer = designer(&provider);
    let mut input = ScriptedInput::new(&["northern lights"]);
    let mut out = Vec::new();

    let err = run_with(&designer, &mut input, &mut out).await.unwrap_err();

    match err {
        CliError::Designer(err) => assert_eq!(err.stage, Stage::Booking),
        other => panic!("expected designer error, got {:?}", other),
    }
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Destination Suggested: Reykjavik"));
    assert!(!printed.contains("Booking Info"));
    assert!(!printed.contains("Explore Suggestions"));
}
