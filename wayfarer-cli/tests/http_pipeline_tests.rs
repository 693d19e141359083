mod common;

use common::{text_completion, tool_call_completion, ScriptedInput, SystemPrompt};
use serde_json::Value;
use wayfarer_cli::config::{API_KEY_VAR, BASE_URL_VAR};
use wayfarer_cli::designer::{BOOKING_INSTRUCTIONS, DESTINATION_INSTRUCTIONS, EXPLORE_INSTRUCTIONS};
use wayfarer_cli::{run_with, CliError, Config, Stage, TravelDesigner};
use wayfarer_core::{AgentError, ProviderError};
use wayfarer_tools::travel::{GetFlightsTool, SuggestHotelsTool};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer, api_key: Option<&str>) -> Config {
    let uri = server.uri();
    Config::from_lookup(|key| match key {
        BASE_URL_VAR => Some(uri.clone()),
        API_KEY_VAR => api_key.map(String::from),
        _ => None,
    })
    .unwrap()
}

fn designer(config: &Config) -> TravelDesigner {
    TravelDesigner::new(config.provider().unwrap(), config).unwrap()
}

#[tokio::test]
async fn test_pipeline_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(SystemPrompt(DESTINATION_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion(" Patagonia\n")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(SystemPrompt(BOOKING_INSTRUCTIONS))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(tool_call_completion(&[
                ("call_1", "get_flights", r#"{"destination":"Patagonia"}"#),
                ("call_2", "suggest_hotels", r#"{"destination":"Patagonia"}"#),
            ])),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(SystemPrompt(BOOKING_INSTRUCTIONS))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_completion("Flights and lodges found")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(SystemPrompt(EXPLORE_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion("Try asado")))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server, Some("test-key"));
    let designer = designer(&config);
    let mut input = ScriptedInput::new(&["adventure"]);
    let mut out = Vec::new();

    let itinerary = run_with(&designer, &mut input, &mut out)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(itinerary.destination, "Patagonia");
    assert_eq!(itinerary.booking, "Flights and lodges found");
    assert_eq!(itinerary.explore, "Try asado");

    let bodies: Vec<Value> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(bodies.len(), 4);
    assert_eq!(bodies[0]["messages"][1]["content"], "adventure");
    assert_eq!(bodies[1]["messages"][1]["content"], "Patagonia");
    assert_eq!(bodies[3]["messages"][1]["content"], "Patagonia");

    // Both tool results are sent back in the order they were requested
    let follow_up = bodies[2]["messages"].as_array().unwrap();
    assert_eq!(follow_up.len(), 5);
    assert_eq!(follow_up[3]["role"], "tool");
    assert_eq!(follow_up[3]["tool_call_id"], "call_1");
    assert_eq!(
        follow_up[3]["content"],
        GetFlightsTool::listing("Patagonia").as_str()
    );
    assert_eq!(follow_up[4]["tool_call_id"], "call_2");
    assert_eq!(
        follow_up[4]["content"],
        SuggestHotelsTool::listing("Patagonia").as_str()
    );
}

#[tokio::test]
async fn test_missing_key_fails_first_stage_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = config(&server, None);
    let designer = designer(&config);
    let mut input = ScriptedInput::new(&["relaxing"]);
    let mut out = Vec::new();

    let err = run_with(&designer, &mut input, &mut out).await.unwrap_err();

    match err {
        CliError::Designer(err) => {
            assert_eq!(err.stage, Stage::Destination);
            assert!(matches!(
                err.source,
                AgentError::Provider(ProviderError::Authentication(_))
            ));
        }
        other => panic!("expected designer error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_stops_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(SystemPrompt(DESTINATION_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion("Hanoi")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(SystemPrompt(BOOKING_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(SystemPrompt(EXPLORE_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = config(&server, Some("test-key"));
    let err = designer(&config)
        .plan("street food", |_, _| {})
        .await
        .unwrap_err();

    assert_eq!(err.stage, Stage::Booking);
    assert!(matches!(
        err.source,
        AgentError::Provider(ProviderError::ServiceUnavailable(_))
    ));
}

#[tokio::test]
async fn test_blank_destination_is_still_sent_as_user_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(SystemPrompt(DESTINATION_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion("  \n ")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(SystemPrompt(BOOKING_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion("No flights")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(SystemPrompt(EXPLORE_INSTRUCTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_completion("Nothing")))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server, Some("test-key"));
    let itinerary = designer(&config).plan("calm", |_, _| {}).await.unwrap();
    assert_eq!(itinerary.destination, "");

    let bodies: Vec<Value> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(bodies.len(), 3);
    for body in &bodies[1..] {
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "");
    }
}
