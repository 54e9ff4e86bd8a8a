// tests/generate.rs
// Full generate() round trip against a mock Gemini endpoint

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zenteen::provider::gemini::GeminiCoach;
use zenteen::types::{Mood, UserInput};
use zenteen::CoachError;

fn check_in() -> UserInput {
    UserInput::new(Mood::Stressed, 3, "exams", "be calmer")
}

fn coach(server: &MockServer) -> GeminiCoach {
    GeminiCoach::new(Some("test-key".into())).with_base_url(server.uri())
}

/// Wrap model text in the generateContent response envelope.
fn envelope(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ], "role": "model" } }
        ]
    })
}

fn full_reply() -> serde_json::Value {
    json!({
        "emotionalAnalysis": "Exams have you wound up tight.",
        "personalizedAdvice": "Break revision into 25-minute blocks.",
        "affirmations": [
            "I am prepared.",
            "I am calm under pressure.",
            "I am more than my grades."
        ],
        "habits": [
            "Sleep 8 hours",
            "Walk after studying",
            "Phone off during revision"
        ],
        "dailyChallenge": "Tell a friend one thing you're proud of.",
        "journalPrompt": "What would you do if exams didn't scare you?",
        "motivationalClosing": "Remember: one exam never defines you."
    })
}

#[tokio::test]
async fn successful_reply_preserves_all_seven_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&full_reply().to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let reply = coach(&server).generate(&check_in()).await.unwrap();

    assert_eq!(reply.emotional_analysis, "Exams have you wound up tight.");
    assert_eq!(reply.personalized_advice, "Break revision into 25-minute blocks.");
    assert_eq!(
        reply.affirmations,
        vec![
            "I am prepared.",
            "I am calm under pressure.",
            "I am more than my grades."
        ]
    );
    assert_eq!(
        reply.habits,
        vec![
            "Sleep 8 hours",
            "Walk after studying",
            "Phone off during revision"
        ]
    );
    assert_eq!(reply.daily_challenge, "Tell a friend one thing you're proud of.");
    assert_eq!(reply.journal_prompt, "What would you do if exams didn't scare you?");
    assert_eq!(reply.motivational_closing, "Remember: one exam never defines you.");
}

#[tokio::test]
async fn reply_missing_a_required_field_fails() {
    let server = MockServer::start().await;

    let mut reply = full_reply();
    reply.as_object_mut().unwrap().remove("motivationalClosing");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&reply.to_string())))
        .mount(&server)
        .await;

    let err = coach(&server).generate(&check_in()).await.unwrap_err();
    assert!(matches!(err, CoachError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn empty_model_text_is_a_no_response_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("")))
        .mount(&server)
        .await;

    let err = coach(&server).generate(&check_in()).await.unwrap_err();
    assert!(matches!(err, CoachError::EmptyResponse), "got {:?}", err);
}

#[tokio::test]
async fn response_without_candidates_is_a_no_response_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = coach(&server).generate(&check_in()).await.unwrap_err();
    assert!(matches!(err, CoachError::EmptyResponse), "got {:?}", err);
}

#[tokio::test]
async fn non_json_model_text_fails_without_panicking() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope("Sorry, here is some advice instead of JSON.")),
        )
        .mount(&server)
        .await;

    let err = coach(&server).generate(&check_in()).await.unwrap_err();
    assert!(matches!(err, CoachError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn server_error_surfaces_as_api_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = coach(&server).generate(&check_in()).await.unwrap_err();
    match err {
        CoachError::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn embedded_error_object_surfaces_as_api_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 429, "message": "quota exceeded" }
        })))
        .mount(&server)
        .await;

    let err = coach(&server).generate(&check_in()).await.unwrap_err();
    match err {
        CoachError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&full_reply().to_string())))
        .expect(0)
        .mount(&server)
        .await;

    let err = GeminiCoach::new(None)
        .with_base_url(server.uri())
        .generate(&check_in())
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::MissingApiKey));
    server.verify().await;
}
