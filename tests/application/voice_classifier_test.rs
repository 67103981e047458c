use std::sync::Arc;

use voice_detect::application::ports::LlmClientError;
use voice_detect::application::services::{
    ClassificationError, SYSTEM_PROMPT, VoiceClassifier, build_analysis_prompt,
    parse_detection_result,
};
use voice_detect::domain::{Classification, Language, Transcript};
use voice_detect::infrastructure::llm::MockLlmClient;

use crate::helpers::{LlmBehavior, StubLlmClient};

#[test]
fn given_transcript_when_building_prompt_then_embeds_transcript_language_and_factors() {
    let prompt = build_analysis_prompt(&Transcript::new("vanakkam"), Language::Tamil);

    assert!(prompt.contains("Transcription: \"vanakkam\""));
    assert!(prompt.contains("Language: tamil"));
    assert!(prompt.contains("Unnatural pauses or rhythm patterns"));
    assert!(prompt.contains("Overly perfect pronunciation"));
    assert!(prompt.contains("Lack of natural speech variations"));
    assert!(prompt.contains("Consistent tone without emotional fluctuations"));
    assert!(prompt.contains("Background noise characteristics"));
    assert!(prompt.contains("\"classification\""));
    assert!(prompt.contains("\"confidence\""));
    assert!(prompt.contains("\"explanation\""));
}

#[test]
fn given_valid_json_when_parsing_then_returns_result() {
    let result = parse_detection_result(
        r#"{"classification": "AI-generated", "confidence": 0.91, "explanation": "flat prosody"}"#,
    )
    .unwrap();

    assert_eq!(result.classification(), Classification::AiGenerated);
    assert_eq!(result.confidence(), 0.91);
    assert_eq!(result.explanation(), "flat prosody");
}

#[test]
fn given_boundary_confidences_when_parsing_then_both_are_accepted() {
    for confidence in ["0.0", "1.0", "0", "1"] {
        let raw = format!(
            r#"{{"classification": "Human-generated", "confidence": {}, "explanation": "x"}}"#,
            confidence
        );
        assert!(parse_detection_result(&raw).is_ok(), "{}", confidence);
    }
}

#[test]
fn given_negative_confidence_when_parsing_then_malformed() {
    let result = parse_detection_result(
        r#"{"classification": "Human-generated", "confidence": -0.1, "explanation": "x"}"#,
    );

    assert!(matches!(
        result,
        Err(ClassificationError::MalformedResponse(_))
    ));
}

#[test]
fn given_unknown_label_when_parsing_then_malformed() {
    let result = parse_detection_result(
        r#"{"classification": "Synthetic", "confidence": 0.5, "explanation": "x"}"#,
    );

    assert!(matches!(
        result,
        Err(ClassificationError::MalformedResponse(_))
    ));
}

#[test]
fn given_missing_explanation_when_parsing_then_malformed() {
    let result =
        parse_detection_result(r#"{"classification": "AI-generated", "confidence": 0.5}"#);

    assert!(matches!(
        result,
        Err(ClassificationError::MalformedResponse(_))
    ));
}

#[test]
fn given_confidence_as_string_when_parsing_then_malformed() {
    let result = parse_detection_result(
        r#"{"classification": "AI-generated", "confidence": "high", "explanation": "x"}"#,
    );

    assert!(matches!(
        result,
        Err(ClassificationError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn given_llm_client_when_classifying_then_sends_forensics_system_prompt() {
    let llm = Arc::new(StubLlmClient::replying(
        r#"{"classification": "AI-generated", "confidence": 0.7, "explanation": "even pacing"}"#,
    ));
    let classifier = VoiceClassifier::new(Arc::clone(&llm));

    let result = classifier
        .classify(&Transcript::new("hello"), Language::English)
        .await
        .unwrap();

    assert_eq!(result.classification(), Classification::AiGenerated);
    assert_eq!(llm.prompts()[0].0, SYSTEM_PROMPT);
}

#[tokio::test]
async fn given_failing_llm_when_classifying_then_completion_error() {
    let classifier = VoiceClassifier::new(Arc::new(StubLlmClient::new(LlmBehavior::Fail)));

    let result = classifier
        .classify(&Transcript::new("hello"), Language::English)
        .await;

    assert!(matches!(
        result,
        Err(ClassificationError::Completion(
            LlmClientError::ApiRequestFailed(_)
        ))
    ));
}

#[tokio::test]
async fn given_default_mock_client_when_classifying_then_returns_valid_result() {
    let classifier = VoiceClassifier::new(Arc::new(MockLlmClient::default()));

    let result = classifier
        .classify(&Transcript::new("hello"), Language::Hindi)
        .await
        .unwrap();

    assert_eq!(result.classification(), Classification::HumanGenerated);
}
