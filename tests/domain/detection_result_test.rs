use voice_detect::domain::{Classification, DetectionResult, DetectionResultError};

#[test]
fn given_confidence_in_range_when_constructing_then_succeeds() {
    let result =
        DetectionResult::new(Classification::AiGenerated, 0.5, "robotic".to_string()).unwrap();

    assert_eq!(result.confidence(), 0.5);
}

#[test]
fn given_confidence_out_of_range_when_constructing_then_fails() {
    for confidence in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
        let result = DetectionResult::new(Classification::HumanGenerated, confidence, String::new());

        assert!(matches!(
            result,
            Err(DetectionResultError::ConfidenceOutOfRange(_))
        ));
    }
}

#[test]
fn given_result_when_serialized_then_uses_wire_labels() {
    let result =
        DetectionResult::new(Classification::AiGenerated, 1.0, "flat".to_string()).unwrap();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "classification": "AI-generated",
            "confidence": 1.0,
            "explanation": "flat",
        })
    );
}

#[test]
fn given_classification_when_displayed_then_matches_wire_label() {
    assert_eq!(Classification::HumanGenerated.to_string(), "Human-generated");
}
