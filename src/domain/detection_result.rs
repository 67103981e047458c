use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "AI-generated")]
    AiGenerated,
    #[serde(rename = "Human-generated")]
    HumanGenerated,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::AiGenerated => "AI-generated",
            Classification::HumanGenerated => "Human-generated",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectionResultError {
    #[error("confidence {0} is outside [0.0, 1.0]")]
    ConfidenceOutOfRange(f64),
}

/// Validated outcome of one detection.
///
/// Only constructible through [`DetectionResult::new`] or deserialization,
/// both of which reject a confidence outside the inclusive unit interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetectionResult")]
pub struct DetectionResult {
    classification: Classification,
    confidence: f64,
    explanation: String,
}

impl DetectionResult {
    pub fn new(
        classification: Classification,
        confidence: f64,
        explanation: String,
    ) -> Result<Self, DetectionResultError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DetectionResultError::ConfidenceOutOfRange(confidence));
        }

        Ok(Self {
            classification,
            confidence,
            explanation,
        })
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[derive(Deserialize)]
struct RawDetectionResult {
    classification: Classification,
    confidence: f64,
    explanation: String,
}

impl TryFrom<RawDetectionResult> for DetectionResult {
    type Error = DetectionResultError;

    fn try_from(raw: RawDetectionResult) -> Result<Self, Self::Error> {
        Self::new(raw.classification, raw.confidence, raw.explanation)
    }
}
