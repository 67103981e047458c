mod audio_materializer;
mod credential_gate;
mod detection_error;
mod detection_service;
mod payload_normalizer;
mod voice_classifier;

pub use audio_materializer::{AudioMaterializer, MaterializeError, MaterializedAudio};
pub use credential_gate::{CredentialGate, Credentials};
pub use detection_error::DetectionError;
pub use detection_service::{DetectionService, DetectionTimeouts};
pub use payload_normalizer::{RawDetectionPayload, normalize};
pub use voice_classifier::{
    ClassificationError, SYSTEM_PROMPT, VoiceClassifier, build_analysis_prompt,
    parse_detection_result,
};
