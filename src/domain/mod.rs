mod audio_format;
mod detection_request;
mod detection_result;
mod language;
mod transcript;

pub use audio_format::AudioFormat;
pub use detection_request::DetectionRequest;
pub use detection_result::{Classification, DetectionResult, DetectionResultError};
pub use language::Language;
pub use transcript::Transcript;
