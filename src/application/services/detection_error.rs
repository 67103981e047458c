/// Every way a detection request can fail. The presentation layer maps each
/// variant to one HTTP status and a `{ "detail" }` body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectionError {
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Configuration(String),
    #[error("Analysis failed: {0}")]
    DependencyFailure(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl DetectionError {
    pub fn kind(&self) -> &'static str {
        match self {
            DetectionError::Unauthenticated(_) => "unauthenticated",
            DetectionError::Forbidden(_) => "forbidden",
            DetectionError::InvalidArgument(_) => "invalid_argument",
            DetectionError::Configuration(_) => "configuration",
            DetectionError::DependencyFailure(_) => "dependency_failure",
            DetectionError::Internal(_) => "internal",
        }
    }
}
