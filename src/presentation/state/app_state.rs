use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::DetectionService;

pub const DEFAULT_MAX_BODY_BYTES: usize = 35 * 1024 * 1024;

pub struct AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub detection_service: Arc<DetectionService<L>>,
    pub max_body_bytes: usize,
}

impl<L> AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(detection_service: Arc<DetectionService<L>>) -> Self {
        Self {
            detection_service,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl<L> Clone for AppState<L>
where
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            detection_service: Arc::clone(&self.detection_service),
            max_body_bytes: self.max_body_bytes,
        }
    }
}
