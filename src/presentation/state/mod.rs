mod app_state;

pub use app_state::{AppState, DEFAULT_MAX_BODY_BYTES};
