mod api_error;
mod detect;
mod health;
mod root;

pub use api_error::{ApiError, ErrorResponse};
pub use detect::{API_KEY_HEADER, detect_handler};
pub use health::health_handler;
pub use root::root_handler;
