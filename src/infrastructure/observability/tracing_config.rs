/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub default_filter: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of `enable_json`.
    pub fn new(
        environment: impl Into<String>,
        default_filter: impl Into<String>,
        enable_json: bool,
    ) -> Self {
        let json_from_env = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            environment: environment.into(),
            default_filter: default_filter.into(),
            json_format: enable_json || json_from_env,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            default_filter: "info,voice_detect=debug,tower_http=debug".to_string(),
            json_format: false,
        }
    }
}
