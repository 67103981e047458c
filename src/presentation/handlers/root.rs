use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct BannerResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: [&'static str; 2],
}

pub async fn root_handler() -> Json<BannerResponse> {
    Json(BannerResponse {
        service: "AI Voice Detection API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ["POST /detect", "GET /health"],
    })
}
