use worker::{Response, Result};

use crate::models::{HealthResponse, WelcomeResponse};
use crate::utils::json_response;

/// API 情報
/// GET /
pub fn root() -> Result<Response> {
    json_response(&WelcomeResponse::new())
}

/// ヘルスチェック
/// GET /health
pub fn health() -> Result<Response> {
    json_response(&HealthResponse::ok())
}
