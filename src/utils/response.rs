use std::collections::BTreeMap;

use serde::Serialize;
use worker::{Headers, Response, Result};

use crate::constants::INTERNAL_ERROR_MESSAGE;
use crate::utils::{CalculationError, ErrorResponse};

/// JSON レスポンスの Content-Type ヘッダー
pub const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// すべてのレスポンスに付与する CORS ヘッダー
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
];

/// トランスポート層へ渡すレスポンスエンベロープ
///
/// `{ statusCode, headers, body }` の形でシリアライズされます。
/// `body` はシリアライズ済みの JSON テキストです。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<&'static str, &'static str>,
    pub body: String,
}

impl ApiResponse {
    /// 任意のステータスとボディでエンベロープを作る
    pub fn json<T: Serialize>(status_code: u16, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(body) => Self::with_body(status_code, body),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                Self::internal_error()
            }
        }
    }

    /// 200 OK
    pub fn ok<T: Serialize>(data: &T) -> Self {
        Self::json(200, data)
    }

    /// エラー種別に応じたエラーレスポンス
    pub fn error(err: &CalculationError) -> Self {
        Self::json(err.status_code(), &ErrorResponse::from(err))
    }

    /// CORS プリフライトへの応答（空ボディ）
    pub fn preflight() -> Self {
        Self::with_body(200, String::new())
    }

    /// シリアライズ自体に失敗した場合の最終フォールバック
    fn internal_error() -> Self {
        let body = serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }).to_string();
        Self::with_body(500, body)
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let headers = std::iter::once(CONTENT_TYPE_JSON)
            .chain(CORS_HEADERS)
            .collect();
        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).copied()
    }

    /// ボディを JSON として読み直す
    pub fn json_body(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }

    /// `worker::Response` へ変換する
    pub fn into_response(self) -> Result<Response> {
        let headers = Headers::new();
        for (name, value) in &self.headers {
            headers.set(name, value)?;
        }

        Ok(Response::ok(self.body)?
            .with_status(self.status_code)
            .with_headers(headers))
    }
}

/// JSON 形式のレスポンスを作成
pub fn json_response<T: Serialize>(data: &T) -> Result<Response> {
    ApiResponse::ok(data).into_response()
}

/// 既存のレスポンスに CORS ヘッダーを追加
pub fn add_cors_headers(mut response: Response) -> Result<Response> {
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.set(name, value)?;
    }
    Ok(response)
}
