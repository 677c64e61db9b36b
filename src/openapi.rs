//! `OpenAPI` ドキュメント定義モジュール

#![allow(clippy::needless_for_each)]

use utoipa::OpenApi;

use crate::models::{
    CalculationRequest, CalculationResponse, CalculationResult, Endpoints, HealthResponse,
    WelcomeResponse,
};
use crate::utils::ErrorResponse;

/// `OpenAPI` ドキュメント定義
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calc Worker API",
        description = "Cloudflare Workersで動作する計算API。2つの数値と演算子を受け取り、計算結果を返します。履歴保存版はKVに計算結果を記録します。",
        version = "1.0.0"
    ),
    paths(
        crate::openapi::root,
        crate::openapi::health,
        crate::openapi::calculate,
        crate::openapi::calculations
    ),
    components(schemas(
        WelcomeResponse,
        Endpoints,
        HealthResponse,
        CalculationRequest,
        CalculationResult,
        CalculationResponse,
        ErrorResponse
    )),
    tags(
        (name = "General", description = "一般エンドポイント"),
        (name = "Calculator", description = "計算エンドポイント")
    )
)]
pub struct ApiDoc;

/// API 情報
///
/// API のウェルカムメッセージと利用可能なエンドポイント一覧を返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses(
        (status = 200, description = "API 情報", body = WelcomeResponse)
    )
)]
fn root() {}

/// ヘルスチェック
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/health",
    tag = "General",
    responses(
        (status = 200, description = "稼働中", body = HealthResponse)
    )
)]
fn health() {}

/// 計算
///
/// `num1` と `num2` に演算子 `operation` を適用します。
/// `sqrt` は `num1` のみを使用しますが、`num2` も数値である必要があります。
#[allow(dead_code)]
#[utoipa::path(
    post,
    path = "/api/calculate",
    tag = "Calculator",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "入力不正・ゼロ除算・負数の平方根・未対応の演算子", body = ErrorResponse),
        (status = 500, description = "サーバーエラー", body = ErrorResponse)
    )
)]
fn calculate() {}

/// 計算（履歴保存付き）
///
/// 計算結果に `calculationId` と `timestamp` を付けて返し、KV に記録します。
/// 記録に失敗してもレスポンスは変わりません。
#[allow(dead_code)]
#[utoipa::path(
    post,
    path = "/api/calculations",
    tag = "Calculator",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "計算結果と計算ID", body = CalculationResponse),
        (status = 400, description = "入力不正・ゼロ除算・負数の平方根・未対応の演算子", body = ErrorResponse),
        (status = 500, description = "サーバーエラー", body = ErrorResponse)
    )
)]
fn calculations() {}

/// `OpenAPI` スキーマを JSON 文字列として取得
pub fn get_openapi_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to generate OpenAPI JSON");
        // エラー時は空のJSONを返す
        r#"{"openapi":"3.1.0","info":{"title":"Calc Worker API","version":"1.0.0"},"paths":{},"components":{},"tags":[]}"#.to_string()
    })
}
