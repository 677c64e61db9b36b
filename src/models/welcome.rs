use serde::Serialize;
use utoipa::ToSchema;

/// 利用可能なエンドポイント
#[derive(Serialize, ToSchema)]
pub struct Endpoints {
    /// Swagger UI
    pub swagger: String,
    /// `OpenAPI` 仕様
    pub openapi: String,
    /// 計算エンドポイント
    pub calculate: String,
    /// 履歴保存付き計算エンドポイント
    pub calculations: String,
    /// ヘルスチェック
    pub health: String,
}

/// ルートエンドポイントのレスポンス
#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// ウェルカムメッセージ
    pub message: String,
    /// 利用可能なエンドポイント
    pub endpoints: Endpoints,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Welcome to Calc Worker API".to_string(),
            endpoints: Endpoints {
                swagger: "/docs".to_string(),
                openapi: "/openapi.json".to_string(),
                calculate: "/api/calculate".to_string(),
                calculations: "/api/calculations".to_string(),
                health: "/health".to_string(),
            },
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// ヘルスチェックのレスポンス
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// パッケージのバージョン
    #[schema(example = "0.1.0")]
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
