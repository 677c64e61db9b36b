use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::calculator::Operation;

/// トランスポート層から受け取るイベント
///
/// `body` は解析済みの JSON オブジェクト、または JSON テキスト（文字列）です。
#[derive(Debug, Clone, Default)]
pub struct CalculationEvent {
    pub body: Option<serde_json::Value>,
}

impl CalculationEvent {
    /// 解析済みボディからイベントを作る
    pub fn from_json(body: serde_json::Value) -> Self {
        Self { body: Some(body) }
    }

    /// JSON テキストのボディからイベントを作る
    pub fn from_text(body: impl Into<String>) -> Self {
        Self {
            body: Some(serde_json::Value::String(body.into())),
        }
    }
}

/// 計算リクエスト（ドキュメント用）
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CalculationRequest {
    /// 1つ目の数値（数値文字列も可）
    #[schema(value_type = f64, example = 10)]
    pub num1: serde_json::Value,
    /// 2つ目の数値（数値文字列も可。`sqrt` では使用しない）
    #[schema(value_type = f64, example = 4)]
    pub num2: serde_json::Value,
    /// 演算子（`+`, `-`, `*`, `/`, `%`, `**`, `sqrt`）
    #[schema(example = "+")]
    pub operation: String,
}

/// 計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationResult {
    /// 計算結果
    #[schema(example = 14)]
    pub result: f64,
    /// 演算子
    #[schema(example = "+")]
    pub operation: String,
    /// 1つ目の数値
    #[schema(example = 10)]
    pub num1: f64,
    /// 2つ目の数値
    #[schema(example = 4)]
    pub num2: f64,
}

impl CalculationResult {
    pub fn new(num1: f64, num2: f64, operation: Operation, result: f64) -> Self {
        Self {
            result,
            operation: operation.symbol().to_string(),
            num1,
            num2,
        }
    }
}

/// 計算エンドポイントの成功レスポンス
///
/// 履歴保存版では `calculationId` と `timestamp` が追加されます。
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub calculation: CalculationResult,
    /// 計算ID
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-01T00:00:00.000Z-k3j9x0a1b")]
    pub calculation_id: Option<String>,
    /// 作成日時（ISO 8601）
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-01T00:00:00.000Z")]
    pub timestamp: Option<String>,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(calculation: CalculationResult) -> Self {
        Self {
            calculation,
            calculation_id: None,
            timestamp: None,
        }
    }
}

impl From<CalculationRecord> for CalculationResponse {
    fn from(record: CalculationRecord) -> Self {
        Self {
            calculation: CalculationResult {
                result: record.result,
                operation: record.operation,
                num1: record.num1,
                num2: record.num2,
            },
            calculation_id: Some(record.id),
            timestamp: Some(record.timestamp),
        }
    }
}

/// 保存される計算履歴
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: String,
    pub operation: String,
    pub num1: f64,
    pub num2: f64,
    pub result: f64,
    pub timestamp: String,
}
