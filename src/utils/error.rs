use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::constants::INTERNAL_ERROR_MESSAGE;

/// 計算リクエストの処理中に発生するエラー
///
/// 検証系の4種類は `Display` がそのままクライアント向けメッセージになります。
/// `InternalError` の詳細はログ専用で、レスポンスには含めません。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Missing required parameters: num1, num2, and operation")]
    InvalidInput,
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Cannot calculate square root of negative number")]
    InvalidDomain,
    #[error("Invalid operation")]
    UnsupportedOperation,
    #[error("internal error: {0}")]
    InternalError(String),
}

impl CalculationError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::InternalError(detail.into())
    }

    /// ログ出力用のエラー種別
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationError::InvalidInput => "INVALID_INPUT",
            CalculationError::DivisionByZero => "DIVISION_BY_ZERO",
            CalculationError::InvalidDomain => "INVALID_DOMAIN",
            CalculationError::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            CalculationError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            CalculationError::InternalError(_) => 500,
            _ => 400,
        }
    }

    /// クライアントへ返すメッセージ（内部エラーの詳細は伏せる）
    pub fn public_message(&self) -> String {
        match self {
            CalculationError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// 計算履歴の書き込み失敗
///
/// レスポンスには反映されず、ログにのみ出力されます。
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("store binding unavailable: {0}")]
    Binding(String),
    #[error("record serialization failed: {0}")]
    Serialization(String),
    #[error("store write failed: {0}")]
    Write(String),
}

/// エラーレスポンスのボディ
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// エラーメッセージ
    #[schema(example = "Cannot divide by zero")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&CalculationError> for ErrorResponse {
    fn from(err: &CalculationError) -> Self {
        Self::new(err.public_message())
    }
}
