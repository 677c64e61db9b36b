use worker::{Env, Request, Response, Result};

use crate::calculator::calculate;
use crate::models::{CalculationEvent, CalculationResponse, CalculationResult};
use crate::recorder::{KvRecordStore, RecordStore, Recorder, RecorderConfig};
use crate::utils::{ApiResponse, CalculationError, parse_body};

/// 計算のみを行うハンドラー
pub fn handle_calculation(event: &CalculationEvent) -> ApiResponse {
    match evaluate(event) {
        Ok(result) => ApiResponse::ok(&CalculationResponse::from(result)),
        Err(e) => error_response(&e),
    }
}

/// 計算し、結果を履歴として保存するハンドラー
///
/// 保存の成否はレスポンスに影響しません。
pub async fn handle_recorded_calculation<S: RecordStore>(
    event: &CalculationEvent,
    recorder: &Recorder<S>,
) -> ApiResponse {
    match evaluate(event) {
        Ok(result) => {
            let record = recorder.record(&result).await;
            ApiResponse::ok(&CalculationResponse::from(record))
        }
        Err(e) => error_response(&e),
    }
}

fn evaluate(event: &CalculationEvent) -> std::result::Result<CalculationResult, CalculationError> {
    let body = parse_body(event.body.as_ref())?;
    calculate(&body)
}

fn error_response(err: &CalculationError) -> ApiResponse {
    match err {
        CalculationError::InternalError(detail) => {
            tracing::error!(kind = err.as_str(), detail = %detail, "calculation failed");
        }
        _ => tracing::warn!(kind = err.as_str(), "calculation rejected"),
    }
    ApiResponse::error(err)
}

/// リクエストボディ（JSON テキスト）をイベントに変換
async fn read_event(req: &mut Request) -> CalculationEvent {
    match req.text().await {
        Ok(text) => CalculationEvent::from_text(text),
        Err(e) => {
            tracing::error!(error = %e, "failed to read request body");
            CalculationEvent::default()
        }
    }
}

/// 計算エンドポイント
/// POST /api/calculate
pub async fn handle(mut req: Request) -> Result<Response> {
    let event = read_event(&mut req).await;
    handle_calculation(&event).into_response()
}

/// 履歴保存付き計算エンドポイント
/// POST /api/calculations
pub async fn handle_recorded(mut req: Request, env: &Env) -> Result<Response> {
    let event = read_event(&mut req).await;
    let config = RecorderConfig::from_env(env);
    let recorder = Recorder::new(KvRecordStore::new(env, &config));

    handle_recorded_calculation(&event, &recorder)
        .await
        .into_response()
}
