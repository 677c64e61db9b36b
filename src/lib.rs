use worker::{Context, Env, Method, Request, Response, Result, event};

pub mod calculator;
mod constants;
pub mod handlers;
mod logging;
pub mod models;
mod openapi;
pub mod recorder;
pub mod utils;

pub use calculator::{Operation, calculate};
pub use handlers::{handle_calculation, handle_recorded_calculation};
pub use models::{CalculationEvent, CalculationRecord, CalculationResponse, CalculationResult};
pub use recorder::{InMemoryRecordStore, RecordStore, Recorder};
pub use utils::{ApiResponse, CalculationError, PersistenceError};

/// プロセス起動時に1回だけ実行される初期化
#[event(start)]
pub fn start() {
    logging::init();
}

/// メインルーター
/// パスとメソッドに応じて各ハンドラに振り分けます
async fn main_router(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let url = req.url()?;
    let path = url.path();
    let method = req.method();

    // OPTIONSリクエスト（プリフライトリクエスト）を処理
    if method == Method::Options {
        return utils::ApiResponse::preflight().into_response();
    }

    tracing::debug!(%path, "routing request");

    let response = match (method, path) {
        (Method::Post, "/api/calculate") => handlers::calculate::handle(req).await?,
        (Method::Post, "/api/calculations") => {
            handlers::calculate::handle_recorded(req, &env).await?
        }
        (Method::Get, "/") => handlers::general::root()?,
        (Method::Get, "/health") => handlers::general::health()?,
        (Method::Get, handlers::docs::OPENAPI_PATH) => handlers::docs::openapi_json()?,
        (Method::Get, "/docs") => handlers::docs::swagger_ui()?,
        _ => Response::ok("Not Found")?.with_status(404),
    };

    // すべてのレスポンスにCORSヘッダーを追加
    utils::add_cors_headers(response)
}

#[event(fetch)]
async fn fetch(req: Request, env: Env, ctx: Context) -> Result<Response> {
    main_router(req, env, ctx).await
}
