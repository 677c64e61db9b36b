//! アプリケーション全体で使用する定数

/// APIタイトル
pub const API_TITLE: &str = "Calc Worker API";

/// Swagger UI バージョン
pub const SWAGGER_UI_VERSION: &str = "5";

/// 環境変数キー: 計算履歴の保存先（KV namespace のバインディング名）
pub const CALCULATIONS_TABLE_ENV: &str = "CALCULATIONS_TABLE";

/// 計算IDのランダム部分の桁数（36進数）
pub const CALCULATION_ID_SUFFIX_LEN: usize = 9;

/// 500エラー時にクライアントへ返す固定メッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
