use worker::Env;

use crate::constants::CALCULATIONS_TABLE_ENV;

/// 計算履歴の保存設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecorderConfig {
    /// 保存先の名前（KV namespace のバインディング名）
    pub table: String,
}

impl RecorderConfig {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// 環境変数 `CALCULATIONS_TABLE` から読み込む
    ///
    /// 未設定の場合は空文字になり、書き込みは失敗してログに残るだけです。
    pub fn from_env(env: &Env) -> Self {
        let table = env
            .var(CALCULATIONS_TABLE_ENV)
            .map(|v| v.to_string())
            .unwrap_or_else(|_| {
                tracing::warn!(
                    "{CALCULATIONS_TABLE_ENV} is not set, calculations will not be persisted"
                );
                String::new()
            });
        Self::new(table)
    }
}
