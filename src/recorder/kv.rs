use async_trait::async_trait;
use worker::Env;

use crate::models::CalculationRecord;
use crate::recorder::{RecordStore, RecorderConfig};
use crate::utils::PersistenceError;

/// Workers KV に計算履歴を書き込むストア
///
/// キーは計算ID、値は履歴の JSON です。
/// バインディングの解決は書き込み時に行うため、設定が不正でも構築は失敗しません。
pub struct KvRecordStore<'a> {
    env: &'a Env,
    binding: String,
}

impl<'a> KvRecordStore<'a> {
    pub fn new(env: &'a Env, config: &RecorderConfig) -> Self {
        Self {
            env,
            binding: config.table.clone(),
        }
    }
}

#[async_trait(?Send)]
impl RecordStore for KvRecordStore<'_> {
    async fn put(&self, record: &CalculationRecord) -> Result<(), PersistenceError> {
        let store = self
            .env
            .kv(&self.binding)
            .map_err(|e| PersistenceError::Binding(format!("{:?}: {e}", self.binding)))?;

        store
            .put(&record.id, record)
            .map_err(|e| PersistenceError::Serialization(format!("{e:?}")))?
            .execute()
            .await
            .map_err(|e| PersistenceError::Write(format!("{e:?}")))
    }
}
