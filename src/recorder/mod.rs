//! 計算履歴の保存（ベストエフォート）
//!
//! 書き込みは1回だけ試み、失敗してもリトライせずログに残すだけです。

mod config;
mod id;
mod kv;
mod store;

use chrono::{DateTime, Utc};
use rand::Rng;

pub use config::RecorderConfig;
pub use id::{CalculationId, format_timestamp};
pub use kv::KvRecordStore;
pub use store::{InMemoryRecordStore, RecordStore};

use crate::models::{CalculationRecord, CalculationResult};
use crate::utils::PersistenceError;

/// 計算結果に ID と作成日時を付与して履歴を作る
pub fn build_record<R: Rng>(
    result: &CalculationResult,
    now: DateTime<Utc>,
    rng: &mut R,
) -> CalculationRecord {
    let id = CalculationId::generate(&now, rng);
    CalculationRecord {
        id: id.into_string(),
        operation: result.operation.clone(),
        num1: result.num1,
        num2: result.num2,
        result: result.result,
        timestamp: format_timestamp(&now),
    }
}

/// 計算結果を履歴として書き込む
pub struct Recorder<S> {
    store: S,
}

impl<S: RecordStore> Recorder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 計算結果に ID と作成日時を付与して履歴を作る（書き込みはしない）
    pub fn prepare<R: Rng>(
        &self,
        result: &CalculationResult,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> CalculationRecord {
        build_record(result, now, rng)
    }

    /// 履歴を1回だけ書き込む
    pub async fn persist(&self, record: &CalculationRecord) -> Result<(), PersistenceError> {
        self.store.put(record).await
    }

    /// 履歴を作って書き込む。書き込みの失敗はログに出して破棄する
    pub async fn record(&self, result: &CalculationResult) -> CalculationRecord {
        let record = self.prepare(result, Utc::now(), &mut rand::rng());

        match self.persist(&record).await {
            Ok(()) => tracing::info!(id = %record.id, "calculation recorded"),
            Err(e) => tracing::warn!(id = %record.id, error = %e, "failed to record calculation"),
        }

        record
    }
}
