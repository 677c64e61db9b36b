use std::cell::RefCell;

use async_trait::async_trait;

use crate::models::CalculationRecord;
use crate::utils::PersistenceError;

/// 計算履歴の書き込み先
///
/// 追記のみで、読み出し・更新・削除は行いません。
/// Workers のハンドルはスレッド間で共有できないため `Send` を要求しません。
#[async_trait(?Send)]
pub trait RecordStore {
    async fn put(&self, record: &CalculationRecord) -> Result<(), PersistenceError>;
}

/// メモリ上に保持するストア（ローカル開発・テスト用）
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RefCell<Vec<CalculationRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込まれた履歴のスナップショット
    pub fn records(&self) -> Vec<CalculationRecord> {
        self.records.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RecordStore for InMemoryRecordStore {
    async fn put(&self, record: &CalculationRecord) -> Result<(), PersistenceError> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }
}
