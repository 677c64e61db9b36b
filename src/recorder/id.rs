use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

use crate::constants::CALCULATION_ID_SUFFIX_LEN;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 計算ID
///
/// `"<ISO 8601 タイムスタンプ>-<36進数9桁のランダム文字列>"` の形式です。
/// 一意性は保証しませんが、同一ミリ秒内での衝突はまず起きません。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalculationId(String);

impl CalculationId {
    pub fn generate<R: Rng>(timestamp: &DateTime<Utc>, rng: &mut R) -> Self {
        let suffix: String = (0..CALCULATION_ID_SUFFIX_LEN)
            .map(|_| char::from(BASE36_DIGITS[rng.random_range(0..BASE36_DIGITS.len())]))
            .collect();
        Self(format!("{}-{suffix}", format_timestamp(timestamp)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// ミリ秒精度・`Z` 付きの ISO 8601 表記
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
