//! Synthetic usage document sent by the probe.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const SAMPLE_ID: &str = "test-transaction-001";
pub const SAMPLE_TOTAL_COUNT: u64 = 42;
/// 2023-11-10T08:00:00Z in epoch milliseconds.
pub const SAMPLE_HOUR_START: i64 = 1_699_603_200_000;
pub const SAMPLE_HOUR_END: i64 = 1_699_606_800_000;

/// Hourly transaction usage record, shaped like what a collector publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUsage {
    pub id: String,
    pub total_count: u64,
    pub hour_start_time: i64,
    pub hour_end_time: i64,
    pub recorded_time: String,
    pub timestamp: String,
}

impl TransactionUsage {
    /// The fixed sample document stamped with the current local time.
    pub fn sample() -> Self {
        Self::sample_at(Local::now().naive_local())
    }

    pub fn sample_at(now: NaiveDateTime) -> Self {
        let stamp = iso_timestamp(now);
        Self {
            id: SAMPLE_ID.to_string(),
            total_count: SAMPLE_TOTAL_COUNT,
            hour_start_time: SAMPLE_HOUR_START,
            hour_end_time: SAMPLE_HOUR_END,
            recorded_time: stamp.clone(),
            timestamp: stamp,
        }
    }
}

/// ISO-8601 local time without offset, microsecond precision.
pub fn iso_timestamp(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
