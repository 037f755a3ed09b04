//! Market data abstractions and percent-change normalization.

use crate::core::error::FundError;
use crate::core::fund::HistoricalPoint;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub const DEFAULT_HISTORY_MONTHS: usize = 12;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Percent-change series for the most recent `months` months, oldest first.
    ///
    /// Fails with [`FundError::DataUnavailable`] when the provider has no usable
    /// series for `symbol`.
    async fn fetch_series(&self, symbol: &str, months: usize) -> Result<Vec<HistoricalPoint>>;
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Turns `(date, close)` pairs in any order into a percent-change series over
/// the most recent `months` entries, anchored to the oldest close in that
/// window. The first point is always `0.0`.
pub fn normalize_closes(
    symbol: &str,
    mut closes: Vec<(NaiveDate, f64)>,
    months: usize,
) -> Result<Vec<HistoricalPoint>, FundError> {
    if months == 0 {
        return Err(FundError::data_unavailable(symbol, "requested an empty window"));
    }

    closes.sort_by(|a, b| b.0.cmp(&a.0));
    closes.dedup_by_key(|(date, _)| *date);
    closes.truncate(months);
    closes.reverse();

    let base = match closes.first() {
        Some((_, close)) => *close,
        None => return Err(FundError::data_unavailable(symbol, "time series is empty")),
    };
    if !base.is_finite() || base == 0.0 {
        return Err(FundError::data_unavailable(
            symbol,
            format!("cannot anchor series on close {base}"),
        ));
    }

    Ok(closes
        .into_iter()
        .map(|(date, close)| HistoricalPoint {
            date: date.format("%Y-%m").to_string(),
            value: round2((close - base) / base * 100.0),
            benchmark: None,
        })
        .collect())
}
