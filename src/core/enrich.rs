//! Replaces a fund's static performance figure with live market movement.

use crate::core::fund::{EnrichedFund, FundDescriptor};
use crate::core::market::{DEFAULT_HISTORY_MONTHS, MarketDataProvider};
use anyhow::Result;
use tracing::{debug, instrument, warn};

pub const DEFAULT_BENCHMARK_SYMBOL: &str = "SPY";

pub struct FundEnricher<'a> {
    market: &'a (dyn MarketDataProvider + Send + Sync),
    benchmark_symbol: String,
    months: usize,
}

impl<'a> FundEnricher<'a> {
    pub fn new(market: &'a (dyn MarketDataProvider + Send + Sync)) -> Self {
        Self {
            market,
            benchmark_symbol: DEFAULT_BENCHMARK_SYMBOL.to_string(),
            months: DEFAULT_HISTORY_MONTHS,
        }
    }

    pub fn with_benchmark(mut self, symbol: &str) -> Self {
        self.benchmark_symbol = symbol.to_string();
        self
    }

    pub fn with_months(mut self, months: usize) -> Self {
        self.months = months;
        self
    }

    pub fn benchmark_symbol(&self) -> &str {
        &self.benchmark_symbol
    }

    /// Never fails: any market data error degrades to the fund's baseline
    /// performance with an empty series.
    #[instrument(name = "EnrichFund", skip(self, fund), fields(fund = %fund.id))]
    pub async fn enrich(&self, fund: FundDescriptor) -> EnrichedFund {
        match self.try_enrich(&fund).await {
            Ok(enriched) => enriched,
            Err(e) => {
                warn!(error = %e, "Falling back to baseline performance");
                EnrichedFund::baseline(fund)
            }
        }
    }

    async fn try_enrich(&self, fund: &FundDescriptor) -> Result<EnrichedFund> {
        // Funds without their own ticker track the benchmark.
        let symbol = fund
            .proxy_symbol
            .as_deref()
            .unwrap_or(self.benchmark_symbol.as_str());

        let mut series = self.market.fetch_series(symbol, self.months).await?;
        let benchmark = self
            .market
            .fetch_series(&self.benchmark_symbol, series.len())
            .await?;

        for (point, bench) in series.iter_mut().zip(benchmark.iter()) {
            point.benchmark = Some(bench.value);
        }

        let performance_percent = match series.last() {
            Some(last) => last.value,
            None => fund.baseline_performance_percent,
        };
        debug!(
            symbol,
            points = series.len(),
            benchmark_points = benchmark.len(),
            performance_percent,
            "Enriched fund with market data"
        );

        Ok(EnrichedFund {
            fund: fund.clone(),
            performance_percent,
            historical_data: series,
        })
    }
}
