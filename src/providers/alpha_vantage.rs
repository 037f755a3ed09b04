use crate::core::error::FundError;
use crate::core::fund::HistoricalPoint;
use crate::core::market::{MarketDataProvider, normalize_closes};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

// AlphaVantageProvider implementation for MarketDataProvider
pub struct AlphaVantageProvider {
    base_url: String,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        AlphaVantageProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct MonthlySeriesResponse {
    #[serde(rename = "Monthly Time Series")]
    monthly: Option<HashMap<String, MonthlyBar>>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct MonthlyBar {
    #[serde(rename = "4. close")]
    close: String,
}

fn unavailable(symbol: &str, reason: impl Into<String>) -> anyhow::Error {
    FundError::data_unavailable(symbol, reason).into()
}

fn parse_closes(symbol: &str, monthly: HashMap<String, MonthlyBar>) -> Result<Vec<(NaiveDate, f64)>> {
    monthly
        .into_iter()
        .map(|(date_str, bar)| -> Result<(NaiveDate, f64)> {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                .map_err(|e| unavailable(symbol, format!("bad date '{date_str}': {e}")))?;
            let close = bar.close.trim().parse::<f64>().map_err(|e| {
                unavailable(symbol, format!("bad close '{}' on {date_str}: {e}", bar.close))
            })?;
            Ok((date, close))
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    #[instrument(
        name = "AlphaVantageSeriesFetch",
        skip(self),
        fields(symbol = %symbol)
    )]
    async fn fetch_series(&self, symbol: &str, months: usize) -> Result<Vec<HistoricalPoint>> {
        let url = Url::parse_with_params(
            &format!("{}/query", self.base_url),
            &[
                ("function", "TIME_SERIES_MONTHLY"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
                ("datatype", "json"),
            ],
        )?;
        debug!("Requesting monthly series for {}", symbol);

        let client = reqwest::Client::builder()
            .user_agent("fundwise/0.1")
            .build()?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(symbol, format!("Request error: {e}")))?;

        if !response.status().is_success() {
            return Err(unavailable(
                symbol,
                format!("HTTP error: {}", response.status()),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| unavailable(symbol, format!("Failed to read response: {e}")))?;
        let data: MonthlySeriesResponse = serde_json::from_str(&text)
            .map_err(|e| unavailable(symbol, format!("Failed to parse JSON response: {e}")))?;

        let monthly = match data.monthly {
            Some(monthly) => monthly,
            None => {
                // Rate limits and bad symbols come back as 200 with a message instead.
                let reason = data
                    .note
                    .or(data.information)
                    .or(data.error_message)
                    .unwrap_or_else(|| "response has no Monthly Time Series".to_string());
                return Err(unavailable(symbol, reason));
            }
        };

        let closes = parse_closes(symbol, monthly)?;
        let series = normalize_closes(symbol, closes, months)?;
        debug!(points = series.len(), "Normalized monthly series");
        Ok(series)
    }
}
