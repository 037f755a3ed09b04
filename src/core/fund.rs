//! Fund descriptors, risk tiers and the enriched records produced from them.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Static volatility label attached to every fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskTier {
    pub const ALL: [RiskTier; 6] = [
        RiskTier::Low,
        RiskTier::LowMedium,
        RiskTier::Medium,
        RiskTier::MediumHigh,
        RiskTier::High,
        RiskTier::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::LowMedium => "Low-Medium",
            RiskTier::Medium => "Medium",
            RiskTier::MediumHigh => "Medium-High",
            RiskTier::High => "High",
            RiskTier::VeryHigh => "Very High",
        }
    }
}

impl Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RiskTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "low" => Ok(RiskTier::Low),
            "low medium" => Ok(RiskTier::LowMedium),
            "medium" => Ok(RiskTier::Medium),
            "medium high" => Ok(RiskTier::MediumHigh),
            "high" => Ok(RiskTier::High),
            "very high" => Ok(RiskTier::VeryHigh),
            _ => Err(anyhow::anyhow!("Invalid risk tier: {}", s)),
        }
    }
}

/// A fund as listed by a catalog or the recommendation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundDescriptor {
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(rename = "risk")]
    pub risk_tier: RiskTier,
    pub asset_class: String,
    pub fee: f64,
    pub minimum_investment: f64,
    /// Ticker standing in for the fund's own price feed.
    #[serde(rename = "symbol", default)]
    pub proxy_symbol: Option<String>,
    /// Static performance figure, used when no market data can be fetched.
    #[serde(rename = "performancePercent")]
    pub baseline_performance_percent: f64,
    #[serde(default)]
    pub description: String,
}

/// One month of a percent-change series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// `YYYY-MM`
    pub date: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFund {
    pub fund: FundDescriptor,
    pub performance_percent: f64,
    /// Either empty or fully aligned with the benchmark series.
    pub historical_data: Vec<HistoricalPoint>,
}

impl EnrichedFund {
    /// The descriptor as-is: baseline performance and no series.
    pub fn baseline(fund: FundDescriptor) -> Self {
        Self {
            performance_percent: fund.baseline_performance_percent,
            fund,
            historical_data: Vec::new(),
        }
    }

    pub fn has_history(&self) -> bool {
        !self.historical_data.is_empty()
    }
}
