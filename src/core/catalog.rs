//! Built-in fund catalog. Every fund carries a public ticker used as a proxy
//! for its price history.

use crate::core::fund::{FundDescriptor, RiskTier};
use std::sync::LazyLock;

struct Entry {
    id: &'static str,
    name: &'static str,
    company: &'static str,
    performance: f64,
    risk: RiskTier,
    description: &'static str,
    fee: f64,
    minimum_investment: f64,
    asset_class: &'static str,
    symbol: &'static str,
}

const ENTRIES: [Entry; 9] = [
    Entry {
        id: "fund1",
        name: "Money Market Fund",
        company: "CIC Asset Management",
        performance: 9.8,
        risk: RiskTier::Low,
        description: "Invests in short-term debt securities in the Kenyan money market. Ideal for conservative investors seeking capital preservation.",
        fee: 1.5,
        minimum_investment: 5000.0,
        asset_class: "Money Market",
        symbol: "BIL",
    },
    Entry {
        id: "fund2",
        name: "Equity Growth Fund",
        company: "Britam Asset Managers",
        performance: 14.2,
        risk: RiskTier::High,
        description: "Invests primarily in Kenyan and regional equities for long-term capital growth. Higher risk with potential higher returns.",
        fee: 2.5,
        minimum_investment: 10000.0,
        asset_class: "Equity",
        symbol: "KCB.NR",
    },
    Entry {
        id: "fund3",
        name: "Balanced Fund",
        company: "ICEA Lion Asset Management",
        performance: 11.5,
        risk: RiskTier::Medium,
        description: "Balanced exposure across equity and fixed income markets in Kenya. Provides moderate growth with reduced volatility.",
        fee: 2.0,
        minimum_investment: 7500.0,
        asset_class: "Mixed Allocation",
        symbol: "AOK",
    },
    Entry {
        id: "fund4",
        name: "Fixed Income Fund",
        company: "Sanlam Investments",
        performance: 10.3,
        risk: RiskTier::LowMedium,
        description: "Invests primarily in Kenyan government and corporate bonds. Aims to provide regular income with modest capital appreciation.",
        fee: 1.8,
        minimum_investment: 5000.0,
        asset_class: "Fixed Income",
        symbol: "AGG",
    },
    Entry {
        id: "fund5",
        name: "Aggressive Growth Fund",
        company: "Old Mutual Investment Group",
        performance: 16.5,
        risk: RiskTier::VeryHigh,
        description: "Focuses on high-growth sectors and companies in Kenya and East Africa with higher volatility. Suitable for long-term investors with high risk tolerance.",
        fee: 2.8,
        minimum_investment: 15000.0,
        asset_class: "Equity",
        symbol: "QQQ",
    },
    Entry {
        id: "fund6",
        name: "Umoja Fund",
        company: "Cooperative Bank of Kenya",
        performance: 12.7,
        risk: RiskTier::MediumHigh,
        description: "A diversified fund that invests in equities, fixed income, and alternative investments across Kenya and East Africa.",
        fee: 2.2,
        minimum_investment: 10000.0,
        asset_class: "Mixed Allocation",
        symbol: "VBMFX",
    },
    Entry {
        id: "fund7",
        name: "Equity Index Fund",
        company: "GenAfrica Asset Managers",
        performance: 13.8,
        risk: RiskTier::High,
        description: "Tracks the performance of the Nairobi Securities Exchange (NSE) index to provide market returns.",
        fee: 1.75,
        minimum_investment: 8000.0,
        asset_class: "Equity",
        symbol: "VTI",
    },
    Entry {
        id: "fund8",
        name: "Imara Money Market Fund",
        company: "Imara Asset Management",
        performance: 8.9,
        risk: RiskTier::Low,
        description: "Focuses on capital preservation through investments in high-quality money market instruments in Kenya.",
        fee: 1.4,
        minimum_investment: 1000.0,
        asset_class: "Money Market",
        symbol: "VTIP",
    },
    Entry {
        id: "fund9",
        name: "Cytonn High Yield Fund",
        company: "Cytonn Asset Managers",
        performance: 15.2,
        risk: RiskTier::High,
        description: "Targets high yields through investments in real estate projects and structured products in Kenya.",
        fee: 3.0,
        minimum_investment: 20000.0,
        asset_class: "Alternative",
        symbol: "VGSIX",
    },
];

static CATALOG: LazyLock<Vec<FundDescriptor>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|e| FundDescriptor {
            id: e.id.to_string(),
            name: e.name.to_string(),
            company: e.company.to_string(),
            risk_tier: e.risk,
            asset_class: e.asset_class.to_string(),
            fee: e.fee,
            minimum_investment: e.minimum_investment,
            proxy_symbol: Some(e.symbol.to_string()),
            baseline_performance_percent: e.performance,
            description: e.description.to_string(),
        })
        .collect()
});

/// All catalog funds, in listing order.
pub fn funds() -> &'static [FundDescriptor] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static FundDescriptor> {
    CATALOG.iter().find(|fund| fund.id == id)
}
