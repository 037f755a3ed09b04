//! Fund browser filtering.

use crate::core::fund::{FundDescriptor, RiskTier};

/// Search and filter criteria for browsing funds. Empty criteria match all.
#[derive(Debug, Clone, Default)]
pub struct FundQuery {
    /// Case-insensitive substring of the fund name or company.
    pub search: Option<String>,
    pub risk_tier: Option<RiskTier>,
    /// Exact asset class, e.g. `Equity`.
    pub asset_class: Option<String>,
}

impl FundQuery {
    pub fn matches(&self, fund: &FundDescriptor) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            fund.name.to_lowercase().contains(&term) || fund.company.to_lowercase().contains(&term)
        });
        let tier_ok = self.risk_tier.is_none_or(|tier| fund.risk_tier == tier);
        let class_ok = self
            .asset_class
            .as_deref()
            .is_none_or(|class| fund.asset_class == class);

        search_ok && tier_ok && class_ok
    }

    pub fn apply(&self, funds: &[FundDescriptor]) -> Vec<FundDescriptor> {
        funds.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

/// Distinct risk tiers in first-seen order.
pub fn risk_tiers(funds: &[FundDescriptor]) -> Vec<RiskTier> {
    let mut tiers = Vec::new();
    for fund in funds {
        if !tiers.contains(&fund.risk_tier) {
            tiers.push(fund.risk_tier);
        }
    }
    tiers
}

/// Distinct asset classes in first-seen order.
pub fn asset_classes(funds: &[FundDescriptor]) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for fund in funds {
        if !classes.iter().any(|c| c == &fund.asset_class) {
            classes.push(fund.asset_class.clone());
        }
    }
    classes
}
