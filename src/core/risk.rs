//! Risk scoring, categorization and category-driven fund filtering.
//!
//! All functions here are pure and synchronous.

use crate::core::fund::{FundDescriptor, RiskTier};
use crate::core::profile::{Experience, RiskProfileAnswers, TimeHorizon};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Shortlists are padded up to this many funds when the pool allows it.
pub const MIN_RECOMMENDATIONS: usize = 3;

const TOLERANCE_WEIGHT: f64 = 0.6;

/// Heuristic risk score, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Rounds to the nearest integer and clamps into `1..=10`.
    pub fn from_raw(raw: f64) -> Self {
        let rounded = if raw.is_nan() { 0.0 } else { raw.round() };
        let clamped = rounded.clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        RiskScore(clamped as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum RiskCategory {
    Conservative,
    Moderate,
    Balanced,
    Growth,
    Aggressive,
}

impl RiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => "Conservative",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::Balanced => "Balanced",
            RiskCategory::Growth => "Growth",
            RiskCategory::Aggressive => "Aggressive",
        }
    }

    /// Fund tiers suitable for an investor in this category.
    pub fn admissible_tiers(&self) -> &'static [RiskTier] {
        match self {
            RiskCategory::Conservative => &[RiskTier::Low, RiskTier::LowMedium],
            RiskCategory::Moderate => &[RiskTier::Medium, RiskTier::LowMedium],
            RiskCategory::Balanced => &[RiskTier::Medium],
            RiskCategory::Growth => &[RiskTier::Medium, RiskTier::High],
            RiskCategory::Aggressive => &[RiskTier::High, RiskTier::VeryHigh],
        }
    }

    pub fn admits(&self, tier: RiskTier) -> bool {
        self.admissible_tiers().contains(&tier)
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => "Primarily money market and fixed income funds",
            RiskCategory::Moderate => "Balanced between fixed income and moderate risk funds",
            RiskCategory::Balanced => "Mix of fixed income and equity funds",
            RiskCategory::Growth => "Higher allocation to equity funds with some fixed income",
            RiskCategory::Aggressive => "Primarily equity and aggressive growth funds",
        }
    }

    pub fn review_frequency(&self) -> &'static str {
        match self {
            RiskCategory::Conservative | RiskCategory::Moderate => "Quarterly",
            _ => "Monthly",
        }
    }
}

impl Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RiskCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(RiskCategory::Conservative),
            "moderate" => Ok(RiskCategory::Moderate),
            "balanced" => Ok(RiskCategory::Balanced),
            "growth" => Ok(RiskCategory::Growth),
            "aggressive" => Ok(RiskCategory::Aggressive),
            _ => Err(anyhow::anyhow!("Invalid risk category: {}", s)),
        }
    }
}

// Unparseable ages contribute nothing, same as the 60+ bucket.
fn age_contribution(age: Option<u32>) -> f64 {
    match age {
        Some(age) if age < 30 => 2.0,
        Some(age) if age < 40 => 1.5,
        Some(age) if age < 50 => 1.0,
        Some(age) if age < 60 => 0.5,
        _ => 0.0,
    }
}

fn horizon_contribution(horizon: TimeHorizon) -> f64 {
    match horizon {
        TimeHorizon::Long => 2.0,
        TimeHorizon::Medium => 1.0,
        TimeHorizon::Short => 0.0,
    }
}

fn experience_contribution(experience: Experience) -> f64 {
    match experience {
        Experience::Experienced => 1.0,
        Experience::SomeInvestments => 0.5,
        Experience::NoInvestments => 0.0,
    }
}

/// Weighted additive score over age, horizon, stated tolerance and experience.
pub fn score(answers: &RiskProfileAnswers) -> RiskScore {
    let raw = age_contribution(answers.parsed_age())
        + horizon_contribution(answers.time_horizon)
        + f64::from(answers.risk_tolerance) * TOLERANCE_WEIGHT
        + experience_contribution(answers.existing_investments);

    let score = RiskScore::from_raw(raw);
    debug!(raw, score = score.value(), "Computed risk score");
    score
}

pub fn categorize(score: RiskScore) -> RiskCategory {
    match score.value() {
        0..=2 => RiskCategory::Conservative,
        3..=4 => RiskCategory::Moderate,
        5..=6 => RiskCategory::Balanced,
        7..=8 => RiskCategory::Growth,
        _ => RiskCategory::Aggressive,
    }
}

/// Keeps the funds whose tier suits `category`, in pool order, then pads the
/// shortlist from the remaining pool up to [`MIN_RECOMMENDATIONS`].
pub fn filter_by_category(funds: &[FundDescriptor], category: RiskCategory) -> Vec<FundDescriptor> {
    let (mut selected, remaining): (Vec<&FundDescriptor>, Vec<&FundDescriptor>) = funds
        .iter()
        .partition(|fund| category.admits(fund.risk_tier));

    let matched = selected.len();
    if matched < MIN_RECOMMENDATIONS && !funds.is_empty() {
        selected.extend(remaining.into_iter().take(MIN_RECOMMENDATIONS - matched));
    }
    debug!(
        %category,
        matched,
        total = selected.len(),
        "Filtered funds by risk category"
    );

    selected.into_iter().cloned().collect()
}

/// Same as [`filter_by_category`], but an unrecognized label keeps every fund.
pub fn filter_by_category_label(funds: &[FundDescriptor], label: &str) -> Vec<FundDescriptor> {
    match label.parse::<RiskCategory>() {
        Ok(category) => filter_by_category(funds, category),
        Err(_) => {
            debug!(label, "Unknown risk category, keeping all funds");
            funds.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::InvestmentGoal;

    fn answers(
        age: &str,
        horizon: TimeHorizon,
        tolerance: u8,
        experience: Experience,
    ) -> RiskProfileAnswers {
        RiskProfileAnswers {
            age: age.to_string(),
            monthly_income: "50000".to_string(),
            monthly_contribution: "2000".to_string(),
            investment_goal: InvestmentGoal::Retirement,
            time_horizon: horizon,
            risk_tolerance: tolerance,
            existing_investments: experience,
        }
    }

    fn fund(id: &str, tier: RiskTier) -> FundDescriptor {
        FundDescriptor {
            id: id.to_string(),
            name: format!("Fund {id}"),
            company: "Test AM".to_string(),
            risk_tier: tier,
            asset_class: "Equity".to_string(),
            fee: 1.0,
            minimum_investment: 1000.0,
            proxy_symbol: None,
            baseline_performance_percent: 5.0,
            description: String::new(),
        }
    }

    fn ids(funds: &[FundDescriptor]) -> Vec<&str> {
        funds.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_young_experienced_long_horizon_is_aggressive() {
        let a = answers("25", TimeHorizon::Long, 8, Experience::Experienced);
        let s = score(&a);
        assert_eq!(s.value(), 10);
        assert_eq!(categorize(s), RiskCategory::Aggressive);
    }

    #[test]
    fn test_retiree_short_horizon_is_conservative() {
        let a = answers("65", TimeHorizon::Short, 1, Experience::NoInvestments);
        let s = score(&a);
        assert_eq!(s.value(), 1);
        assert_eq!(categorize(s), RiskCategory::Conservative);
    }

    #[test]
    fn test_age_buckets() {
        let base = |age: &str| score(&answers(age, TimeHorizon::Short, 5, Experience::NoInvestments));
        // tolerance 5 contributes 3.0
        assert_eq!(base("29").value(), 5);
        assert_eq!(base("30").value(), 5); // 4.5 rounds up
        assert_eq!(base("45").value(), 4);
        assert_eq!(base("55").value(), 4); // 3.5 rounds up
        assert_eq!(base("60").value(), 3);
    }

    #[test]
    fn test_unparseable_age_scores_like_sixty_plus() {
        let garbled = score(&answers("n/a", TimeHorizon::Medium, 6, Experience::SomeInvestments));
        let senior = score(&answers("70", TimeHorizon::Medium, 6, Experience::SomeInvestments));
        assert_eq!(garbled, senior);
    }

    #[test]
    fn test_score_is_clamped() {
        let low = score(&answers("99", TimeHorizon::Short, 0, Experience::NoInvestments));
        assert_eq!(low.value(), 1);
        let high = score(&answers("18", TimeHorizon::Long, 255, Experience::Experienced));
        assert_eq!(high.value(), 10);
        assert_eq!(RiskScore::from_raw(f64::NAN).value(), 1);
    }

    #[test]
    fn test_raw_values_outside_range_are_clamped() {
        for (raw, expected) in [
            (0.0, 1),
            (-40.0, 1),
            (200.0, 10),
            (f64::INFINITY, 10),
            (f64::NEG_INFINITY, 1),
        ] {
            let score = RiskScore::from_raw(raw);
            assert_eq!(score.value(), expected, "raw {raw}");
            assert!((RiskScore::MIN..=RiskScore::MAX).contains(&score.value()));
        }
        assert_eq!(RiskScore::from_raw(200.0).to_string(), "10/10");
    }

    #[test]
    fn test_score_stays_in_range_and_is_monotonic_in_tolerance() {
        let ages = ["17", "35", "48", "59", "80", "?"];
        let horizons = [TimeHorizon::Short, TimeHorizon::Medium, TimeHorizon::Long];
        let experiences = [
            Experience::NoInvestments,
            Experience::SomeInvestments,
            Experience::Experienced,
        ];

        for age in ages {
            for horizon in horizons {
                for experience in experiences {
                    let mut previous = 0;
                    for tolerance in 1..=10 {
                        let s = score(&answers(age, horizon, tolerance, experience)).value();
                        assert!((1..=10).contains(&s));
                        assert!(s >= previous, "score dropped at tolerance {tolerance}");
                        previous = s;
                    }
                }
            }
        }
    }

    #[test]
    fn test_category_boundaries() {
        let cat = |v: f64| categorize(RiskScore::from_raw(v));
        assert_eq!(cat(1.0), RiskCategory::Conservative);
        assert_eq!(cat(2.0), RiskCategory::Conservative);
        assert_eq!(cat(3.0), RiskCategory::Moderate);
        assert_eq!(cat(4.0), RiskCategory::Moderate);
        assert_eq!(cat(5.0), RiskCategory::Balanced);
        assert_eq!(cat(6.0), RiskCategory::Balanced);
        assert_eq!(cat(7.0), RiskCategory::Growth);
        assert_eq!(cat(8.0), RiskCategory::Growth);
        assert_eq!(cat(9.0), RiskCategory::Aggressive);
        assert_eq!(cat(10.0), RiskCategory::Aggressive);
    }

    #[test]
    fn test_filter_keeps_admissible_tiers_in_order() {
        let pool = vec![
            fund("a", RiskTier::High),
            fund("b", RiskTier::Low),
            fund("c", RiskTier::LowMedium),
            fund("d", RiskTier::Medium),
            fund("e", RiskTier::Low),
        ];

        let picked = filter_by_category(&pool, RiskCategory::Conservative);
        assert_eq!(ids(&picked), vec!["b", "c", "e"]);
        assert!(picked.iter().all(|f| RiskCategory::Conservative.admits(f.risk_tier)));
    }

    #[test]
    fn test_filter_backfills_to_three() {
        let pool = vec![
            fund("a", RiskTier::High),
            fund("b", RiskTier::LowMedium),
            fund("c", RiskTier::VeryHigh),
            fund("d", RiskTier::LowMedium),
            fund("e", RiskTier::Medium),
        ];

        let picked = filter_by_category(&pool, RiskCategory::Conservative);
        assert_eq!(ids(&picked), vec!["b", "d", "a"]);
    }

    #[test]
    fn test_filter_backfill_never_exceeds_pool() {
        let pool = vec![fund("a", RiskTier::High), fund("b", RiskTier::MediumHigh)];
        let picked = filter_by_category(&pool, RiskCategory::Balanced);
        assert_eq!(ids(&picked), vec!["a", "b"]);

        assert!(filter_by_category(&[], RiskCategory::Growth).is_empty());
    }

    #[test]
    fn test_filter_without_matches_takes_first_three() {
        let pool = vec![
            fund("a", RiskTier::Low),
            fund("b", RiskTier::Low),
            fund("c", RiskTier::LowMedium),
            fund("d", RiskTier::Low),
        ];
        let picked = filter_by_category(&pool, RiskCategory::Aggressive);
        assert_eq!(ids(&picked), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_medium_high_only_reaches_shortlist_through_backfill() {
        for category in [
            RiskCategory::Conservative,
            RiskCategory::Moderate,
            RiskCategory::Balanced,
            RiskCategory::Growth,
            RiskCategory::Aggressive,
        ] {
            assert!(!category.admits(RiskTier::MediumHigh));
        }
    }

    #[test]
    fn test_unknown_category_label_passes_everything_through() {
        let pool = vec![
            fund("a", RiskTier::High),
            fund("b", RiskTier::Low),
            fund("c", RiskTier::Medium),
            fund("d", RiskTier::VeryHigh),
        ];
        assert_eq!(ids(&filter_by_category_label(&pool, "reckless")), vec!["a", "b", "c", "d"]);
        assert_eq!(ids(&filter_by_category_label(&pool, "balanced")), vec!["c", "a", "b"]);
    }
}
