//! Tries fund sources in priority order.

use crate::core::error::{FundError, fund_error};
use crate::core::fund::FundDescriptor;
use crate::core::profile::RiskProfileAnswers;
use crate::core::source::FundSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

/// The first source to answer wins; failing sources are logged and skipped.
///
/// Listing calls that exhaust every source fail with
/// [`FundError::RecommendationUnavailable`]; lookups fail with
/// [`FundError::FundNotFound`].
pub struct LayeredFundSource {
    sources: Vec<Box<dyn FundSource>>,
}

impl LayeredFundSource {
    pub fn new(sources: Vec<Box<dyn FundSource>>) -> Self {
        Self { sources }
    }

    async fn first_non_empty<'a, F, Fut>(
        &'a self,
        what: &str,
        fetch: F,
    ) -> Result<Vec<FundDescriptor>>
    where
        F: Fn(&'a dyn FundSource) -> Fut,
        Fut: std::future::Future<Output = Result<Vec<FundDescriptor>>>,
    {
        let mut failures = Vec::new();
        for source in &self.sources {
            match fetch(source.as_ref()).await {
                Ok(funds) if !funds.is_empty() => {
                    debug!(source = source.name(), count = funds.len(), "Fetched {}", what);
                    return Ok(funds);
                }
                Ok(_) => {
                    warn!(source = source.name(), "No {} returned, trying next source", what);
                    failures.push(format!("{}: empty", source.name()));
                }
                Err(e) => {
                    warn!(
                        source = source.name(),
                        error = %e,
                        "Failed to fetch {}, trying next source",
                        what
                    );
                    failures.push(format!("{}: {e}", source.name()));
                }
            }
        }

        let reason = if failures.is_empty() {
            "no fund sources configured".to_string()
        } else {
            failures.join("; ")
        };
        Err(FundError::RecommendationUnavailable(reason).into())
    }
}

#[async_trait]
impl FundSource for LayeredFundSource {
    fn name(&self) -> &str {
        "layered"
    }

    async fn recommendation_candidates(
        &self,
        answers: &RiskProfileAnswers,
    ) -> Result<Vec<FundDescriptor>> {
        self.first_non_empty("recommendation candidates", |source| {
            source.recommendation_candidates(answers)
        })
        .await
    }

    async fn list_funds(&self) -> Result<Vec<FundDescriptor>> {
        self.first_non_empty("funds", |source| source.list_funds())
            .await
    }

    async fn get_fund(&self, id: &str) -> Result<FundDescriptor> {
        for source in &self.sources {
            match source.get_fund(id).await {
                Ok(fund) => return Ok(fund),
                Err(e) => match fund_error(&e) {
                    Some(FundError::FundNotFound(_)) => {
                        debug!(source = source.name(), id, "Fund not in source")
                    }
                    _ => warn!(source = source.name(), id, error = %e, "Fund lookup failed"),
                },
            }
        }
        Err(FundError::FundNotFound(id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::{Experience, InvestmentGoal, TimeHorizon};
    use crate::providers::catalog::CatalogSource;

    struct DownSource;

    #[async_trait]
    impl FundSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn recommendation_candidates(
            &self,
            _answers: &RiskProfileAnswers,
        ) -> Result<Vec<FundDescriptor>> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn list_funds(&self) -> Result<Vec<FundDescriptor>> {
            Ok(Vec::new())
        }

        async fn get_fund(&self, _id: &str) -> Result<FundDescriptor> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    fn answers() -> RiskProfileAnswers {
        RiskProfileAnswers {
            age: "33".to_string(),
            monthly_income: String::new(),
            monthly_contribution: String::new(),
            investment_goal: InvestmentGoal::Other,
            time_horizon: TimeHorizon::Short,
            risk_tolerance: 3,
            existing_investments: Experience::NoInvestments,
        }
    }

    #[tokio::test]
    async fn test_falls_back_to_catalog() {
        let layered = LayeredFundSource::new(vec![Box::new(DownSource), Box::new(CatalogSource)]);

        let candidates = layered.recommendation_candidates(&answers()).await.unwrap();
        assert_eq!(candidates.len(), 9);

        // an empty listing also moves on
        let funds = layered.list_funds().await.unwrap();
        assert_eq!(funds.len(), 9);

        let fund = layered.get_fund("fund7").await.unwrap();
        assert_eq!(fund.name, "Equity Index Fund");
    }

    #[tokio::test]
    async fn test_exhausted_sources() {
        let layered = LayeredFundSource::new(vec![Box::new(DownSource)]);

        let err = layered.recommendation_candidates(&answers()).await.unwrap_err();
        assert!(matches!(
            fund_error(&err),
            Some(FundError::RecommendationUnavailable(reason)) if reason.contains("connection refused")
        ));

        let err = layered.get_fund("fund7").await.unwrap_err();
        assert!(matches!(fund_error(&err), Some(FundError::FundNotFound(_))));
    }

    #[tokio::test]
    async fn test_no_sources() {
        let layered = LayeredFundSource::new(Vec::new());
        let err = layered.list_funds().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Recommendations unavailable: no fund sources configured"
        );
    }
}
