//! Questionnaire answers in, enriched fund shortlist out.

use crate::core::enrich::FundEnricher;
use crate::core::error::{FundError, fund_error};
use crate::core::fund::EnrichedFund;
use crate::core::profile::RiskProfileAnswers;
use crate::core::risk::{self, RiskCategory, RiskScore};
use crate::core::source::FundSource;
use anyhow::Result;
use futures::future::join_all;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub score: RiskScore,
    pub category: RiskCategory,
    /// Shortlist order, each fund enriched independently.
    pub funds: Vec<EnrichedFund>,
}

pub struct RecommendationPipeline<'a> {
    source: &'a (dyn FundSource + Send + Sync),
    enricher: FundEnricher<'a>,
}

impl<'a> RecommendationPipeline<'a> {
    pub fn new(source: &'a (dyn FundSource + Send + Sync), enricher: FundEnricher<'a>) -> Self {
        Self { source, enricher }
    }

    pub async fn recommend(&self, answers: &RiskProfileAnswers) -> Result<Recommendation> {
        self.recommend_with_progress(answers, &|_| {}, &|| {}).await
    }

    /// `on_shortlist` receives the shortlist size before enrichment starts and
    /// `on_enriched` fires once per finished fund.
    #[instrument(name = "Recommend", skip_all)]
    pub async fn recommend_with_progress(
        &self,
        answers: &RiskProfileAnswers,
        on_shortlist: &(dyn Fn(usize) + Sync),
        on_enriched: &(dyn Fn() + Sync),
    ) -> Result<Recommendation> {
        let score = risk::score(answers);
        let category = risk::categorize(score);
        info!(score = score.value(), %category, "Assessed risk profile");

        let candidates = self
            .source
            .recommendation_candidates(answers)
            .await
            .map_err(|e| match fund_error(&e) {
                Some(FundError::RecommendationUnavailable(_)) => e,
                _ => FundError::RecommendationUnavailable(format!("{e:#}")).into(),
            })?;
        if candidates.is_empty() {
            return Err(FundError::RecommendationUnavailable(format!(
                "{} returned no candidate funds",
                self.source.name()
            ))
            .into());
        }

        let shortlist = risk::filter_by_category(&candidates, category);
        info!(
            candidates = candidates.len(),
            shortlisted = shortlist.len(),
            "Selected funds for enrichment"
        );
        on_shortlist(shortlist.len());

        let enrich_futures = shortlist.into_iter().map(|fund| async move {
            let enriched = self.enricher.enrich(fund).await;
            on_enriched();
            enriched
        });
        let funds = join_all(enrich_futures).await;

        Ok(Recommendation {
            score,
            category,
            funds,
        })
    }
}
