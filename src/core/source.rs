//! Where candidate funds come from.

use crate::core::fund::FundDescriptor;
use crate::core::profile::RiskProfileAnswers;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FundSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Funds worth considering for this investor, before risk filtering.
    async fn recommendation_candidates(
        &self,
        answers: &RiskProfileAnswers,
    ) -> Result<Vec<FundDescriptor>>;

    async fn list_funds(&self) -> Result<Vec<FundDescriptor>>;

    /// Fails with [`FundNotFound`](crate::core::error::FundError::FundNotFound)
    /// when the id is unknown.
    async fn get_fund(&self, id: &str) -> Result<FundDescriptor>;
}
