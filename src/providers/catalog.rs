use crate::core::catalog;
use crate::core::error::FundError;
use crate::core::fund::FundDescriptor;
use crate::core::profile::RiskProfileAnswers;
use crate::core::source::FundSource;
use anyhow::Result;
use async_trait::async_trait;

/// Serves the built-in catalog. Never unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSource;

#[async_trait]
impl FundSource for CatalogSource {
    fn name(&self) -> &str {
        "catalog"
    }

    async fn recommendation_candidates(
        &self,
        _answers: &RiskProfileAnswers,
    ) -> Result<Vec<FundDescriptor>> {
        Ok(catalog::funds().to_vec())
    }

    async fn list_funds(&self) -> Result<Vec<FundDescriptor>> {
        Ok(catalog::funds().to_vec())
    }

    async fn get_fund(&self, id: &str) -> Result<FundDescriptor> {
        catalog::find(id)
            .cloned()
            .ok_or_else(|| FundError::FundNotFound(id.to_string()).into())
    }
}
