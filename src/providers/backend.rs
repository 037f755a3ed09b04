//! Client for the remote recommendation service.

use super::util::{RetryPolicy, with_retry};
use crate::core::error::FundError;
use crate::core::fund::FundDescriptor;
use crate::core::profile::RiskProfileAnswers;
use crate::core::source::FundSource;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument};

pub struct BackendSource {
    base_url: String,
    retry: RetryPolicy,
}

impl BackendSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn client() -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .user_agent("fundwise/0.1")
            .build()?)
    }

    async fn fund_list(response: reqwest::Response, url: &str) -> Result<Vec<FundDescriptor>> {
        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for {}", response.status(), url));
        }
        response
            .json::<Vec<FundDescriptor>>()
            .await
            .with_context(|| format!("Failed to parse fund list from {url}"))
    }
}

#[async_trait]
impl FundSource for BackendSource {
    fn name(&self) -> &str {
        "backend"
    }

    #[instrument(name = "BackendRecommendations", skip_all)]
    async fn recommendation_candidates(
        &self,
        answers: &RiskProfileAnswers,
    ) -> Result<Vec<FundDescriptor>> {
        let url = format!("{}/recommendations", self.base_url);
        debug!("Requesting recommendation candidates from {}", url);

        let client = Self::client()?;
        let response = with_retry(|| client.post(&url).json(answers).send(), self.retry)
            .await
            .with_context(|| format!("Recommendation request to {url} failed"))?;

        Self::fund_list(response, &url).await
    }

    #[instrument(name = "BackendFunds", skip_all)]
    async fn list_funds(&self) -> Result<Vec<FundDescriptor>> {
        let url = format!("{}/funds", self.base_url);
        debug!("Requesting fund list from {}", url);

        let client = Self::client()?;
        let response = with_retry(|| client.get(&url).send(), self.retry)
            .await
            .with_context(|| format!("Fund list request to {url} failed"))?;

        Self::fund_list(response, &url).await
    }

    #[instrument(name = "BackendFund", skip(self), fields(id = %id))]
    async fn get_fund(&self, id: &str) -> Result<FundDescriptor> {
        let url = format!("{}/funds/{}", self.base_url, id);
        debug!("Requesting fund details from {}", url);

        let client = Self::client()?;
        let response = with_retry(|| client.get(&url).send(), self.retry)
            .await
            .with_context(|| format!("Fund request to {url} failed"))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FundError::FundNotFound(id.to_string()).into()),
            status if !status.is_success() => Err(anyhow!("HTTP error: {} for {}", status, url)),
            _ => response
                .json::<FundDescriptor>()
                .await
                .with_context(|| format!("Failed to parse fund from {url}")),
        }
    }
}
