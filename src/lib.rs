pub mod cli;
pub mod core;
pub mod providers;

use crate::core::browse::FundQuery;
use crate::core::config::AppConfig;
use crate::core::enrich::FundEnricher;
use crate::core::profile::RiskProfileAnswers;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Recommend(RiskProfileAnswers),
    Funds {
        query: FundQuery,
        category: Option<String>,
    },
    Fund {
        id: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fundwise starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!(
        benchmark = %config.benchmark_symbol,
        months = config.history_months,
        backend = config.providers.backend.is_some(),
        "Loaded config"
    );

    let alpha_vantage = config.alpha_vantage();
    let market = providers::alpha_vantage::AlphaVantageProvider::new(
        &alpha_vantage.base_url,
        &alpha_vantage.api_key,
    );
    let source = providers::fund_source(&config);
    let enricher = FundEnricher::new(&market)
        .with_benchmark(&config.benchmark_symbol)
        .with_months(config.history_months);

    match command {
        AppCommand::Recommend(answers) => cli::recommend::run(&source, enricher, &answers).await,
        AppCommand::Funds { query, category } => {
            cli::funds::run(&source, &query, category.as_deref()).await
        }
        AppCommand::Fund { id } => cli::fund::run(&source, &enricher, &id).await,
    }
}
