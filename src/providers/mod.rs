pub mod alpha_vantage;
pub mod backend;
pub mod catalog;
pub mod layered;
pub mod util;

use crate::core::config::AppConfig;
use crate::core::source::FundSource;
use backend::BackendSource;
use catalog::CatalogSource;
use layered::LayeredFundSource;

/// Remote backend first when configured, the built-in catalog last.
pub fn fund_source(config: &AppConfig) -> LayeredFundSource {
    let mut sources: Vec<Box<dyn FundSource>> = Vec::new();
    if let Some(backend) = &config.providers.backend {
        sources.push(Box::new(BackendSource::new(&backend.base_url)));
    }
    sources.push(Box::new(CatalogSource));
    LayeredFundSource::new(sources)
}
