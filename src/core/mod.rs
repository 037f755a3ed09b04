//! Core business logic: scoring, filtering, enrichment and the abstractions
//! the providers implement.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod enrich;
pub mod error;
pub mod fund;
pub mod log;
pub mod market;
pub mod profile;
pub mod recommend;
pub mod risk;
pub mod source;

// Re-export main types for cleaner imports
pub use error::FundError;
pub use fund::{EnrichedFund, FundDescriptor, HistoricalPoint, RiskTier};
pub use market::MarketDataProvider;
pub use profile::RiskProfileAnswers;
pub use risk::{RiskCategory, RiskScore};
pub use source::FundSource;
