use super::ui;
use crate::core::enrich::FundEnricher;
use crate::core::error::{FundError, fund_error};
use crate::core::fund::EnrichedFund;
use crate::core::profile::RiskProfileAnswers;
use crate::core::recommend::{Recommendation, RecommendationPipeline};
use crate::core::source::FundSource;
use anyhow::Result;
use comfy_table::{Cell, Table};

impl Recommendation {
    pub fn display_profile(&self) -> String {
        format!(
            "{}\n\n{}\n\n{} {}\n{} {}",
            ui::style_text("Your Investment Profile", ui::StyleType::Title),
            ui::risk_meter(self.score, self.category),
            ui::style_text("Strategy:", ui::StyleType::Label),
            self.category.strategy(),
            ui::style_text("Review:", ui::StyleType::Label),
            self.category.review_frequency(),
        )
    }

    pub fn display_as_table(&self) -> String {
        self.build_table().to_string()
    }

    fn build_table(&self) -> Table {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Fund"),
            ui::header_cell("Company"),
            ui::header_cell("Risk"),
            ui::header_cell("Asset Class"),
            ui::header_cell("Fee (%)"),
            ui::header_cell("Min. Investment"),
            ui::header_cell("Performance"),
            ui::header_cell("Data"),
        ]);

        for enriched in &self.funds {
            let fund = &enriched.fund;
            table.add_row(vec![
                Cell::new(&fund.name),
                Cell::new(&fund.company),
                Cell::new(fund.risk_tier),
                Cell::new(&fund.asset_class),
                ui::number_cell(format!("{:.2}", fund.fee)),
                ui::number_cell(format!("{:.0}", fund.minimum_investment)),
                ui::change_cell(enriched.performance_percent),
                Cell::new(data_label(enriched)),
            ]);
        }

        table
    }
}

fn data_label(enriched: &EnrichedFund) -> String {
    if enriched.has_history() {
        format!("{} months", enriched.historical_data.len())
    } else {
        ui::style_text("baseline", ui::StyleType::Subtle)
    }
}

pub async fn run(
    source: &(dyn FundSource + Send + Sync),
    enricher: FundEnricher<'_>,
    answers: &RiskProfileAnswers,
) -> Result<()> {
    let pipeline = RecommendationPipeline::new(source, enricher);

    let pb = ui::new_progress_bar(0);
    pb.set_message("Fetching market data...");
    let result = pipeline
        .recommend_with_progress(
            answers,
            &|count| pb.set_length(count as u64),
            &|| pb.inc(1),
        )
        .await;
    pb.finish_and_clear();

    let recommendation = match result {
        Ok(recommendation) => recommendation,
        Err(e) => {
            if let Some(FundError::RecommendationUnavailable(_)) = fund_error(&e) {
                eprintln!(
                    "{}",
                    ui::style_text(
                        "Could not generate recommendations. Please try again.",
                        ui::StyleType::Error
                    )
                );
            }
            return Err(e);
        }
    };

    println!("{}", recommendation.display_profile());
    ui::print_separator();
    println!(
        "{} ({} funds)\n",
        ui::style_text("Recommended Funds", ui::StyleType::Title),
        recommendation.funds.len()
    );
    println!("{}", recommendation.display_as_table());

    Ok(())
}
