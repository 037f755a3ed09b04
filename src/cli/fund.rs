use super::ui;
use crate::core::enrich::FundEnricher;
use crate::core::error::{FundError, fund_error};
use crate::core::fund::EnrichedFund;
use crate::core::source::FundSource;
use anyhow::Result;
use comfy_table::{Cell, Table};

impl EnrichedFund {
    pub fn display_details(&self) -> String {
        let fund = &self.fund;
        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text(&fund.name, ui::StyleType::Title),
            ui::style_text(&fund.company, ui::StyleType::Subtle)
        );
        if !fund.description.is_empty() {
            output.push_str(&fund.description);
            output.push_str("\n\n");
        }

        let facts = [
            ("Risk level:", fund.risk_tier.to_string()),
            ("Asset class:", fund.asset_class.clone()),
            ("Annual fee:", format!("{:.2}%", fund.fee)),
            ("Minimum investment:", format!("{:.0}", fund.minimum_investment)),
            ("Performance:", format!("{:.2}%", self.performance_percent)),
        ];
        for (label, value) in facts {
            output.push_str(&format!(
                "{} {}\n",
                ui::style_text(label, ui::StyleType::Label),
                value
            ));
        }
        output
    }

    fn history_table(&self, benchmark_symbol: &str) -> Table {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Month"),
            ui::header_cell(&self.fund.name),
            ui::header_cell(&format!("Benchmark ({benchmark_symbol})")),
        ]);
        for point in &self.historical_data {
            table.add_row(vec![
                Cell::new(&point.date),
                ui::change_cell(point.value),
                ui::optional_change_cell(point.benchmark),
            ]);
        }
        table
    }

    /// Monthly series against the benchmark, or a notice when there is none.
    pub fn display_history(&self, benchmark_symbol: &str) -> String {
        if self.has_history() {
            self.history_table(benchmark_symbol).to_string()
        } else {
            ui::style_text(
                "No performance chart available for this fund.",
                ui::StyleType::Subtle,
            )
        }
    }
}

pub async fn run(
    source: &(dyn FundSource + Send + Sync),
    enricher: &FundEnricher<'_>,
    id: &str,
) -> Result<()> {
    let fund = match source.get_fund(id).await {
        Ok(fund) => fund,
        Err(e) => {
            if let Some(FundError::FundNotFound(_)) = fund_error(&e) {
                eprintln!(
                    "{}",
                    ui::style_text(&format!("No fund with id '{id}'."), ui::StyleType::Error)
                );
            }
            return Err(e);
        }
    };

    let pb = ui::new_progress_bar(1);
    pb.set_message("Fetching market data...");
    let enriched = enricher.enrich(fund).await;
    pb.finish_and_clear();

    println!("{}", enriched.display_details());
    ui::print_separator();
    println!(
        "{}\n",
        ui::style_text("Historical Performance", ui::StyleType::Title)
    );
    println!("{}", enriched.display_history(enricher.benchmark_symbol()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::fund::HistoricalPoint;

    #[test]
    fn test_details_and_history() {
        console::set_colors_enabled(false);
        let enriched = EnrichedFund {
            fund: catalog::find("fund3").unwrap().clone(),
            performance_percent: -1.25,
            historical_data: vec![
                HistoricalPoint {
                    date: "2024-05".to_string(),
                    value: 0.0,
                    benchmark: Some(0.0),
                },
                HistoricalPoint {
                    date: "2024-06".to_string(),
                    value: -1.25,
                    benchmark: None,
                },
            ],
        };

        let details = enriched.display_details();
        assert!(details.contains("Balanced Fund"));
        assert!(details.contains("Performance: -1.25%"));
        assert!(details.contains("Risk level: Medium"));

        let history = enriched.history_table("SPY").force_no_tty().to_string();
        assert!(history.contains("Benchmark (SPY)"));
        assert!(history.contains("2024-06"));
        assert!(history.contains("N/A"));
    }

    #[test]
    fn test_missing_history_is_not_an_error() {
        console::set_colors_enabled(false);
        let enriched = EnrichedFund::baseline(catalog::find("fund9").unwrap().clone());
        assert_eq!(
            enriched.display_history("SPY"),
            "No performance chart available for this fund."
        );
        assert!(enriched.display_details().contains("Performance: 15.20%"));
    }
}
