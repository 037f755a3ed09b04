use super::ui;
use crate::core::browse::{self, FundQuery};
use crate::core::fund::FundDescriptor;
use crate::core::risk;
use crate::core::source::FundSource;
use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::debug;

fn funds_table(funds: &[FundDescriptor]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Fund"),
        ui::header_cell("Company"),
        ui::header_cell("Risk"),
        ui::header_cell("Asset Class"),
        ui::header_cell("Fee (%)"),
        ui::header_cell("Min. Investment"),
        ui::header_cell("Performance"),
    ]);

    for fund in funds {
        table.add_row(vec![
            Cell::new(&fund.id),
            Cell::new(&fund.name),
            Cell::new(&fund.company),
            Cell::new(fund.risk_tier),
            Cell::new(&fund.asset_class),
            ui::number_cell(format!("{:.2}", fund.fee)),
            ui::number_cell(format!("{:.0}", fund.minimum_investment)),
            ui::change_cell(fund.baseline_performance_percent),
        ]);
    }
    table
}

/// Applies the browser query, then the optional risk category label.
pub fn select_funds(
    funds: &[FundDescriptor],
    query: &FundQuery,
    category: Option<&str>,
) -> Vec<FundDescriptor> {
    let matched = query.apply(funds);
    match category {
        Some(label) => risk::filter_by_category_label(&matched, label),
        None => matched,
    }
}

pub async fn run(
    source: &(dyn FundSource + Send + Sync),
    query: &FundQuery,
    category: Option<&str>,
) -> Result<()> {
    let funds = source.list_funds().await?;
    let selected = select_funds(&funds, query, category);
    debug!(total = funds.len(), selected = selected.len(), "Browsing funds");

    println!(
        "{}\n",
        ui::style_text("Available Funds", ui::StyleType::Title)
    );
    if selected.is_empty() {
        println!(
            "{}",
            ui::style_text("No funds match the given filters.", ui::StyleType::Subtle)
        );
    } else {
        println!("{}", funds_table(&selected));
    }

    let tiers: Vec<String> = browse::risk_tiers(&funds)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "\n{} {}\n{} {}",
        ui::style_text("Risk levels:", ui::StyleType::Label),
        tiers.join(", "),
        ui::style_text("Asset classes:", ui::StyleType::Label),
        browse::asset_classes(&funds).join(", ")
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::fund::RiskTier;

    fn ids(funds: &[FundDescriptor]) -> Vec<&str> {
        funds.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_select_funds_by_query_then_category() {
        let query = FundQuery {
            asset_class: Some("Money Market".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ids(&select_funds(catalog::funds(), &query, None)),
            vec!["fund1", "fund8"]
        );

        let all = FundQuery::default();
        assert_eq!(
            ids(&select_funds(catalog::funds(), &all, Some("Aggressive"))),
            vec!["fund2", "fund5", "fund7", "fund9"]
        );
        assert_eq!(
            select_funds(catalog::funds(), &all, Some("unheard-of")).len(),
            catalog::funds().len()
        );
    }

    #[test]
    fn test_table_renders_catalog_rows() {
        console::set_colors_enabled(false);
        let query = FundQuery {
            risk_tier: Some(RiskTier::LowMedium),
            ..Default::default()
        };
        let selected = select_funds(catalog::funds(), &query, None);
        let rendered = funds_table(&selected).force_no_tty().to_string();
        assert!(rendered.contains("Fixed Income Fund"));
        assert!(rendered.contains("Low-Medium"));
        assert!(rendered.contains("10.30%"));
    }
}
