use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fundwise::core::browse::FundQuery;
use fundwise::core::fund::RiskTier;
use fundwise::core::log::init_logging;
use fundwise::core::profile::{Experience, InvestmentGoal, RiskProfileAnswers, TimeHorizon};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Score your risk profile and recommend funds
    Recommend {
        /// Age in years
        #[arg(long)]
        age: String,
        /// short, medium or long
        #[arg(long)]
        time_horizon: TimeHorizon,
        /// Comfort with volatility, 1 (lowest) to 10 (highest)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        risk_tolerance: u8,
        /// none, some or experienced
        #[arg(long)]
        experience: Experience,
        /// retirement, education, property, wealth, emergency or other
        #[arg(long, default_value = "wealth")]
        goal: InvestmentGoal,
        #[arg(long, default_value = "")]
        monthly_income: String,
        #[arg(long, default_value = "")]
        monthly_contribution: String,
    },
    /// Browse available funds
    Funds {
        /// Match fund name or company
        #[arg(short, long)]
        search: Option<String>,
        /// Risk level, e.g. "Low-Medium"
        #[arg(short, long)]
        risk: Option<RiskTier>,
        /// Asset class, e.g. "Equity"
        #[arg(short, long)]
        asset_class: Option<String>,
        /// Only funds suited to a risk category, e.g. "Balanced"
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a fund with its historical performance
    Fund {
        /// Fund id, e.g. fund3
        id: String,
    },
}

impl From<Commands> for fundwise::AppCommand {
    fn from(cmd: Commands) -> fundwise::AppCommand {
        match cmd {
            Commands::Recommend {
                age,
                time_horizon,
                risk_tolerance,
                experience,
                goal,
                monthly_income,
                monthly_contribution,
            } => fundwise::AppCommand::Recommend(RiskProfileAnswers {
                age,
                monthly_income,
                monthly_contribution,
                investment_goal: goal,
                time_horizon,
                risk_tolerance,
                existing_investments: experience,
            }),
            Commands::Funds {
                search,
                risk,
                asset_class,
                category,
            } => fundwise::AppCommand::Funds {
                query: FundQuery {
                    search,
                    risk_tier: risk,
                    asset_class,
                },
                category,
            },
            Commands::Fund { id } => fundwise::AppCommand::Fund { id },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fundwise::cli::setup::setup(),
        Some(cmd) => fundwise::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
