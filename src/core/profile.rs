//! Questionnaire answers collected from the investor.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "none")]
    NoInvestments,
    #[serde(rename = "some")]
    SomeInvestments,
    #[serde(rename = "experienced")]
    Experienced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentGoal {
    Retirement,
    Education,
    Property,
    Wealth,
    Emergency,
    Other,
}

macro_rules! label_enum {
    ($ty:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub fn label(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label => Ok($ty::$variant),)+
                    _ => Err(anyhow::anyhow!(concat!("Invalid ", stringify!($ty), ": {}"), s)),
                }
            }
        }
    };
}

label_enum!(TimeHorizon { Short => "short", Medium => "medium", Long => "long" });
label_enum!(Experience {
    NoInvestments => "none",
    SomeInvestments => "some",
    Experienced => "experienced",
});
label_enum!(InvestmentGoal {
    Retirement => "retirement",
    Education => "education",
    Property => "property",
    Wealth => "wealth",
    Emergency => "emergency",
    Other => "other",
});

/// Answers as submitted. Numeric fields stay free text until read.
///
/// `monthly_income`, `monthly_contribution` and `investment_goal` are carried
/// to the recommendation backend but do not influence the risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfileAnswers {
    pub age: String,
    #[serde(default)]
    pub monthly_income: String,
    #[serde(default)]
    pub monthly_contribution: String,
    pub investment_goal: InvestmentGoal,
    pub time_horizon: TimeHorizon,
    /// 1 (lowest) to 10 (highest).
    pub risk_tolerance: u8,
    pub existing_investments: Experience,
}

impl RiskProfileAnswers {
    /// Age in whole years, or `None` when the text is not a non-negative integer.
    pub fn parsed_age(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }
}
