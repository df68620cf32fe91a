// src/selection/eligibility.rs

use serde::{Deserialize, Serialize};

use crate::model::campaign::Campaign;
use crate::model::request::AdRequest;

/// How the category and country checks combine into eligibility.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Eligible when either dimension matches. Legacy behavior and a probable defect, see `All`.
    #[default]
    Any,
    /// Eligible only when both dimensions match.
    All,
}

/// Per-campaign outcome of the targeting checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    pub category: bool,
    pub country: bool,
}

impl Eligibility {
    pub fn evaluate(campaign: &Campaign, request: &AdRequest) -> Self {
        Self {
            category: matches_category(campaign, request),
            country: matches_country(campaign, request),
        }
    }

    pub fn is_eligible(&self, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Any => self.category || self.country,
            MatchMode::All => self.category && self.country,
        }
    }
}

/// An unset request category matches everything, as does a campaign without category targeting.
pub fn matches_category(campaign: &Campaign, request: &AdRequest) -> bool {
    let Some(category) = request.category.as_deref() else {
        return true;
    };
    let categories = campaign.categories();
    categories.is_empty() || categories.iter().any(|c| c == category)
}

/// Unlike categories, an unset request country only matches campaigns without country targeting.
pub fn matches_country(campaign: &Campaign, request: &AdRequest) -> bool {
    let countries = campaign.countries();
    if countries.is_empty() {
        return true;
    }
    match request.country.as_deref() {
        Some(country) => countries.iter().any(|c| c == country),
        None => false,
    }
}
