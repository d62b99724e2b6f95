//! Investment product catalog and the investments view query

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Risk tier of an investment product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    #[serde(alias = "baixo")]
    Low,
    #[serde(alias = "medio")]
    Medium,
    #[serde(alias = "alto")]
    High,
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "baixo" => Ok(RiskTier::Low),
            "medium" | "medio" => Ok(RiskTier::Medium),
            "high" | "alto" => Ok(RiskTier::High),
            other => Err(format!("Unknown risk tier: {}", other)),
        }
    }
}

/// A product in the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,

    /// Product type label (CDB, LCI, FII, ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Annual yield in percent
    #[serde(rename = "yield")]
    pub yield_pct: f64,

    pub min_investment: f64,
    pub risk: RiskTier,
    pub duration: String,
    pub description: String,
}

impl Investment {
    /// Whether `amount` meets the product's minimum
    pub fn is_affordable(&self, amount: f64) -> bool {
        amount >= self.min_investment
    }
}

/// Ordering of the investments view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvestmentSort {
    /// Highest yield first
    #[default]
    Yield,
    /// Lowest minimum first
    MinInvestment,
    /// Alphabetical
    Name,
}

impl std::str::FromStr for InvestmentSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yield" => Ok(InvestmentSort::Yield),
            "min-investment" | "minInvestment" => Ok(InvestmentSort::MinInvestment),
            "name" => Ok(InvestmentSort::Name),
            other => Err(format!("Unknown sort: {}", other)),
        }
    }
}

/// Filter and ordering for the catalog; `None` fields match everything
#[derive(Debug, Clone, Default)]
pub struct InvestmentQuery {
    /// Case-insensitive substring of name or type
    pub search: Option<String>,
    pub risk: Option<RiskTier>,
    pub kind: Option<String>,
    pub sort: InvestmentSort,
}

impl InvestmentQuery {
    pub fn matches(&self, investment: &Investment) -> bool {
        let matches_search = match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                investment.name.to_lowercase().contains(&term)
                    || investment.kind.to_lowercase().contains(&term)
            }
            None => true,
        };
        let matches_risk = self.risk.map_or(true, |r| investment.risk == r);
        let matches_kind = self.kind.as_ref().map_or(true, |k| &investment.kind == k);

        matches_search && matches_risk && matches_kind
    }

    pub fn apply<'a>(&self, catalog: &'a [Investment]) -> Vec<&'a Investment> {
        let mut selected: Vec<&Investment> = catalog.iter().filter(|i| self.matches(i)).collect();
        selected.sort_by(|a, b| self.compare(a, b));
        selected
    }

    fn compare(&self, a: &Investment, b: &Investment) -> Ordering {
        match self.sort {
            InvestmentSort::Yield => b.yield_pct.total_cmp(&a.yield_pct),
            InvestmentSort::MinInvestment => a.min_investment.total_cmp(&b.min_investment),
            InvestmentSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

/// Distinct product types in catalog order
pub fn investment_types(catalog: &[Investment]) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for investment in catalog {
        if !types.contains(&investment.kind.as_str()) {
            types.push(&investment.kind);
        }
    }
    types
}
