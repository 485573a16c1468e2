//! Deal domain models.

use serde::{Deserialize, Serialize};

/// A prospective investment opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub round: String,
    /// Annual revenue, $M.
    pub revenue: f64,
    pub geo: String,
    /// Year-over-year growth, %.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<i32>,
    /// 0-100.
    pub lead_score: u8,
}

/// Search criteria as entered in the search pane. Empty or missing fields
/// place no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealCriteria {
    pub sector: Option<String>,
    pub round: Option<String>,
    /// Kept as text, the way the form holds it. See [`RevenueBound`] for text
    /// that is not a number.
    #[serde(alias = "revenueMin")]
    pub min_revenue: Option<String>,
    pub geo: Option<String>,
}

/// How a non-empty `min_revenue` that is not a number is applied.
///
/// Blank text counts as zero under both rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevenueBound {
    /// Search-pane rule: text that is not a number places no constraint.
    #[default]
    Lenient,
    /// Mock API rule: text that is not a number matches no deal.
    Strict,
}

impl RevenueBound {
    fn admits(self, revenue: f64, min: &str) -> bool {
        let min = min.trim();
        let min = if min.is_empty() {
            0.0
        } else {
            min.parse::<f64>().unwrap_or(f64::NAN)
        };
        match self {
            RevenueBound::Lenient => min.is_nan() || revenue >= min,
            RevenueBound::Strict => revenue >= min,
        }
    }
}

/// Criteria after normalization: every key present, missing ones empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFilters {
    pub sector: String,
    pub round: String,
    pub min_revenue: String,
    pub geo: String,
}

/// Snapshot of the deal-search store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSearchState {
    pub leads: Vec<Deal>,
    pub filters: DealFilters,
    pub loading: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl DealCriteria {
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn round(mut self, round: impl Into<String>) -> Self {
        self.round = Some(round.into());
        self
    }

    pub fn min_revenue(mut self, min_revenue: impl Into<String>) -> Self {
        self.min_revenue = Some(min_revenue.into());
        self
    }

    pub fn geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = Some(geo.into());
        self
    }

    /// Logical AND of the per-field predicates: exact sector and round,
    /// revenue at least `min_revenue`, case-insensitive substring on geo.
    pub fn matches(&self, deal: &Deal) -> bool {
        self.matches_with(deal, RevenueBound::Lenient)
    }

    pub fn matches_with(&self, deal: &Deal, bound: RevenueBound) -> bool {
        if let Some(sector) = non_empty(&self.sector) {
            if deal.sector != sector {
                return false;
            }
        }
        if let Some(round) = non_empty(&self.round) {
            if deal.round != round {
                return false;
            }
        }
        if let Some(min) = non_empty(&self.min_revenue) {
            if !bound.admits(deal.revenue, min) {
                return false;
            }
        }
        if let Some(geo) = non_empty(&self.geo) {
            if !deal.geo.to_lowercase().contains(&geo.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Deals satisfying every criterion, in their original order.
    pub fn filter(&self, deals: &[Deal]) -> Vec<Deal> {
        self.filter_with(deals, RevenueBound::Lenient)
    }

    pub fn filter_with(&self, deals: &[Deal], bound: RevenueBound) -> Vec<Deal> {
        deals
            .iter()
            .filter(|d| self.matches_with(d, bound))
            .cloned()
            .collect()
    }

    pub fn normalized(&self) -> DealFilters {
        DealFilters {
            sector: self.sector.clone().unwrap_or_default(),
            round: self.round.clone().unwrap_or_default(),
            min_revenue: self.min_revenue.clone().unwrap_or_default(),
            geo: self.geo.clone().unwrap_or_default(),
        }
    }

    /// Non-empty criteria as `GET /api/deals` query parameters.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("sector", &self.sector),
            ("round", &self.round),
            ("revenueMin", &self.min_revenue),
            ("geo", &self.geo),
        ]
        .into_iter()
        .filter_map(|(key, value)| non_empty(value).map(|v| (key, v.to_string())))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(sector: &str, revenue: f64, geo: &str) -> Deal {
        Deal {
            id: "x".to_string(),
            name: "X".to_string(),
            sector: sector.to_string(),
            round: "Seed".to_string(),
            revenue,
            geo: geo.to_string(),
            growth_rate: None,
            founded: None,
            lead_score: 50,
        }
    }

    #[test]
    fn empty_fields_place_no_constraint() {
        let criteria = DealCriteria {
            sector: Some(String::new()),
            round: None,
            min_revenue: Some(String::new()),
            geo: Some(String::new()),
        };
        assert!(criteria.matches(&deal("Tech", 0.0, "US")));
    }

    #[test]
    fn geo_is_case_insensitive_substring() {
        let criteria = DealCriteria::default().geo("york");
        assert!(criteria.matches(&deal("Tech", 1.0, "New York")));
        assert!(!criteria.matches(&deal("Tech", 1.0, "Austin")));
    }

    #[test]
    fn min_revenue_is_inclusive() {
        assert!(DealCriteria::default()
            .min_revenue("25")
            .matches(&deal("Tech", 25.0, "US")));
        assert!(!DealCriteria::default()
            .min_revenue("25.5")
            .matches(&deal("Tech", 25.0, "US")));
        assert!(DealCriteria::default()
            .min_revenue(" 12 ")
            .matches(&deal("Tech", 12.0, "US")));
    }

    #[test]
    fn search_pane_ignores_non_numeric_min_revenue() {
        let leads = crate::deals::pipeline_leads();
        for text in ["abc", " "] {
            let found = DealCriteria::default().min_revenue(text).filter(&leads);
            assert_eq!(found, leads, "min revenue {:?}", text);
        }
    }

    #[test]
    fn strict_bound_rejects_non_numeric_min_revenue() {
        let criteria = DealCriteria::default().min_revenue("lots");
        assert!(!criteria.matches_with(&deal("Tech", 1_000.0, "US"), RevenueBound::Strict));

        let blank = DealCriteria::default().min_revenue(" ");
        assert!(blank.matches_with(&deal("Tech", 0.0, "US"), RevenueBound::Strict));
        assert!(!DealCriteria::default()
            .min_revenue("25.5")
            .matches_with(&deal("Tech", 25.0, "US"), RevenueBound::Strict));
    }

    #[test]
    fn normalized_fills_every_key() {
        let filters = DealCriteria::default().sector("SaaS").normalized();
        assert_eq!(
            filters,
            DealFilters {
                sector: "SaaS".to_string(),
                ..DealFilters::default()
            }
        );
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["minRevenue"], "");
    }

    #[test]
    fn query_pairs_use_api_names() {
        let pairs = DealCriteria::default()
            .sector("Tech")
            .min_revenue("10")
            .geo("")
            .to_query_pairs();
        assert_eq!(
            pairs,
            vec![("sector", "Tech".to_string()), ("revenueMin", "10".to_string())]
        );
    }

    #[test]
    fn criteria_accepts_api_spelling() {
        let criteria: DealCriteria =
            serde_json::from_str(r#"{"revenueMin":"5","geo":"EU"}"#).unwrap();
        assert_eq!(criteria.min_revenue.as_deref(), Some("5"));
        assert_eq!(criteria.geo.as_deref(), Some("EU"));
        assert_eq!(criteria.sector, None);
    }
}
