//! Canned deal data.

use super::deals_model::Deal;

fn deal(
    id: &str,
    name: &str,
    sector: &str,
    round: &str,
    revenue: f64,
    geo: &str,
    lead_score: u8,
) -> Deal {
    Deal {
        id: id.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        round: round.to_string(),
        revenue,
        geo: geo.to_string(),
        growth_rate: None,
        founded: None,
        lead_score,
    }
}

/// Leads the deal-search store starts with and searches over.
pub fn pipeline_leads() -> Vec<Deal> {
    vec![
        Deal {
            growth_rate: Some(120.0),
            founded: Some(2019),
            ..deal("1", "Acme HealthTech", "Healthcare", "Series B", 45.0, "SF Bay Area", 87)
        },
        Deal {
            growth_rate: Some(85.0),
            founded: Some(2020),
            ..deal("2", "FinanceAI Corp", "FinTech", "Series A", 25.0, "New York", 92)
        },
        Deal {
            growth_rate: Some(65.0),
            founded: Some(2017),
            ..deal("3", "CloudifyPro", "SaaS", "Growth", 75.0, "Austin", 78)
        },
    ]
}

/// Deals served by `GET /api/deals`.
pub fn mock_api_deals() -> Vec<Deal> {
    vec![
        deal("1", "Acme Health", "Healthcare", "Series A", 12.0, "US", 88),
        deal("2", "FinTechX", "Finance", "Seed", 2.0, "EU", 75),
        deal("3", "Cloudify", "Tech", "Growth", 30.0, "US", 92),
    ]
}
