//! Heuristic deal scoring shown next to a lead.
//!
//! Every component is on a 0-100 scale. The team component is not derived
//! from the deal; it is drawn at random.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::deals_model::Deal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Pass,
}

impl Recommendation {
    pub fn from_overall(overall: i64) -> Self {
        match overall {
            o if o >= 85 => Recommendation::StrongBuy,
            o if o >= 70 => Recommendation::Buy,
            o if o >= 55 => Recommendation::Hold,
            _ => Recommendation::Pass,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealScore {
    pub overall: i64,
    pub market: i64,
    pub financial: i64,
    pub team: i64,
    /// Higher is safer.
    pub risk: i64,
    pub recommendation: Recommendation,
}

fn sector_multiplier(sector: &str) -> f64 {
    match sector {
        "Healthcare" => 0.9,
        "FinTech" => 0.95,
        "AI/ML" => 1.0,
        "SaaS" => 0.85,
        "E-commerce" => 0.8,
        _ => 0.7,
    }
}

/// Scores a deal with a team score drawn uniformly from [70, 100].
pub fn score_deal<R: Rng + ?Sized>(deal: &Deal, rng: &mut R) -> DealScore {
    let team = (70.0 + rng.gen::<f64>() * 30.0).round() as i64;
    score_deal_with_team(deal, team)
}

pub fn score_deal_with_team(deal: &Deal, team: i64) -> DealScore {
    let market = (sector_multiplier(&deal.sector) * 100.0).round();
    let revenue_score = (deal.revenue / 50.0 * 100.0).min(100.0);
    let growth_score = (deal.growth_rate.unwrap_or(0.0) * 2.0).min(100.0);
    let financial = ((revenue_score + growth_score) / 2.0).round();
    let team_f = team as f64;

    let exposure = (100.0 - (financial * 0.3 + market * 0.2 + team_f * 0.2)).round();
    let overall = ((market + financial + team_f - exposure / 2.0) / 3.0).round() as i64;

    DealScore {
        overall,
        market: market as i64,
        financial: financial as i64,
        team,
        risk: 100 - exposure as i64,
        recommendation: Recommendation::from_overall(overall),
    }
}
