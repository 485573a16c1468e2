//! Portfolio domain models.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::number_utils::round2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyStatus {
    Active,
    Exited,
}

/// One monthly KPI sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiPoint {
    /// `YYYY-MM`
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCompany {
    pub id: String,
    pub name: String,
    pub fund: String,
    pub sector: String,
    pub status: CompanyStatus,
    /// %
    pub irr: f64,
    /// Multiple on money.
    pub mom: f64,
    /// $M
    pub revenue: f64,
    /// Ascending by date.
    pub kpis: Vec<KpiPoint>,
}

/// Snapshot of the portfolio store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioState {
    pub companies: Vec<PortfolioCompany>,
    pub selected_company: Option<String>,
}

fn jitter<R: Rng + ?Sized>(value: f64, rng: &mut R) -> f64 {
    round2(value + rng.gen::<f64>() - 0.5)
}

impl PortfolioCompany {
    /// Moves every KPI value and the revenue by an independent delta in
    /// [-0.5, 0.5), rounded to cents. Dates and sample count never change;
    /// revenue does not go below zero.
    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for kpi in &mut self.kpis {
            kpi.value = jitter(kpi.value, rng);
        }
        self.revenue = jitter(self.revenue, rng).max(0.0);
    }
}

impl PortfolioState {
    pub fn selected(&self) -> Option<&PortfolioCompany> {
        let id = self.selected_company.as_deref()?;
        self.companies.iter().find(|c| c.id == id)
    }
}
