use chrono::NaiveDate;

use crate::constants::KPI_HISTORY_MONTHS;
use crate::utils::time_utils::trailing_months;

use super::portfolio_model::{CompanyStatus, KpiPoint, PortfolioCompany};

fn kpi_series(months: &[String], start: f64, step: f64) -> Vec<KpiPoint> {
    months
        .iter()
        .enumerate()
        .map(|(i, date)| KpiPoint {
            date: date.clone(),
            value: start + step * i as f64,
        })
        .collect()
}

/// Sample companies with KPI history over the months ending with `today`.
pub fn seed_companies(today: NaiveDate) -> Vec<PortfolioCompany> {
    let months = trailing_months(today, KPI_HISTORY_MONTHS);
    vec![
        PortfolioCompany {
            id: "c1".to_string(),
            name: "Acme Health".to_string(),
            fund: "Fund I".to_string(),
            sector: "Healthcare".to_string(),
            status: CompanyStatus::Active,
            irr: 18.2,
            mom: 2.1,
            revenue: 12.0,
            kpis: kpi_series(&months, 10.0, 1.0),
        },
        PortfolioCompany {
            id: "c2".to_string(),
            name: "FinTechX".to_string(),
            fund: "Fund II".to_string(),
            sector: "Finance".to_string(),
            status: CompanyStatus::Exited,
            irr: 25.5,
            mom: 3.4,
            revenue: 20.0,
            kpis: kpi_series(&months, 15.0, 2.0),
        },
    ]
}
