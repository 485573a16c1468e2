use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Valuation form contents; any field may still be blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationInput {
    pub revenue: Option<f64>,
    pub ebitda: Option<f64>,
    pub exit_multiple: Option<f64>,
    pub wacc: Option<f64>,
    pub growth_rate: Option<f64>,
}

/// A complete valuation request. All figures in $M or %.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    pub revenue: f64,
    pub ebitda: f64,
    pub exit_multiple: f64,
    pub wacc: f64,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    #[serde(rename = "EV")]
    pub ev: f64,
    #[serde(rename = "Equity")]
    pub equity: f64,
    #[serde(rename = "IRR")]
    pub irr: f64,
}

impl ValuationInput {
    /// Fails with "All fields required" unless every field is present.
    pub fn validate(&self) -> Result<ValuationRequest> {
        match (
            self.revenue,
            self.ebitda,
            self.exit_multiple,
            self.wacc,
            self.growth_rate,
        ) {
            (Some(revenue), Some(ebitda), Some(exit_multiple), Some(wacc), Some(growth_rate)) => {
                Ok(ValuationRequest {
                    revenue,
                    ebitda,
                    exit_multiple,
                    wacc,
                    growth_rate,
                })
            }
            _ => Err(ValidationError::MissingFields.into()),
        }
    }
}

impl From<ValuationRequest> for ValuationInput {
    fn from(request: ValuationRequest) -> Self {
        Self {
            revenue: Some(request.revenue),
            ebitda: Some(request.ebitda),
            exit_multiple: Some(request.exit_multiple),
            wacc: Some(request.wacc),
            growth_rate: Some(request.growth_rate),
        }
    }
}
