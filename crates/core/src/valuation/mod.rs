//! Valuation module - the toy exit-multiple valuation behind
//! `POST /api/valuation`.

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::calculate_valuation;
pub use valuation_model::{ValuationInput, ValuationRequest, ValuationResult};
