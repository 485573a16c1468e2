use log::debug;

use crate::constants::EQUITY_SHARE_OF_EV;
use crate::errors::{Result, ValidationError};
use crate::utils::number_utils::round2;

use super::valuation_model::{ValuationRequest, ValuationResult};

/// Exit-multiple valuation:
///
/// * `EV = round2(ebitda * exit_multiple)`
/// * `Equity = round2(EV * 0.8)`
/// * `IRR = round2(ebitda / EV * 100)`
///
/// Revenue, WACC and growth are accepted but do not enter the formulas.
/// A zero EV is rejected instead of producing a non-finite IRR.
pub fn calculate_valuation(request: &ValuationRequest) -> Result<ValuationResult> {
    let ev = round2(request.ebitda * request.exit_multiple);
    if ev == 0.0 || !ev.is_finite() {
        return Err(ValidationError::InvalidInput(
            "EBITDA and exit multiple must produce a non-zero enterprise value".to_string(),
        )
        .into());
    }
    let equity = round2(ev * EQUITY_SHARE_OF_EV);
    let irr = round2(request.ebitda / ev * 100.0);
    debug!("Valuation: EV={} Equity={} IRR={}", ev, equity, irr);
    Ok(ValuationResult { ev, equity, irr })
}
