//! Summary metrics derived from a projection
//!
//! Every metric is `None` when it is undefined for the inputs, so callers never see
//! `NaN` or `Infinity`.

use serde::{Deserialize, Serialize};

use super::snapshots::ProjectionResult;

/// Interest as a percentage of the amount invested
///
/// `None` when nothing was invested.
pub fn total_return_pct(total_invested: f64, total_interest: f64) -> Option<f64> {
    if total_invested <= 0.0 {
        return None;
    }
    let pct = total_interest / total_invested * 100.0;
    pct.is_finite().then_some(pct)
}

/// Periods needed to double a balance at a constant periodic rate: `ln 2 / ln(1 + r)`
///
/// `None` for non-positive or non-finite rates.
pub fn doubling_time(monthly_rate: f64) -> Option<f64> {
    if !monthly_rate.is_finite() || monthly_rate <= 0.0 {
        return None;
    }
    let periods = std::f64::consts::LN_2 / monthly_rate.ln_1p();
    periods.is_finite().then_some(periods)
}

/// Annual rate equivalent to a monthly rate compounded 12 times
pub fn effective_annual_rate(monthly_rate: f64) -> Option<f64> {
    if !monthly_rate.is_finite() || monthly_rate <= -1.0 {
        return None;
    }
    let annual = (12.0 * monthly_rate.ln_1p()).exp_m1();
    annual.is_finite().then_some(annual)
}

/// Performance block shown next to a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_return_pct: Option<f64>,
    pub doubling_time_months: Option<f64>,
    pub effective_annual_rate: Option<f64>,
}

impl PerformanceMetrics {
    pub fn from_result(result: &ProjectionResult, monthly_rate: f64) -> Self {
        Self {
            total_return_pct: total_return_pct(result.total_invested, result.total_interest),
            doubling_time_months: doubling_time(monthly_rate),
            effective_annual_rate: effective_annual_rate(monthly_rate),
        }
    }
}
