//! Deterministic ROI projection from three scalar business inputs.
//!
//! The calculator is a total function over validated inputs. Validation lives
//! in [`RoiInputs::new`]: negative or non-finite scalars are rejected up front
//! so the derived report can never contain NaN or Infinity. Zero values are
//! accepted as degenerate-but-valid businesses; see the field docs on
//! [`RoiReport`] for how the divisions that would be undefined are resolved.

use crate::error::RoiError;
use serde::{Deserialize, Serialize};

mod projection;

/// Assumed automation setup cost used for the break-even projection.
pub const ASSUMED_SETUP_COST: f64 = 5000.0;

/// Assumed working hours per month per employee.
pub const WORKING_HOURS_PER_MONTH: f64 = 160.0;

/// Validated inputs for one ROI calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInputs {
    hours_saved_per_month: f64,
    hourly_rate: f64,
    employees: u32,
}

impl RoiInputs {
    /// Validates the three scalars. Negative or non-finite values are
    /// rejected; zeros are allowed.
    pub fn new(
        hours_saved_per_month: f64,
        hourly_rate: f64,
        employees: u32,
    ) -> Result<Self, RoiError> {
        for (field, value) in [
            ("hours_saved_per_month", hours_saved_per_month),
            ("hourly_rate", hourly_rate),
        ] {
            if !value.is_finite() {
                return Err(RoiError::NonFiniteInput { field });
            }
            if value < 0.0 {
                return Err(RoiError::NegativeInput { field, value });
            }
        }
        Ok(Self {
            hours_saved_per_month,
            hourly_rate,
            employees,
        })
    }

    pub fn hours_saved_per_month(&self) -> f64 {
        self.hours_saved_per_month
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn employees(&self) -> u32 {
        self.employees
    }

    /// Derives the full report. Total over validated inputs; recomputed fresh
    /// on every call.
    pub fn calculate(&self) -> RoiReport {
        let monthly_savings = self.hours_saved_per_month * self.hourly_rate;
        let annual_savings = monthly_savings * 12.0;

        let total_monthly_hours = WORKING_HOURS_PER_MONTH * self.employees as f64;
        let productivity_boost_percentage = if total_monthly_hours == 0.0 {
            0
        } else {
            (self.hours_saved_per_month / total_monthly_hours * 100.0)
                .round()
                .clamp(0.0, 100.0) as u32
        };

        let automation_maturity_score = (self.hours_saved_per_month / 100.0 * 50.0
            + productivity_boost_percentage as f64 * 0.5)
            .round()
            .min(100.0) as u32;

        let break_even_months = if monthly_savings == 0.0 {
            None
        } else {
            Some((ASSUMED_SETUP_COST / monthly_savings).round() as u32)
        };

        RoiReport {
            hours_saved_per_month: self.hours_saved_per_month,
            monthly_savings,
            annual_savings,
            productivity_boost_percentage,
            automation_maturity_score,
            break_even_months,
        }
    }
}

/// Derived financial and productivity summary. All fields are recomputed from
/// the inputs on every calculation; nothing is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    pub hours_saved_per_month: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Share of total workforce hours reclaimed, rounded and clamped to
    /// [0, 100]. Defined as 0 when the business has no employees.
    pub productivity_boost_percentage: u32,
    /// Composite readiness score, capped at 100.
    pub automation_maturity_score: u32,
    /// Months until the assumed setup cost is recovered. `None` when there
    /// are no monthly savings: without savings there is no break-even point.
    pub break_even_months: Option<u32>,
}
