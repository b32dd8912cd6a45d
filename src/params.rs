//! Contract input parameters and their validation.

use serde::Serialize;
use std::fmt;

/// The six economic assumptions behind a contract assessment.
///
/// All values are plain doubles; [`ContractParams::validate`] enforces the
/// range documented on each field before anything is derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractParams {
    /// Contract duration in years (> 0)
    pub duration_years: f64,
    /// Cost of mitigation in year 0, per ton of carbon (> 0)
    pub mitigation_cost_year0: f64,
    /// Social cost of carbon under the high belief, theta1, held by P1 (> 0)
    pub scc_theta1: f64,
    /// Social cost of carbon under the low belief, theta0, held by P2 (> 0)
    pub scc_theta0: f64,
    /// Initial investment in mitigation (> 0)
    pub initial_investment: f64,
    /// Required yearly return on investment, as a fraction in [0, 1]
    pub return_rate: f64,
}

impl Default for ContractParams {
    fn default() -> Self {
        Self {
            duration_years: 5.0,
            mitigation_cost_year0: 20.0,
            scc_theta1: 171.0,
            scc_theta0: 56.0,
            initial_investment: 1000.0,
            return_rate: 0.08,
        }
    }
}

impl ContractParams {
    /// Check every input against its documented range.
    ///
    /// Checks are phrased so NaN never passes, and non-finite values are
    /// rejected outright: every quantity later derived from a validated
    /// parameter set is finite, and no denominator can be zero.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !self.duration_years.is_finite() || self.duration_years <= 0.0 {
            return Err(InvalidParameter::Duration(self.duration_years));
        }
        if !self.mitigation_cost_year0.is_finite() || self.mitigation_cost_year0 <= 0.0 {
            return Err(InvalidParameter::MitigationCost(self.mitigation_cost_year0));
        }
        if !self.scc_theta1.is_finite() || self.scc_theta1 <= 0.0 {
            return Err(InvalidParameter::SccTheta1(self.scc_theta1));
        }
        if !self.scc_theta0.is_finite() || self.scc_theta0 <= 0.0 {
            return Err(InvalidParameter::SccTheta0(self.scc_theta0));
        }
        if !self.initial_investment.is_finite() || self.initial_investment <= 0.0 {
            return Err(InvalidParameter::InitialInvestment(self.initial_investment));
        }
        if !(0.0..=1.0).contains(&self.return_rate) {
            return Err(InvalidParameter::ReturnRate(self.return_rate));
        }
        Ok(())
    }
}

/// A single violated input constraint, carrying the offending value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidParameter {
    /// Contract duration must be a positive number of years
    Duration(f64),
    /// Year-0 mitigation cost must be positive
    MitigationCost(f64),
    /// High-belief social cost of carbon must be positive
    SccTheta1(f64),
    /// Low-belief social cost of carbon must be positive
    SccTheta0(f64),
    /// Initial investment must be positive
    InitialInvestment(f64),
    /// Required return must lie in [0, 1]
    ReturnRate(f64),
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration(v) => {
                write!(f, "contract duration must be greater than 0 years, got {}", v)
            }
            Self::MitigationCost(v) => {
                write!(f, "mitigation cost at year 0 must be greater than 0, got {}", v)
            }
            Self::SccTheta1(v) => {
                write!(f, "social cost of carbon (theta1) must be greater than 0, got {}", v)
            }
            Self::SccTheta0(v) => {
                write!(f, "social cost of carbon (theta0) must be greater than 0, got {}", v)
            }
            Self::InitialInvestment(v) => {
                write!(f, "initial investment must be greater than 0, got {}", v)
            }
            Self::ReturnRate(v) => {
                write!(f, "required yearly return must be between 0 and 1, got {}", v)
            }
        }
    }
}

impl std::error::Error for InvalidParameter {}
