//! Derived financial quantities and the feasibility evaluation.
//!
//! Everything here is a pure function of a validated [`ContractParams`]:
//! no state, no I/O. [`assess`] is the single entry point and always
//! validates before deriving anything.

use serde::Serialize;

use crate::params::{ContractParams, InvalidParameter};

/// Quantities derived from the six inputs, recomputed on every assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derived {
    /// Tons of carbon offset by the initial investment
    pub tons_mitigated: f64,
    /// Final contract value if the high belief (theta1) turns out right
    pub value_if_theta1: f64,
    /// Final contract value if the low belief (theta0) turns out right
    pub value_if_theta0: f64,
    /// Compounding factor (1 + return)^duration
    pub return_factor: f64,
    /// Highest strike price P1 can pay and still clear the required return
    pub p1_max_strike: f64,
    /// Lowest strike price P2 can accept under the low belief
    pub p2_min_strike: f64,
}

impl Derived {
    fn from_params(params: &ContractParams) -> Self {
        let tons_mitigated = params.initial_investment / params.mitigation_cost_year0;
        let value_if_theta1 = tons_mitigated * params.scc_theta1;
        let value_if_theta0 = tons_mitigated * params.scc_theta0;
        let return_factor = (1.0 + params.return_rate).powf(params.duration_years);
        let p1_max_strike =
            (value_if_theta1 - params.initial_investment * return_factor) / return_factor;
        let p2_min_strike = value_if_theta0 / return_factor;

        Self {
            tons_mitigated,
            value_if_theta1,
            value_if_theta0,
            return_factor,
            p1_max_strike,
            p2_min_strike,
        }
    }
}

/// Terminal outcome of the feasibility evaluation.
///
/// Infeasibility is a legitimate result, not an error: both infeasible
/// states carry the numbers a report needs to explain why.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Feasibility {
    /// P1's strike ceiling is negative: they would enter only if a third
    /// party paid them the subsidy to do so. P2's side is never evaluated.
    RequiresSubsidy {
        /// Payment P1 would need from a third party to participate
        subsidy: f64,
    },
    /// P2's floor exceeds P1's ceiling, so no strike price clears.
    PriceGap {
        /// Lowest strike P2 accepts
        p2_min: f64,
        /// Highest strike P1 pays
        p1_max: f64,
        /// How far apart the two are
        gap: f64,
    },
    /// Both parties can agree on any strike in `[p2_min, p1_max]`.
    Feasible {
        /// Lowest strike P2 accepts
        p2_min: f64,
        /// Highest strike P1 pays
        p1_max: f64,
        /// Ceiling on the cost of insuring against P2 defaulting
        insurance_budget: f64,
    },
}

/// A full assessment: the inputs, everything derived from them, and the
/// terminal feasibility state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub params: ContractParams,
    pub derived: Derived,
    pub feasibility: Feasibility,
}

/// Validate `params`, derive the financial quantities, and evaluate
/// contract feasibility.
///
/// Validation always runs first, so no quantity is ever derived from
/// invalid inputs and the divisions in the derivation never see a zero
/// denominator.
pub fn assess(params: &ContractParams) -> Result<Assessment, InvalidParameter> {
    params.validate()?;
    let derived = Derived::from_params(params);
    let feasibility = evaluate(&derived);
    Ok(Assessment {
        params: params.clone(),
        derived,
        feasibility,
    })
}

/// P1 participates only if their ceiling is non-negative; given that, the
/// contract clears only if P2's floor does not exceed it.
fn evaluate(derived: &Derived) -> Feasibility {
    if derived.p1_max_strike < 0.0 {
        return Feasibility::RequiresSubsidy {
            subsidy: -derived.p1_max_strike,
        };
    }

    if derived.p2_min_strike > derived.p1_max_strike {
        Feasibility::PriceGap {
            p2_min: derived.p2_min_strike,
            p1_max: derived.p1_max_strike,
            gap: derived.p2_min_strike - derived.p1_max_strike,
        }
    } else {
        Feasibility::Feasible {
            p2_min: derived.p2_min_strike,
            p1_max: derived.p1_max_strike,
            insurance_budget: derived.p1_max_strike - derived.p2_min_strike,
        }
    }
}
