//! Report rendering for contract assessments.
//!
//! Pure formatting only; all decision logic lives in [`crate::contract`].
//! Currency is shown with two decimals, the return rate as an integer
//! percentage.

use colored::Colorize;

use crate::contract::{Assessment, Derived, Feasibility};
use crate::params::ContractParams;

/// Format a full assessment as multi-section text.
///
/// With `quiet` set, only the outcome block is rendered.
pub fn format_report(assessment: &Assessment, quiet: bool) -> String {
    let mut output = Vec::new();

    if !quiet {
        output.push("Contract Assessment".bold().to_string());
        output.push("===================".to_string());
        output.push(String::new());
        output.push("Assumptions".bold().to_string());
        output.push("───────────".to_string());
        output.push(format_assumptions(&assessment.params, &assessment.derived));
        output.push(String::new());
        output.push("Valuation at expiration".bold().to_string());
        output.push("───────────────────────".to_string());
        output.push(format_valuations(&assessment.params, &assessment.derived));
        output.push(String::new());
        output.push("Outcome".bold().to_string());
        output.push("───────".to_string());
    }
    output.push(format_outcome(&assessment.feasibility));

    output.join("\n")
}

/// Format the input assumptions with aligned labels.
fn format_assumptions(params: &ContractParams, derived: &Derived) -> String {
    format!(
        "  {:<26} {}\n  {:<26} {}/ton\n  {:<26} {} years\n  {:<26} {}\n  {:<26} {:.1} tons",
        "Yearly return expected:",
        percent(params.return_rate),
        "Mitigation cost (year 0):",
        currency(params.mitigation_cost_year0),
        "Contract duration:",
        years(params.duration_years),
        "Initial investment:",
        currency(params.initial_investment),
        "Carbon offset purchased:",
        derived.tons_mitigated,
    )
}

/// Format the final contract value under each belief.
fn format_valuations(params: &ContractParams, derived: &Derived) -> String {
    format!(
        "  If P1 is right (theta=1): SCC {}/ton, contract worth {}\n  \
         If P2 is right (theta=0): SCC {}/ton, contract worth {}",
        currency(params.scc_theta1),
        currency(derived.value_if_theta1),
        currency(params.scc_theta0),
        currency(derived.value_if_theta0),
    )
}

/// Format the terminal feasibility state.
fn format_outcome(feasibility: &Feasibility) -> String {
    match feasibility {
        Feasibility::RequiresSubsidy { subsidy } => {
            format!(
                "  {}\n  P1 would enter this contract only if a third party paid them {} to do so.",
                "Contract not possible.".red().bold(),
                currency(*subsidy),
            )
        }
        Feasibility::PriceGap { p2_min, p1_max, gap } => {
            format!(
                "  {}\n  P2 must be paid at least {} to enter, but P1 will pay at most {}.\n  \
                 Shortfall: {}",
                "Contract not possible.".red().bold(),
                currency(*p2_min),
                currency(*p1_max),
                currency(*gap),
            )
        }
        Feasibility::Feasible {
            p2_min,
            p1_max,
            insurance_budget,
        } => {
            format!(
                "  {}\n  Ignoring insurance, P1 accepts a strike price of at most {}.\n  \
                 P2 accepts a strike price of at least {}.\n  \
                 Agreeable range: {} to {}\n  \
                 Insurance against P2 defaulting must cost less than {}.",
                "Contract feasible.".green().bold(),
                currency(*p1_max),
                currency(*p2_min),
                currency(*p2_min),
                currency(*p1_max),
                currency(*insurance_budget),
            )
        }
    }
}

/// Two-decimal currency display.
fn currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Integer-percent display of a fractional rate.
fn percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

/// Year count display: whole years without a decimal, fractional with one.
fn years(duration: f64) -> String {
    if duration.fract() == 0.0 {
        format!("{:.0}", duration)
    } else {
        format!("{:.1}", duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::assess;

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(currency(1000.0), "$1000.00");
        assert_eq!(currency(1905.634), "$1905.63");
        assert_eq!(currency(0.005), "$0.01");
    }

    #[test]
    fn test_percent_integer_display() {
        assert_eq!(percent(0.08), "8%");
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(1.0), "100%");
    }

    #[test]
    fn test_years_display() {
        assert_eq!(years(5.0), "5");
        assert_eq!(years(2.5), "2.5");
    }

    #[test]
    fn test_feasible_report_mentions_range_and_insurance() {
        let assessment = assess(&ContractParams::default()).unwrap();
        let report = format_report(&assessment, false);

        assert!(report.contains("Contract Assessment"));
        assert!(report.contains("Contract feasible."));
        assert!(report.contains("Agreeable range:"));
        assert!(report.contains("Insurance against P2 defaulting"));
        assert!(report.contains("8%"));
        assert!(report.contains("50.0 tons"));
    }

    #[test]
    fn test_subsidy_report_names_third_party_payment() {
        let params = ContractParams {
            scc_theta1: 20.0,
            scc_theta0: 10.0,
            ..Default::default()
        };
        let assessment = assess(&params).unwrap();
        let report = format_report(&assessment, false);

        assert!(report.contains("Contract not possible."));
        assert!(report.contains("third party"));
        assert!(!report.contains("Agreeable range:"));
    }

    #[test]
    fn test_gap_report_shows_both_bounds() {
        let params = ContractParams {
            scc_theta1: 60.0,
            scc_theta0: 56.0,
            ..Default::default()
        };
        let assessment = assess(&params).unwrap();
        let report = format_report(&assessment, false);

        assert!(report.contains("Contract not possible."));
        assert!(report.contains("at least"));
        assert!(report.contains("at most"));
        assert!(report.contains("Shortfall:"));
    }

    #[test]
    fn test_quiet_report_is_outcome_only() {
        let assessment = assess(&ContractParams::default()).unwrap();
        let report = format_report(&assessment, true);

        assert!(report.contains("Contract feasible."));
        assert!(!report.contains("Contract Assessment"));
        assert!(!report.contains("Assumptions"));
    }
}
