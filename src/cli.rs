//! CLI argument definitions for ccm.

use clap::Parser;
use clap_complete::Shell;

use ccm::params::ContractParams;

#[derive(Parser)]
#[command(name = "ccm")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ", env!("GIT_SHA"), ", built ", env!("BUILD_DATE"), ")"
))]
#[command(about = "Carbon contract feasibility calculator", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    ccm                              Assess the documented default scenario\n    ccm --scc1 120 --return 0.05     Override individual assumptions\n    ccm --json                       Emit the assessment as JSON"
)]
pub struct Cli {
    /// Contract duration in years
    #[arg(long = "dur", value_name = "YEARS", default_value_t = 5.0)]
    pub duration_years: f64,

    /// Cost of mitigation at year 0, per ton of carbon
    #[arg(long = "costy0", value_name = "COST", default_value_t = 20.0)]
    pub mitigation_cost_year0: f64,

    /// Social cost of carbon for theta1 (high), believed by P1
    #[arg(long = "scc1", value_name = "COST", default_value_t = 171.0)]
    pub scc_theta1: f64,

    /// Social cost of carbon for theta0 (low), believed by P2
    #[arg(long = "scc0", value_name = "COST", default_value_t = 56.0)]
    pub scc_theta0: f64,

    /// Initial investment in mitigation
    #[arg(long = "initcost", value_name = "AMOUNT", default_value_t = 1000.0)]
    pub initial_investment: f64,

    /// Required yearly return on investment, e.g. 0.08 for 8 percent
    #[arg(long = "return", value_name = "RATE", default_value_t = 0.08)]
    pub return_rate: f64,

    /// Emit the assessment as pretty-printed JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the feasibility outcome
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions (bash, zsh, fish, powershell) and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Collect the six economic flags into a parameter set.
    pub fn params(&self) -> ContractParams {
        ContractParams {
            duration_years: self.duration_years,
            mitigation_cost_year0: self.mitigation_cost_year0,
            scc_theta1: self.scc_theta1,
            scc_theta0: self.scc_theta0,
            initial_investment: self.initial_investment,
            return_rate: self.return_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_yields_documented_defaults() {
        let cli = Cli::parse_from(["ccm"]);
        assert_eq!(cli.params(), ContractParams::default());
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "ccm", "--dur", "10", "--costy0", "35", "--scc1", "120", "--scc0", "40",
            "--initcost", "2500", "--return", "0.05",
        ]);
        let params = cli.params();
        assert_eq!(params.duration_years, 10.0);
        assert_eq!(params.mitigation_cost_year0, 35.0);
        assert_eq!(params.scc_theta1, 120.0);
        assert_eq!(params.scc_theta0, 40.0);
        assert_eq!(params.initial_investment, 2500.0);
        assert_eq!(params.return_rate, 0.05);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
