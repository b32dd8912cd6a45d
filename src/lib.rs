//! # ccm - Carbon Contract Feasibility
//!
//! Estimates whether a two-party carbon-mitigation contract is economically
//! viable. Participant 1 believes a high social cost of carbon (theta1) and
//! funds mitigation; Participant 2 believes a low one (theta0) and takes the
//! other side. The crate derives the strike-price band both can accept and
//! reports whether it is non-empty.
//!
//! ## Core Concepts
//!
//! - **Strike price (x\*)**: the amount P1 pays P2 to enter the contract
//! - **Return factor**: `(1 + return)^duration`, converting present payments
//!   to their value at expiration
//! - **Feasibility**: one of three terminal states: feasible with a strike
//!   band, infeasible because P1 needs a subsidy, or infeasible because the
//!   parties' bounds do not overlap
//!
//! ## Modules
//!
//! - [`params`] - Input parameters, defaults, and validation
//! - [`contract`] - Derived quantities and the feasibility evaluation
//! - [`formatters`] - Text rendering of an assessment
//!
//! ## Example
//!
//! ```
//! use ccm::contract::{assess, Feasibility};
//! use ccm::params::ContractParams;
//!
//! let assessment = assess(&ContractParams::default()).expect("defaults are valid");
//! match assessment.feasibility {
//!     Feasibility::Feasible { p2_min, p1_max, .. } => {
//!         println!("agree on any strike between {:.2} and {:.2}", p2_min, p1_max);
//!     }
//!     _ => println!("no contract"),
//! }
//! ```

pub mod contract;
pub mod formatters;
pub mod params;
