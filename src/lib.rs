//! Kiln — integer production planning for a small vase workshop
//!
//! This library decides how many small and large vases a workshop should make
//! from finite supplies of clay and glaze. It is built around a small
//! mixed-integer model solved through a backend-independent abstraction
//! layer.
//!
//! # Main Workflows
//!
//! The library supports two operations:
//!
//! 1. **Planning** ([`workshop::optimal_target`]): the single
//!    profit-maximising integer production plan
//! 2. **Enumeration** ([`workshop::feasible_targets`]): every
//!    resource-feasible integer plan, in a fixed sweep order — a diagnostic
//!    path that re-solves the model once per candidate
//!
//! # Usage Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use kiln::workshop::{ResourceSupply, optimal_target};
//!
//! let supply = ResourceSupply { clay: 100.0, glaze: 80.0 };
//! let target = optimal_target(&supply)?;
//! println!("make {} small and {} large vases", target.small, target.large);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - **[`workshop`]**: the production model, planning constants and both
//!   planning operations
//! - **[`lp_solver`]**: linear programming solver abstraction layer
//! - **[`plan`]** / **[`enumerate`]**: CLI entry points around the two
//!   operations
//!
//! # Solver Selection
//!
//! The MIP backend is chosen via the `KILN_LP_SOLVER` environment variable
//! (`gurobi` or `coin_cbc`); see [`lp_solver`] for the fallback rules.

use anyhow::Result;
use clap::Parser;
use std::{error::Error, fmt};

pub mod enumerate;
pub mod lp_solver;
pub mod plan;
pub mod workshop;

// Re-export the main functions for easy access
pub use enumerate::{EnumerateArgs, enumerate_main};
pub use plan::{PlanArgs, plan_main};
pub use workshop::{ProductionTarget, ResourceSupply, feasible_targets, optimal_target};

/// Application-level errors that can occur during planning.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    /// The profit-maximising solve did not reach an optimal status.
    NoOptimum,
    /// A negative resource supply was passed on the command line.
    NegativeSupply,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoOptimum => write!(f, "Optimal solution not found!"),
            AppError::NegativeSupply => write!(f, "Resource supplies must be non-negative."),
        }
    }
}

impl Error for AppError {}

/// Parse and validate the resource supplies shared by both subcommands.
///
/// The planning core itself does not check signs; rejecting negative supplies
/// is this boundary's job.
pub(crate) fn checked_supply(clay: f64, glaze: f64) -> Result<workshop::ResourceSupply> {
    if clay < 0.0 || glaze < 0.0 {
        return Err(AppError::NegativeSupply.into());
    }
    Ok(workshop::ResourceSupply { clay, glaze })
}

/// Command-line interface arguments for the kiln tools.
///
/// Two commands are available:
/// - `Plan`: compute the profit-maximising production plan
/// - `Enumerate`: list every resource-feasible production plan
#[derive(Debug, Parser)]
#[clap(
    name = "Kiln Tools",
    about = "Vase workshop production planning tools"
)]
pub enum CLIArguments {
    /// Compute the profit-maximising production plan.
    Plan(PlanArgs),
    /// List every resource-feasible production plan, one solver run per candidate.
    Enumerate(EnumerateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_optimum_message() {
        assert_eq!(AppError::NoOptimum.to_string(), "Optimal solution not found!");
    }

    #[test]
    fn test_checked_supply_rejects_negatives() {
        assert!(checked_supply(-1.0, 5.0).is_err());
        assert!(checked_supply(5.0, -1.0).is_err());
        assert_eq!(
            checked_supply(5.0, 3.0).unwrap(),
            workshop::ResourceSupply {
                clay: 5.0,
                glaze: 3.0
            }
        );
    }
}
