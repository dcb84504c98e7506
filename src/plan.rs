//! The `plan` subcommand: compute and report the profit-maximising plan.

use anyhow::Result;
use clap::Parser;
use prettytable::*;

use crate::checked_supply;
use crate::workshop::optimal_target;

/// Command-line arguments for the planning command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Available clay supply, in units
    pub clay: f64,

    /// Available glaze supply, in units
    pub glaze: f64,
}

/// Compute the profit-maximising production plan and print it as a table.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use kiln::plan::{PlanArgs, plan_main};
///
/// let args = PlanArgs { clay: 100.0, glaze: 80.0 };
/// plan_main(args)?;
/// # Ok(())
/// # }
/// ```
pub fn plan_main(args: PlanArgs) -> Result<()> {
    let supply = checked_supply(args.clay, args.glaze)?;
    let target = optimal_target(&supply)?;

    let mut table = Table::new();
    table.set_titles(row!["Small Vases", "Large Vases", "Profit"]);
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.add_row(row![
        target.small,
        target.large,
        format!("{:.0}", target.profit())
    ]);
    table.printstd();

    Ok(())
}
