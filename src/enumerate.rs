//! The `enumerate` subcommand: list every resource-feasible plan.
//!
//! This is the diagnostic counterpart of `plan`: it re-solves the production
//! model once per candidate pair, so it is only meant for small supply
//! values. Output goes to stdout as a table and, optionally, to a CSV file.

use std::{
    fs,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use prettytable::*;

use crate::checked_supply;
use crate::workshop::feasible_targets;

/// Command-line arguments for the enumeration command.
#[derive(Parser, Debug)]
pub struct EnumerateArgs {
    /// Available clay supply, in units
    pub clay: f64,

    /// Available glaze supply, in units
    pub glaze: f64,

    /// Output CSV file
    #[clap(long)]
    pub csv: Option<PathBuf>,
}

/// Enumerate every resource-feasible production plan and print the result.
///
/// Plans appear in sweep order (small-vase count outer, large-vase count
/// inner). With `--csv`, the same sequence is also written as
/// `small,large,profit` lines.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use kiln::enumerate::{EnumerateArgs, enumerate_main};
///
/// let args = EnumerateArgs { clay: 4.0, glaze: 2.0, csv: None };
/// enumerate_main(args)?;
/// # Ok(())
/// # }
/// ```
pub fn enumerate_main(args: EnumerateArgs) -> Result<()> {
    let supply = checked_supply(args.clay, args.glaze)?;
    let targets = feasible_targets(&supply)?;

    if let Some(output) = &args.csv {
        let mut csv_file = BufWriter::new(fs::File::create(output)?);
        writeln!(csv_file, "small,large,profit")?;
        for target in &targets {
            writeln!(
                csv_file,
                "{},{},{:.0}",
                target.small,
                target.large,
                target.profit()
            )?;
        }
    }

    let mut table = Table::new();
    table.set_titles(row!["Small Vases", "Large Vases", "Profit"]);
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    for target in &targets {
        table.add_row(row![
            target.small,
            target.large,
            format!("{:.0}", target.profit())
        ]);
    }
    table.printstd();

    println!("Feasible plans: {}", targets.len());

    Ok(())
}
