use anyhow::Result;
use clap::Parser;
use kiln::{CLIArguments, enumerate_main, plan_main};

fn main() -> Result<()> {
    let args = CLIArguments::parse();

    match args {
        CLIArguments::Plan(args) => plan_main(args),
        CLIArguments::Enumerate(args) => enumerate_main(args),
    }
}
