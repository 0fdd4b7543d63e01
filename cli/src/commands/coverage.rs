use anyhow::Result;
use overlay_area::coverage_fraction;

use super::{load_pair, Report};
use crate::cli::{Cli, PairArgs};

pub fn run(_cli: &Cli, args: &PairArgs) -> Result<()> {
    println!("{}", compute(args)?.render(args.json)?);
    Ok(())
}

fn compute(args: &PairArgs) -> Result<Report<'_>> {
    let (a, b) = load_pair(&args.a, &args.b)?;
    let value = coverage_fraction(&a, &b)?;
    Ok(Report { metric: "coverage", a: &args.a, b: &args.b, value })
}
