use anyhow::Result;
use overlay_area::{intersection_area_with_seed, DEFAULT_SEED};
use tracing::debug;

use super::{load_pair, Report};
use crate::cli::{AreaArgs, Cli};

pub fn run(_cli: &Cli, args: &AreaArgs) -> Result<()> {
    println!("{}", compute(args)?.render(args.pair.json)?);
    Ok(())
}

fn compute(args: &AreaArgs) -> Result<Report<'_>> {
    let (a, b) = load_pair(&args.pair.a, &args.pair.b)?;
    let seed = args.seed.unwrap_or(DEFAULT_SEED);
    debug!(seed, "computing intersection area");

    let value = intersection_area_with_seed(&a, &b, seed)?;
    Ok(Report { metric: "area", a: &args.pair.a, b: &args.pair.b, value })
}
