use anyhow::Result;
use overlay_area::intersection_over_union;

use super::{load_pair, Report};
use crate::cli::{Cli, PairArgs};

pub fn run(_cli: &Cli, args: &PairArgs) -> Result<()> {
    println!("{}", compute(args)?.render(args.json)?);
    Ok(())
}

fn compute(args: &PairArgs) -> Result<Report<'_>> {
    let (a, b) = load_pair(&args.a, &args.b)?;
    let value = intersection_over_union(&a, &b)?;
    Ok(Report { metric: "iou", a: &args.a, b: &args.b, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::square_file;

    #[test]
    fn overlapping_squares() {
        // intersection 1, union 4 + 4 - 1
        let (a, b) = (square_file(0.0, 0.0, 2.0), square_file(1.0, 1.0, 2.0));
        let args = PairArgs { a: a.path().into(), b: b.path().into(), json: true };
        let report = compute(&args).unwrap();
        assert!((report.value - 1.0 / 7.0).abs() < 1e-12);
    }
}
