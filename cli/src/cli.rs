use std::path::PathBuf;

/// Polygon intersection area over GeoJSON inputs
#[derive(clap::Parser, Debug)]
#[command(name = "overlay-area", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Area of the intersection of two geometries
    Area(AreaArgs),

    /// Intersection area divided by union area
    Iou(PairArgs),

    /// Fraction of the second geometry covered by the first
    Coverage(PairArgs),
}

#[derive(clap::Args, Debug)]
pub struct PairArgs {
    /// First GeoJSON file (geometry, Feature or FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub a: PathBuf,

    /// Second GeoJSON file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub b: PathBuf,

    /// Print a JSON report instead of the bare number
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct AreaArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    /// Seed for the vertex index insertion order
    #[arg(long)]
    pub seed: Option<u64>,
}
