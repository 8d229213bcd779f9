//! Command-line surface.

use clap::{Parser as ClapParser, Subcommand};
use fixgen_core::{GetUnderflow, MapRecipeKind, RemoveUnderflow, SortCategory};
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(
    name = "fixgen",
    version,
    about = "Deterministic fixture and oracle generator for hash-map and sort exercises"
)]
pub struct Cli {
    /// Path to a fixgen.toml (default: search the current directory and its parents)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug events
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one hash-map case into OUTPUT_DIR
    Map {
        /// Case directory to create (its name also keys the seed)
        output_dir: PathBuf,

        /// Number of operations (default: 5000)
        size: Option<usize>,

        /// Run seed (default: config value, else a fresh one)
        #[arg(long)]
        seed: Option<u64>,

        /// Recipe: mixed | bulk
        #[arg(long)]
        recipe: Option<MapRecipeKind>,

        /// Remove with no live key: substitute-put | skip | any-key
        #[arg(long)]
        on_remove_underflow: Option<RemoveUnderflow>,

        /// Get with no live key: any-key | substitute-put
        #[arg(long)]
        on_get_underflow: Option<GetUnderflow>,
    },
    /// Generate the standard hash-map suite under OUTPUT_ROOT
    MapSuite {
        output_root: PathBuf,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate the sort catalog under OUTPUT_ROOT
    Sort {
        output_root: PathBuf,

        /// Element count of the large cases (default: 10000000)
        large_size: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,

        /// Only these categories: basic | edge | large | special (repeatable)
        #[arg(long = "category")]
        categories: Vec<SortCategory>,

        /// Also generate the large random-float case
        #[arg(long)]
        include_large_floats: bool,
    },
    /// Recompute the oracle of existing cases and compare with expected.txt
    Verify {
        #[arg(required = true)]
        case_dirs: Vec<PathBuf>,
    },
    /// Write a default fixgen.toml into the current directory
    Init,
}
