//! Command implementations. Each returns `Result` and leaves exit codes to
//! the caller.

use crate::colors::{bold, cyan, failure_label, gray, red, status_label, yellow};
use crate::config::{FixgenConfig, CONFIG_FILE};
use crate::error_chain::{chain_from_error, CliError};
use fixgen_core::suite::{generate_map_case, generate_map_suite, generate_sort_catalog};
use fixgen_core::verify::{verify_case, CaseKind};
use fixgen_core::writer::{EXPECTED_FILE, INPUT_FILE};
use fixgen_core::{FixtureSummary, GetUnderflow, MapRecipeKind, RemoveUnderflow, SortCategory};
use std::path::{Path, PathBuf};

/// `--seed`, then the config seed, then fresh entropy (reported so the run
/// can be repeated).
pub fn resolve_seed(flag: Option<u64>, config: &FixgenConfig) -> u64 {
    match flag.or(config.seed) {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::random();
            println!(
                "{} no seed given, using {}",
                yellow("note:"),
                cyan(&seed.to_string())
            );
            seed
        }
    }
}

fn print_summary(summary: &FixtureSummary, unit: &str) {
    println!(
        "{} {} {}",
        status_label("Generated"),
        bold(&summary.name),
        gray(&format!(
            "{} {}, {} expected, input sha256 {}",
            summary.input_len,
            unit,
            summary.expected_len,
            &summary.input_sha256[..12]
        ))
    );
}

pub struct MapArgs {
    pub output_dir: PathBuf,
    pub size: Option<usize>,
    pub seed: Option<u64>,
    pub recipe: Option<MapRecipeKind>,
    pub on_remove_underflow: Option<RemoveUnderflow>,
    pub on_get_underflow: Option<GetUnderflow>,
}

pub fn cmd_map(config: &FixgenConfig, args: MapArgs) -> Result<FixtureSummary, CliError> {
    let size = args.size.unwrap_or_else(|| config.map.default_size());
    let mut recipe = config.map.recipe(args.recipe.unwrap_or_default(), size);
    if let Some(policy) = args.on_remove_underflow {
        recipe = recipe.with_remove_underflow(policy);
    }
    if let Some(policy) = args.on_get_underflow {
        recipe = recipe.with_get_underflow(policy);
    }
    let seed = resolve_seed(args.seed, config);
    tracing::info!(dir = %args.output_dir.display(), size, seed, kind = ?recipe.kind, "generating map case");

    let summary = generate_map_case(&args.output_dir, &recipe, seed)?;
    print_summary(&summary, "operations");
    println!("{} {}", gray("input:   "), args.output_dir.join(INPUT_FILE).display());
    println!("{} {}", gray("expected:"), args.output_dir.join(EXPECTED_FILE).display());
    Ok(summary)
}

pub fn cmd_map_suite(config: &FixgenConfig, root: &Path, seed: Option<u64>) -> Result<Vec<FixtureSummary>, CliError> {
    let seed = resolve_seed(seed, config);
    let base = config.map.recipe(MapRecipeKind::Mixed, 0);
    let summaries = generate_map_suite(root, &config.map.suite(), &base, seed)?;
    for summary in &summaries {
        print_summary(summary, "operations");
    }
    Ok(summaries)
}

pub struct SortArgs {
    pub output_root: PathBuf,
    pub large_size: Option<usize>,
    pub seed: Option<u64>,
    pub categories: Vec<SortCategory>,
    pub include_large_floats: bool,
}

pub fn cmd_sort(config: &FixgenConfig, args: SortArgs) -> Result<Vec<FixtureSummary>, CliError> {
    let mut opts = config.sort.catalog_options(args.categories);
    if let Some(size) = args.large_size {
        opts.large_size = size;
    }
    opts.include_large_floats |= args.include_large_floats;
    let seed = resolve_seed(args.seed, config);

    let summaries = generate_sort_catalog(&args.output_root, &opts, seed)?;
    for summary in &summaries {
        print_summary(summary, "elements");
    }
    Ok(summaries)
}

pub fn cmd_verify(case_dirs: &[PathBuf]) -> Result<(), CliError> {
    let mut failed = 0;
    for dir in case_dirs {
        match verify_case(dir) {
            Ok(report) => {
                let kind = match report.kind {
                    CaseKind::Map => "map".to_string(),
                    CaseKind::Sort(k) => format!("sort/{}", k.as_str()),
                };
                println!(
                    "{} {} {}",
                    status_label("Verified"),
                    bold(&report.name),
                    gray(&format!("{}, {} input, {} expected", kind, report.input_len, report.expected_len))
                );
            }
            Err(e) => {
                failed += 1;
                println!("{} {}", failure_label("Failed"), bold(&dir.display().to_string()));
                eprintln!("{}", chain_from_error(&e).format_with_prefix(&red("error:")));
            }
        }
    }
    if failed > 0 {
        return Err(CliError::VerifyFailed {
            failed,
            total: case_dirs.len(),
        });
    }
    Ok(())
}

/// Write the default config template into `dir`.
pub fn cmd_init(dir: &Path) -> Result<PathBuf, CliError> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(CliError::AlreadyExists(path));
    }
    std::fs::write(&path, FixgenConfig::default_template())
        .map_err(|e| fixgen_core::FixtureError::io(&path, e))?;
    println!("{} {}", status_label("Created"), path.display());
    Ok(path)
}
