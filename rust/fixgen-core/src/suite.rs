//! Case drivers: recipe + seed in, fixture directory out.

use crate::error::Result;
use crate::map::generate_operations;
use crate::recipe::MapRecipe;
use crate::rng::case_rng;
use crate::sort::{catalog, CatalogOptions, SortCase};
use crate::writer::{case_name, write_map_fixture, write_sort_fixture, FixtureSummary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One named entry of a map suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteEntry {
    pub name: String,
    pub size: usize,
}

impl SuiteEntry {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        SuiteEntry {
            name: name.into(),
            size,
        }
    }
}

/// The standard map suite: growing operation counts.
pub fn default_map_suite() -> Vec<SuiteEntry> {
    vec![
        SuiteEntry::new("case3", 1_000),
        SuiteEntry::new("case4", 10_000),
        SuiteEntry::new("case5", 100_000),
    ]
}

/// Generate one map case into `case_dir`. The directory name keys the seed.
pub fn generate_map_case(case_dir: &Path, recipe: &MapRecipe, seed: u64) -> Result<FixtureSummary> {
    let name = case_name(case_dir)?;
    let mut rng = case_rng(seed, &name);
    let ops = generate_operations(recipe, &mut rng)?;
    write_map_fixture(case_dir, &ops)
}

/// Generate every suite entry under `root`, using `base` for everything but the size.
pub fn generate_map_suite(
    root: &Path,
    suite: &[SuiteEntry],
    base: &MapRecipe,
    seed: u64,
) -> Result<Vec<FixtureSummary>> {
    let mut summaries = Vec::with_capacity(suite.len());
    for entry in suite {
        tracing::info!(case = %entry.name, size = entry.size, "generating map case");
        let recipe = MapRecipe {
            size: entry.size,
            key_universe: entry.size,
            ..base.clone()
        };
        summaries.push(generate_map_case(&root.join(&entry.name), &recipe, seed)?);
    }
    Ok(summaries)
}

pub fn generate_sort_case(root: &Path, case: &SortCase, seed: u64) -> Result<FixtureSummary> {
    let mut rng = case_rng(seed, case.name);
    let elements = case.elements(&mut rng);
    write_sort_fixture(&root.join(case.name), elements, Some(case.description))
}

/// Generate every catalog case selected by `opts` under `root`.
pub fn generate_sort_catalog(root: &Path, opts: &CatalogOptions, seed: u64) -> Result<Vec<FixtureSummary>> {
    let cases = catalog(opts);
    let mut summaries = Vec::with_capacity(cases.len());
    for case in &cases {
        tracing::info!(case = case.name, category = %case.category, elements = case.len(), "generating sort case");
        summaries.push(generate_sort_case(root, case, seed)?);
    }
    Ok(summaries)
}
