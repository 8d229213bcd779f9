//! Configuration file parsing for `fixgen.toml`.
//!
//! Uses the path given with `--config`, otherwise searches the current
//! directory then its ancestors. Every field is optional; command-line flags
//! take precedence over anything set here.

use crate::error_chain::CliError;
use fixgen_core::recipe::{DEFAULT_LARGE_SIZE, DEFAULT_MAP_SIZE};
use fixgen_core::sort::CatalogOptions;
use fixgen_core::suite::{default_map_suite, SuiteEntry};
use fixgen_core::{GetUnderflow, MapRecipe, MapRecipeKind, OpMix, RemoveUnderflow, SortCategory};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "fixgen.toml";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct FixgenConfig {
    /// Run seed used when `--seed` is not given.
    pub seed: Option<u64>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub map: MapSection,
    #[serde(default)]
    pub sort: SortSection,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct MapSection {
    pub default_size: Option<usize>,
    pub suite: Option<Vec<SuiteEntry>>,
    pub put_percent: Option<u32>,
    pub get_percent: Option<u32>,
    pub remove_percent: Option<u32>,
    pub value_min: Option<i64>,
    pub value_max: Option<i64>,
    pub on_remove_underflow: Option<RemoveUnderflow>,
    pub on_get_underflow: Option<GetUnderflow>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct SortSection {
    pub large_size: Option<usize>,
    pub include_large_floats: Option<bool>,
}

impl FixgenConfig {
    /// Load from an explicit path, or search upwards from the current
    /// directory. Returns `Default` when nothing is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::find() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn find() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Parse a TOML string directly.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Generate a default `fixgen.toml` template.
    pub fn default_template() -> &'static str {
        r#"# fixgen configuration
# Command-line flags override these values.

# Run seed. Leave unset to draw a fresh one per run (it is printed).
# seed = 42
log_level = "info"

[map]
default_size = 5000
put_percent = 60
get_percent = 30
remove_percent = 10
value_min = 1
value_max = 100
on_remove_underflow = "substitute-put"   # substitute-put | skip | any-key
on_get_underflow = "any-key"             # any-key | substitute-put
suite = [
  { name = "case3", size = 1000 },
  { name = "case4", size = 10000 },
  { name = "case5", size = 100000 },
]

[sort]
large_size = 10000000
include_large_floats = false
"#
    }
}

impl MapSection {
    pub fn default_size(&self) -> usize {
        self.default_size.unwrap_or(DEFAULT_MAP_SIZE)
    }

    pub fn suite(&self) -> Vec<SuiteEntry> {
        self.suite.clone().unwrap_or_else(default_map_suite)
    }

    /// Build a recipe of `kind` and `size` with this section's overrides.
    pub fn recipe(&self, kind: MapRecipeKind, size: usize) -> MapRecipe {
        let base = match kind {
            MapRecipeKind::Mixed => MapRecipe::mixed(size),
            MapRecipeKind::Bulk => MapRecipe::bulk(size),
        };
        let mix = OpMix {
            put: self.put_percent.unwrap_or(base.mix.put),
            get: self.get_percent.unwrap_or(base.mix.get),
            remove: self.remove_percent.unwrap_or(base.mix.remove),
        };
        let (lo, hi) = base.value_range;
        base.with_mix(mix)
            .with_value_range(self.value_min.unwrap_or(lo), self.value_max.unwrap_or(hi))
            .with_remove_underflow(self.on_remove_underflow.unwrap_or_default())
            .with_get_underflow(self.on_get_underflow.unwrap_or_default())
    }
}

impl SortSection {
    pub fn catalog_options(&self, categories: Vec<SortCategory>) -> CatalogOptions {
        CatalogOptions {
            large_size: self.large_size.unwrap_or(DEFAULT_LARGE_SIZE),
            include_large_floats: self.include_large_floats.unwrap_or(false),
            categories,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_default() {
        let cfg = FixgenConfig::from_str("").expect("empty toml is valid");
        assert_eq!(cfg, FixgenConfig::default());
        assert_eq!(cfg.map.default_size(), DEFAULT_MAP_SIZE);
        assert_eq!(cfg.map.suite(), default_map_suite());
    }

    #[test]
    fn default_template_round_trips() {
        let cfg = FixgenConfig::from_str(FixgenConfig::default_template())
            .expect("default template must be valid toml");
        assert_eq!(cfg.map.suite(), default_map_suite());
        assert_eq!(cfg.map.recipe(MapRecipeKind::Mixed, 10), MapRecipe::mixed(10));
        assert_eq!(cfg.sort.large_size, Some(DEFAULT_LARGE_SIZE));
    }

    #[test]
    fn parse_policies_and_mix() {
        let cfg = FixgenConfig::from_str(
            r#"
seed = 7
[map]
put_percent = 50
get_percent = 25
remove_percent = 25
value_min = -10
value_max = 10
on_remove_underflow = "skip"
on_get_underflow = "substitute-put"
"#,
        )
        .expect("should parse");
        assert_eq!(cfg.seed, Some(7));
        let recipe = cfg.map.recipe(MapRecipeKind::Bulk, 3);
        assert_eq!(recipe.kind, MapRecipeKind::Bulk);
        assert_eq!(recipe.mix, OpMix { put: 50, get: 25, remove: 25 });
        assert_eq!(recipe.value_range, (-10, 10));
        assert_eq!(recipe.on_remove_underflow, RemoveUnderflow::Skip);
        assert_eq!(recipe.on_get_underflow, GetUnderflow::SubstitutePut);
    }

    #[test]
    fn parse_custom_suite() {
        let cfg = FixgenConfig::from_str(
            r#"
[map]
suite = [{ name = "tiny", size = 10 }]
"#,
        )
        .expect("should parse");
        assert_eq!(cfg.map.suite(), vec![SuiteEntry::new("tiny", 10)]);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        let result = FixgenConfig::from_str("[map]\non_remove_underflow = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn sort_section_defaults() {
        let opts = SortSection::default().catalog_options(vec![SortCategory::Edge]);
        assert_eq!(opts.large_size, DEFAULT_LARGE_SIZE);
        assert!(!opts.include_large_floats);
        assert_eq!(opts.categories, vec![SortCategory::Edge]);
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let path = std::env::temp_dir().join(format!("fixgen-missing-{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(
            FixgenConfig::load(Some(&path)),
            Err(CliError::ConfigRead { .. })
        ));
    }

    #[test]
    fn load_from_invalid_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("fixgen-invalid-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[broken").unwrap();
        assert!(matches!(
            FixgenConfig::load_from(&path),
            Err(CliError::ConfigParse { .. })
        ));
        std::fs::remove_file(&path).ok();
    }
}
