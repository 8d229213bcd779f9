//! Case recipes: the parameters that fully determine one generated fixture.

use crate::error::{FixtureError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Map recipes
// ---------------------------------------------------------------------------

/// Which action an index of a mixed sequence issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Put,
    Get,
    Remove,
}

/// Percentages of put / get / remove, laid out as consecutive index ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpMix {
    pub put: u32,
    pub get: u32,
    pub remove: u32,
}

impl Default for OpMix {
    fn default() -> Self {
        OpMix {
            put: 60,
            get: 30,
            remove: 10,
        }
    }
}

impl OpMix {
    pub fn validate(&self) -> Result<()> {
        let total = u64::from(self.put) + u64::from(self.get) + u64::from(self.remove);
        if total != 100 {
            return Err(FixtureError::Recipe(format!(
                "operation mix must sum to 100, got {}/{}/{} (= {})",
                self.put, self.get, self.remove, total
            )));
        }
        Ok(())
    }

    /// Action for index `index` of a sequence of length `size`.
    ///
    /// The first `put`% of indices are puts, the next `get`% gets, the rest
    /// removes. Integer arithmetic keeps the boundaries exact.
    pub fn action_at(&self, index: usize, size: usize) -> OpKind {
        let scaled = index as u128 * 100;
        let n = size as u128;
        if scaled < n * self.put as u128 {
            OpKind::Put
        } else if scaled < n * (u128::from(self.put) + u128::from(self.get)) {
            OpKind::Get
        } else {
            OpKind::Remove
        }
    }
}

/// What to emit when a remove is due but no key is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoveUnderflow {
    /// Emit a put of a random key and value instead.
    #[default]
    SubstitutePut,
    /// Emit nothing for this index.
    Skip,
    /// Emit a remove of a random universe key (a no-op for the oracle).
    AnyKey,
}

/// What to emit when a get is due but no key is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GetUnderflow {
    /// Emit a get of a random universe key.
    #[default]
    AnyKey,
    /// Emit a put of a random key and value instead.
    SubstitutePut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapRecipeKind {
    /// Positional put/get/remove partition over random keys.
    #[default]
    Mixed,
    /// Three fixed puts, `size` sequential puts, probe gets, ten removes.
    Bulk,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapRecipe {
    pub kind: MapRecipeKind,
    pub size: usize,
    /// Number of distinct keys `key0..key{n-1}` a mixed recipe draws from.
    pub key_universe: usize,
    /// Inclusive value bounds for random puts.
    pub value_range: (i64, i64),
    pub mix: OpMix,
    pub on_remove_underflow: RemoveUnderflow,
    pub on_get_underflow: GetUnderflow,
}

/// Number of removes a bulk recipe appends.
pub const BULK_REMOVE_COUNT: usize = 10;

/// Default operation count when a size is not given.
pub const DEFAULT_MAP_SIZE: usize = 5000;

impl MapRecipe {
    pub fn mixed(size: usize) -> Self {
        MapRecipe {
            kind: MapRecipeKind::Mixed,
            size,
            key_universe: size,
            value_range: (1, 100),
            mix: OpMix::default(),
            on_remove_underflow: RemoveUnderflow::default(),
            on_get_underflow: GetUnderflow::default(),
        }
    }

    pub fn bulk(size: usize) -> Self {
        MapRecipe {
            kind: MapRecipeKind::Bulk,
            ..MapRecipe::mixed(size)
        }
    }

    pub fn with_mix(mut self, mix: OpMix) -> Self {
        self.mix = mix;
        self
    }

    pub fn with_value_range(mut self, lo: i64, hi: i64) -> Self {
        self.value_range = (lo, hi);
        self
    }

    pub fn with_key_universe(mut self, keys: usize) -> Self {
        self.key_universe = keys;
        self
    }

    pub fn with_remove_underflow(mut self, policy: RemoveUnderflow) -> Self {
        self.on_remove_underflow = policy;
        self
    }

    pub fn with_get_underflow(mut self, policy: GetUnderflow) -> Self {
        self.on_get_underflow = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.mix.validate()?;
        let (lo, hi) = self.value_range;
        if lo > hi {
            return Err(FixtureError::Recipe(format!(
                "empty value range [{}, {}]",
                lo, hi
            )));
        }
        if self.kind == MapRecipeKind::Mixed && self.size > 0 && self.key_universe == 0 {
            return Err(FixtureError::Recipe(
                "key universe is empty but the recipe has operations".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sort recipes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCategory {
    Basic,
    Edge,
    Large,
    Special,
}

impl SortCategory {
    pub const ALL: [SortCategory; 4] = [
        SortCategory::Basic,
        SortCategory::Edge,
        SortCategory::Large,
        SortCategory::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCategory::Basic => "basic",
            SortCategory::Edge => "edge",
            SortCategory::Large => "large",
            SortCategory::Special => "special",
        }
    }
}

impl fmt::Display for SortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SortCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown sort category '{}' (basic, edge, large, special)", s))
    }
}

/// Default element count for the large sort cases.
pub const DEFAULT_LARGE_SIZE: usize = 10_000_000;

macro_rules! kebab_from_str {
    ($ty:ty { $($name:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($name => Ok($variant),)+
                    other => Err(format!(
                        "unknown value '{}' (expected one of: {})",
                        other,
                        [$($name),+].join(", ")
                    )),
                }
            }
        }
    };
}

kebab_from_str!(RemoveUnderflow {
    "substitute-put" => RemoveUnderflow::SubstitutePut,
    "skip" => RemoveUnderflow::Skip,
    "any-key" => RemoveUnderflow::AnyKey,
});

kebab_from_str!(GetUnderflow {
    "any-key" => GetUnderflow::AnyKey,
    "substitute-put" => GetUnderflow::SubstitutePut,
});

kebab_from_str!(MapRecipeKind {
    "mixed" => MapRecipeKind::Mixed,
    "bulk" => MapRecipeKind::Bulk,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mix_is_prefix_partition() {
        let mix = OpMix::default();
        let kinds: Vec<OpKind> = (0..10).map(|i| mix.action_at(i, 10)).collect();
        assert_eq!(&kinds[..6], &[OpKind::Put; 6]);
        assert_eq!(&kinds[6..9], &[OpKind::Get; 3]);
        assert_eq!(kinds[9], OpKind::Remove);
    }

    #[test]
    fn partition_matches_fractional_boundaries() {
        // 7 ops: put while i < 4.2, get while i < 6.3
        let mix = OpMix::default();
        let kinds: Vec<OpKind> = (0..7).map(|i| mix.action_at(i, 7)).collect();
        assert_eq!(
            kinds,
            vec![
                OpKind::Put,
                OpKind::Put,
                OpKind::Put,
                OpKind::Put,
                OpKind::Put,
                OpKind::Get,
                OpKind::Get,
            ]
        );
    }

    #[test]
    fn mix_must_sum_to_hundred() {
        let bad = OpMix {
            put: 50,
            get: 30,
            remove: 10,
        };
        assert!(bad.validate().is_err());
        assert!(OpMix::default().validate().is_ok());
    }

    #[test]
    fn oversized_mix_component_is_a_recipe_error() {
        let wraps = OpMix {
            put: u32::MAX,
            get: 1,
            remove: 100,
        };
        assert!(matches!(wraps.validate(), Err(FixtureError::Recipe(_))));
        let huge = OpMix {
            put: u32::MAX,
            get: u32::MAX,
            remove: u32::MAX,
        };
        assert!(matches!(huge.validate(), Err(FixtureError::Recipe(_))));
    }

    #[test]
    fn empty_value_range_rejected() {
        let recipe = MapRecipe::mixed(10).with_value_range(5, 1);
        assert!(matches!(recipe.validate(), Err(FixtureError::Recipe(_))));
    }

    #[test]
    fn empty_universe_only_rejected_with_operations() {
        assert!(MapRecipe::mixed(0).validate().is_ok());
        let recipe = MapRecipe::mixed(3).with_key_universe(0);
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn policies_parse_from_kebab_case() {
        assert_eq!(
            "substitute-put".parse::<RemoveUnderflow>(),
            Ok(RemoveUnderflow::SubstitutePut)
        );
        assert_eq!("any-key".parse::<GetUnderflow>(), Ok(GetUnderflow::AnyKey));
        assert_eq!("bulk".parse::<MapRecipeKind>(), Ok(MapRecipeKind::Bulk));
        assert!("sometimes".parse::<RemoveUnderflow>().is_err());
    }

    #[test]
    fn sort_category_round_trips_through_str() {
        for cat in SortCategory::ALL {
            assert_eq!(cat.to_string().parse::<SortCategory>(), Ok(cat));
        }
        assert!("huge".parse::<SortCategory>().is_err());
    }
}
