//! Operation sequences for the hash-map exercise.
//!
//! The generator keeps a [`ShadowKeys`] set purely to pick plausible targets
//! for gets and removes. It is local to one call and never consulted by the
//! oracle, which replays the finished sequence from scratch.

use crate::error::Result;
use crate::recipe::{GetUnderflow, MapRecipe, MapRecipeKind, OpKind, RemoveUnderflow, BULK_REMOVE_COUNT};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One map operation, serialized as `{"action": ..., "key": ..., "value": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Operation {
    Put { key: String, value: i64 },
    Get { key: String },
    Remove { key: String },
}

impl Operation {
    pub fn put(key: impl Into<String>, value: i64) -> Self {
        Operation::Put {
            key: key.into(),
            value,
        }
    }

    pub fn get(key: impl Into<String>) -> Self {
        Operation::Get { key: key.into() }
    }

    pub fn remove(key: impl Into<String>) -> Self {
        Operation::Remove { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            Operation::Put { key, .. } | Operation::Get { key } | Operation::Remove { key } => key,
        }
    }
}

// ---------------------------------------------------------------------------
// Shadow key set
// ---------------------------------------------------------------------------

/// Live keys with O(1) uniform sampling and removal.
#[derive(Debug, Default)]
pub struct ShadowKeys {
    keys: Vec<String>,
    slots: HashMap<String, usize>,
}

impl ShadowKeys {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn insert(&mut self, key: &str) {
        if !self.slots.contains_key(key) {
            self.slots.insert(key.to_string(), self.keys.len());
            self.keys.push(key.to_string());
        }
    }

    /// A uniformly chosen live key, if any.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.keys.len());
        Some(&self.keys[idx])
    }

    /// Remove and return a uniformly chosen live key, if any.
    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.keys.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.keys.len());
        let key = self.keys.swap_remove(idx);
        self.slots.remove(&key);
        if let Some(moved) = self.keys.get(idx) {
            self.slots.insert(moved.clone(), idx);
        }
        Some(key)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the operation sequence a recipe describes.
pub fn generate_operations<R: Rng + ?Sized>(recipe: &MapRecipe, rng: &mut R) -> Result<Vec<Operation>> {
    recipe.validate()?;
    let ops = match recipe.kind {
        MapRecipeKind::Mixed => mixed_operations(recipe, rng),
        MapRecipeKind::Bulk => bulk_operations(recipe.size, rng),
    };
    tracing::debug!(kind = ?recipe.kind, size = recipe.size, emitted = ops.len(), "generated map operations");
    Ok(ops)
}

fn universe_key<R: Rng + ?Sized>(recipe: &MapRecipe, rng: &mut R) -> String {
    format!("key{}", rng.gen_range(0..recipe.key_universe))
}

fn random_put<R: Rng + ?Sized>(recipe: &MapRecipe, rng: &mut R, shadow: &mut ShadowKeys) -> Operation {
    let key = universe_key(recipe, rng);
    let (lo, hi) = recipe.value_range;
    let value = rng.gen_range(lo..=hi);
    shadow.insert(&key);
    Operation::Put { key, value }
}

fn mixed_operations<R: Rng + ?Sized>(recipe: &MapRecipe, rng: &mut R) -> Vec<Operation> {
    let mut shadow = ShadowKeys::default();
    let mut ops = Vec::with_capacity(recipe.size);

    for i in 0..recipe.size {
        match recipe.mix.action_at(i, recipe.size) {
            OpKind::Put => ops.push(random_put(recipe, rng, &mut shadow)),
            OpKind::Get => match shadow.sample(rng) {
                Some(key) => ops.push(Operation::get(key)),
                None => match recipe.on_get_underflow {
                    GetUnderflow::AnyKey => ops.push(Operation::Get {
                        key: universe_key(recipe, rng),
                    }),
                    GetUnderflow::SubstitutePut => ops.push(random_put(recipe, rng, &mut shadow)),
                },
            },
            OpKind::Remove => match shadow.take(rng) {
                Some(key) => ops.push(Operation::Remove { key }),
                None => match recipe.on_remove_underflow {
                    RemoveUnderflow::SubstitutePut => ops.push(random_put(recipe, rng, &mut shadow)),
                    RemoveUnderflow::Skip => {}
                    RemoveUnderflow::AnyKey => ops.push(Operation::Remove {
                        key: universe_key(recipe, rng),
                    }),
                },
            },
        }
    }
    ops
}

fn bulk_operations<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Operation> {
    let extra = if size > 0 { 3 + BULK_REMOVE_COUNT } else { 0 };
    let mut ops = Vec::with_capacity(3 + size + extra);

    ops.push(Operation::put("apple", 5));
    ops.push(Operation::put("banana", 8));
    ops.push(Operation::put("orange", 10));

    for i in 1..=size {
        ops.push(Operation::put(format!("key{}", i), i as i64 * 100));
    }

    if size == 0 {
        return ops;
    }

    ops.push(Operation::get("key1"));
    ops.push(Operation::get(format!("key{}", size / 2)));
    ops.push(Operation::get(format!("key{}", size)));

    for _ in 0..BULK_REMOVE_COUNT {
        ops.push(Operation::remove(format!("key{}", rng.gen_range(1..=size))));
    }
    ops
}
