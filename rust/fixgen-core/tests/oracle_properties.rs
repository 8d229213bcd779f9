//! Property tests for the map and sort oracles.

use fixgen_core::map::{generate_operations, Operation};
use fixgen_core::oracle::{is_non_decreasing, is_permutation, replay, sorted};
use fixgen_core::rng::case_rng;
use fixgen_core::{Elements, MapRecipe};
use proptest::prelude::*;
use std::collections::HashMap;

fn op_strategy() -> impl Strategy<Value = Operation> {
    let key = (0u8..8).prop_map(|k| format!("k{}", k));
    prop_oneof![
        (key.clone(), -50i64..50).prop_map(|(k, v)| Operation::put(k, v)),
        key.clone().prop_map(|key| Operation::Get { key }),
        key.prop_map(|key| Operation::Remove { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn replay_matches_hashmap(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut reference: HashMap<String, i64> = HashMap::new();
        for op in &ops {
            match op {
                Operation::Put { key, value } => { reference.insert(key.clone(), *value); }
                Operation::Remove { key } => { reference.remove(key); }
                Operation::Get { .. } => {}
            }
        }
        let state = replay(&ops);
        prop_assert_eq!(state.len(), reference.len());
        for (k, v) in &reference {
            prop_assert_eq!(state.get(k), Some(v));
        }
    }

    #[test]
    fn generated_sequences_replay_consistently(seed in any::<u64>(), size in 0usize..300) {
        let mut rng = case_rng(seed, "prop");
        let ops = generate_operations(&MapRecipe::mixed(size), &mut rng).unwrap();
        prop_assert_eq!(ops.len(), size);
        let state = replay(&ops);
        for (k, v) in &state {
            // Every surviving key was put with that value at its last put.
            let last_put = ops.iter().rev().find_map(|op| match op {
                Operation::Put { key, value } if key == k => Some(*value),
                _ => None,
            });
            prop_assert_eq!(last_put, Some(*v));
        }
    }

    #[test]
    fn sorted_ints_are_ordered_permutations(v in prop::collection::vec(any::<i64>(), 0..300)) {
        let input = Elements::Int(v);
        let out = sorted(&input);
        prop_assert!(is_non_decreasing(&out));
        prop_assert!(is_permutation(&input, &out));
    }

    #[test]
    fn sorted_floats_are_ordered_permutations(v in prop::collection::vec(prop::num::f64::ANY, 0..300)) {
        let input = Elements::Float(v);
        let out = sorted(&input);
        prop_assert!(is_non_decreasing(&out));
        prop_assert!(is_permutation(&input, &out));
    }

    #[test]
    fn sorted_strings_are_ordered_permutations(v in prop::collection::vec("[a-z]{0,12}", 0..200)) {
        let input = Elements::Str(v);
        let out = sorted(&input);
        prop_assert!(is_non_decreasing(&out));
        prop_assert!(is_permutation(&input, &out));
    }
}
