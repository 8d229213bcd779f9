//! Reference evaluators.
//!
//! Both oracles work only from the generated input: the map oracle replays
//! the operation sequence against an empty `BTreeMap`, the sort oracle runs
//! the standard library sort under a total order for the element type.

use crate::element::Elements;
use crate::map::Operation;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Final key/value state of a map case, keys in ascending order.
pub type OracleState = BTreeMap<String, i64>;

/// Replay `ops` left to right from an empty map.
///
/// Puts overwrite, removes of absent keys are no-ops, gets never mutate.
pub fn replay<'a, I>(ops: I) -> OracleState
where
    I: IntoIterator<Item = &'a Operation>,
{
    let mut state = OracleState::new();
    for op in ops {
        match op {
            Operation::Put { key, value } => {
                state.insert(key.clone(), *value);
            }
            Operation::Remove { key } => {
                state.remove(key);
            }
            Operation::Get { .. } => {}
        }
    }
    state
}

/// Order used for floats: IEEE-754 `totalOrder`, so `-0.0` sorts directly
/// before `0.0`.
pub fn float_order(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

/// Sort the elements in place.
pub fn sort_in_place(elements: &mut Elements) {
    match elements {
        Elements::Int(v) => v.sort_unstable(),
        Elements::Float(v) => v.sort_unstable_by(float_order),
        Elements::Str(v) => v.sort_unstable(),
    }
}

pub fn sorted(elements: &Elements) -> Elements {
    let mut out = elements.clone();
    sort_in_place(&mut out);
    out
}

/// True when no adjacent pair is out of order.
pub fn is_non_decreasing(elements: &Elements) -> bool {
    match elements {
        Elements::Int(v) => v.windows(2).all(|w| w[0] <= w[1]),
        Elements::Float(v) => v.windows(2).all(|w| float_order(&w[0], &w[1]) != Ordering::Greater),
        Elements::Str(v) => v.windows(2).all(|w| w[0] <= w[1]),
    }
}

/// True when `a` and `b` hold the same multiset of elements of the same type.
/// Floats are compared by bit pattern.
pub fn is_permutation(a: &Elements, b: &Elements) -> bool {
    if a.kind() != b.kind() || a.len() != b.len() {
        return false;
    }
    match (sorted(a), sorted(b)) {
        (Elements::Float(x), Elements::Float(y)) => x
            .iter()
            .zip(&y)
            .all(|(p, q)| p.to_bits() == q.to_bits()),
        (x, y) => x == y,
    }
}
