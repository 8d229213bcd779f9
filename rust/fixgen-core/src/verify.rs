//! Re-derive the oracle of an existing case directory and compare it with
//! the stored expected artifact.

use crate::element::{ElementKind, Elements};
use crate::error::{FixtureError, Result};
use crate::map::Operation;
use crate::oracle::{self, OracleState};
use crate::writer::{case_name, EXPECTED_FILE, INPUT_FILE};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseKind {
    Map,
    Sort(ElementKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub name: String,
    pub kind: CaseKind,
    pub input_len: usize,
    pub expected_len: usize,
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| FixtureError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check one case directory. Fails with [`FixtureError::Mismatch`] when the
/// stored expected artifact is not the oracle of the stored input.
pub fn verify_case(case_dir: &Path) -> Result<VerifyReport> {
    let name = case_name(case_dir)?;
    let input_path = case_dir.join(INPUT_FILE);
    let expected_path = case_dir.join(EXPECTED_FILE);
    let input = read_json(&input_path)?;
    let expected = read_json(&expected_path)?;

    let Value::Array(items) = input else {
        return Err(FixtureError::Parse {
            path: input_path,
            message: "expected a top-level list".to_string(),
        });
    };

    let is_map = match items.first() {
        Some(first) => first.is_object(),
        None => expected.is_object(),
    };

    let report = if is_map {
        verify_map(&name, items, expected, &expected_path)?
    } else {
        verify_sort(&name, &items, &expected, &input_path, &expected_path)?
    };
    tracing::info!(case = %report.name, kind = ?report.kind, "verified fixture");
    Ok(report)
}

fn verify_map(name: &str, items: Vec<Value>, expected: Value, expected_path: &Path) -> Result<VerifyReport> {
    let ops: Vec<Operation> = serde_json::from_value(Value::Array(items))?;
    let stored: OracleState = serde_json::from_value(expected).map_err(|e| FixtureError::Parse {
        path: expected_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let replayed = oracle::replay(&ops);

    if let Some(detail) = first_state_difference(&replayed, &stored) {
        return Err(FixtureError::Mismatch {
            case: name.to_string(),
            detail,
        });
    }
    Ok(VerifyReport {
        name: name.to_string(),
        kind: CaseKind::Map,
        input_len: ops.len(),
        expected_len: stored.len(),
    })
}

fn first_state_difference(replayed: &OracleState, stored: &OracleState) -> Option<String> {
    for (key, value) in replayed {
        match stored.get(key) {
            None => return Some(format!("key '{}' missing from expected state", key)),
            Some(v) if v != value => {
                return Some(format!("key '{}': expected {}, replay gives {}", key, v, value))
            }
            Some(_) => {}
        }
    }
    stored
        .keys()
        .find(|key| !replayed.contains_key(*key))
        .map(|key| format!("key '{}' should not be present after replay", key))
}

fn verify_sort(
    name: &str,
    items: &[Value],
    expected: &Value,
    input_path: &Path,
    expected_path: &Path,
) -> Result<VerifyReport> {
    let input = elements_from_json(items, input_path)?;
    let Value::Array(expected_items) = expected else {
        return Err(FixtureError::Parse {
            path: expected_path.to_path_buf(),
            message: "expected a top-level list".to_string(),
        });
    };
    let stored = elements_from_json(expected_items, expected_path)?;

    let mismatch = |detail: &str| FixtureError::Mismatch {
        case: name.to_string(),
        detail: detail.to_string(),
    };
    if !input.is_empty() && !stored.is_empty() && input.kind() != stored.kind() {
        return Err(mismatch("input and expected hold different element types"));
    }
    if !oracle::is_non_decreasing(&stored) {
        return Err(mismatch("expected list is not in ascending order"));
    }
    if !input.is_empty() && !oracle::is_permutation(&input, &stored) {
        return Err(mismatch("expected list is not a permutation of the input"));
    }
    if input.is_empty() && !stored.is_empty() {
        return Err(mismatch("input is empty but expected list is not"));
    }

    Ok(VerifyReport {
        name: name.to_string(),
        kind: CaseKind::Sort(input.kind()),
        input_len: input.len(),
        expected_len: stored.len(),
    })
}

/// Infer the element type of a parsed list: all strings, all integers, or floats.
pub fn elements_from_json(items: &[Value], path: &Path) -> Result<Elements> {
    let parse_err = |message: String| FixtureError::Parse {
        path: path.to_path_buf(),
        message,
    };

    if items.iter().all(Value::is_string) {
        if items.is_empty() {
            return Ok(Elements::Int(Vec::new()));
        }
        return Ok(Elements::Str(
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        ));
    }
    if items.iter().all(Value::is_i64) {
        return Ok(Elements::Int(items.iter().filter_map(Value::as_i64).collect()));
    }
    items
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| parse_err(format!("unsupported element {}", v)))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Elements::Float)
}
