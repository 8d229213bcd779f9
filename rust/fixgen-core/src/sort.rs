//! Element sequences for the sort exercise.
//!
//! Basic, edge and special cases are fixed literal lists. Large cases are
//! produced procedurally from the case's random source.

use crate::element::Elements;
use crate::recipe::{SortCategory, DEFAULT_LARGE_SIZE};
use rand::Rng;

/// Where a case's elements come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SortSource {
    Literal(Elements),
    RandomInts { count: usize, lo: i64, hi: i64 },
    RandomStrings { count: usize, min_len: usize, max_len: usize },
    /// Uniform floats rounded to `decimals` fractional digits.
    RandomFloats { count: usize, lo: f64, hi: f64, decimals: i32 },
    /// `0, 1, ..., count - 1`
    Ascending { count: usize },
    /// `count, count - 1, ..., 1`
    Descending { count: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortCase {
    pub name: &'static str,
    pub category: SortCategory,
    pub description: &'static str,
    pub source: SortSource,
}

impl SortCase {
    /// Element count without generating anything.
    pub fn len(&self) -> usize {
        match &self.source {
            SortSource::Literal(els) => els.len(),
            SortSource::RandomInts { count, .. }
            | SortSource::RandomStrings { count, .. }
            | SortSource::RandomFloats { count, .. }
            | SortSource::Ascending { count }
            | SortSource::Descending { count } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn elements<R: Rng + ?Sized>(&self, rng: &mut R) -> Elements {
        match &self.source {
            SortSource::Literal(els) => els.clone(),
            SortSource::RandomInts { count, lo, hi } => {
                Elements::Int((0..*count).map(|_| rng.gen_range(*lo..=*hi)).collect())
            }
            SortSource::RandomStrings {
                count,
                min_len,
                max_len,
            } => Elements::Str(
                (0..*count)
                    .map(|_| {
                        let len = rng.gen_range(*min_len..=*max_len);
                        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
                    })
                    .collect(),
            ),
            SortSource::RandomFloats {
                count,
                lo,
                hi,
                decimals,
            } => {
                let scale = 10f64.powi(*decimals);
                Elements::Float(
                    (0..*count)
                        .map(|_| (rng.gen_range(*lo..=*hi) * scale).round() / scale)
                        .collect(),
                )
            }
            SortSource::Ascending { count } => Elements::Int((0..*count as i64).collect()),
            SortSource::Descending { count } => {
                let n = *count as i64;
                Elements::Int((0..n).map(|i| n - i).collect())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogOptions {
    pub large_size: usize,
    pub include_large_floats: bool,
    /// Restrict to these categories; empty means all.
    pub categories: Vec<SortCategory>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        CatalogOptions {
            large_size: DEFAULT_LARGE_SIZE,
            include_large_floats: false,
            categories: Vec::new(),
        }
    }
}

impl CatalogOptions {
    fn wants(&self, category: SortCategory) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// The full set of sort cases selected by `opts`, in generation order.
pub fn catalog(opts: &CatalogOptions) -> Vec<SortCase> {
    let mut cases = Vec::new();
    if opts.wants(SortCategory::Basic) {
        cases.extend(basic_cases());
    }
    if opts.wants(SortCategory::Edge) {
        cases.extend(edge_cases());
    }
    if opts.wants(SortCategory::Large) {
        cases.extend(large_cases(opts.large_size, opts.include_large_floats));
    }
    if opts.wants(SortCategory::Special) {
        cases.extend(special_cases());
    }
    cases
}

fn literal(name: &'static str, category: SortCategory, description: &'static str, els: Elements) -> SortCase {
    SortCase {
        name,
        category,
        description,
        source: SortSource::Literal(els),
    }
}

fn basic_cases() -> Vec<SortCase> {
    vec![
        literal(
            "case1",
            SortCategory::Basic,
            "Basic case: small array of positive integers",
            Elements::Int(vec![5, 1, 4, 2, 8]),
        ),
        literal(
            "case2",
            SortCategory::Basic,
            "Basic case: array of strings",
            Elements::strs(&["orange", "apple", "banana", "grape", "kiwi"]),
        ),
        literal(
            "case3",
            SortCategory::Basic,
            "Basic case: array of floating-point numbers",
            Elements::Float(vec![3.14, 1.41, 2.71, 1.73, 2.0]),
        ),
    ]
}

fn edge_cases() -> Vec<SortCase> {
    vec![
        literal(
            "case_edge1",
            SortCategory::Edge,
            "Edge case: empty array",
            Elements::Int(vec![]),
        ),
        literal(
            "case_edge2",
            SortCategory::Edge,
            "Edge case: single-element array",
            Elements::Int(vec![1]),
        ),
        literal(
            "case_edge3",
            SortCategory::Edge,
            "Edge case: all elements equal",
            Elements::Int(vec![2, 2, 2, 2, 2]),
        ),
    ]
}

fn large_cases(size: usize, include_floats: bool) -> Vec<SortCase> {
    let mut cases = vec![
        SortCase {
            name: "case_large1",
            category: SortCategory::Large,
            description: "Large case: random integers in [-1000000000, 1000000000]",
            source: SortSource::RandomInts {
                count: size,
                lo: -1_000_000_000,
                hi: 1_000_000_000,
            },
        },
        SortCase {
            name: "case_large2",
            category: SortCategory::Large,
            description: "Large case: random lowercase strings of 5-15 characters",
            source: SortSource::RandomStrings {
                count: size,
                min_len: 5,
                max_len: 15,
            },
        },
    ];
    if include_floats {
        cases.push(SortCase {
            name: "case_large3",
            category: SortCategory::Large,
            description: "Large case: random floats in [-1000, 1000] with 6 decimal places",
            source: SortSource::RandomFloats {
                count: size,
                lo: -1000.0,
                hi: 1000.0,
                decimals: 6,
            },
        });
    }
    cases.push(SortCase {
        name: "case_large4",
        category: SortCategory::Large,
        description: "Large case: already sorted ascending",
        source: SortSource::Ascending { count: size },
    });
    cases.push(SortCase {
        name: "case_large5",
        category: SortCategory::Large,
        description: "Large case: fully reversed",
        source: SortSource::Descending { count: size },
    });
    cases
}

fn special_cases() -> Vec<SortCase> {
    vec![
        literal(
            "case_special1",
            SortCategory::Special,
            "Special case: array containing the extreme values",
            Elements::Int(vec![0, 1_000_000_000, -1_000_000_000, 5, -5]),
        ),
        literal(
            "case_special2",
            SortCategory::Special,
            "Special case: signed zeros and floats of extreme magnitude",
            Elements::Float(vec![0.0, -0.0, 3.14, -3.14, 2.0e-10, 2.0e10]),
        ),
    ]
}
