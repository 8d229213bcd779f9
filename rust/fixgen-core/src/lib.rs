//! fixgen core
//!
//! Deterministic fixture generation for hash-map and sort exercises: recipes,
//! sequence generators, independent oracles, and the atomic fixture writer.

pub mod element;
pub mod error;
pub mod map;
pub mod oracle;
pub mod recipe;
pub mod rng;
pub mod sort;
pub mod suite;
pub mod verify;
pub mod writer;

pub use element::{ElementKind, Elements};
pub use error::{FixtureError, Result};
pub use map::Operation;
pub use oracle::OracleState;
pub use recipe::{GetUnderflow, MapRecipe, MapRecipeKind, OpMix, RemoveUnderflow, SortCategory};
pub use writer::FixtureSummary;
