//! Seeded random sources.
//!
//! Every case draws from its own [`CaseRng`], seeded from the run seed and the
//! case name. Regenerating a single case out of a suite therefore yields the
//! same bytes as generating the whole suite.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

pub type CaseRng = ChaCha8Rng;

/// Derive the seed for one case from the run seed and the case name.
pub fn derive_case_seed(run_seed: u64, case_name: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(run_seed.to_le_bytes());
    hasher.update(case_name.as_bytes());
    let digest = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head)
}

pub fn case_rng(run_seed: u64, case_name: &str) -> CaseRng {
    let seed = derive_case_seed(run_seed, case_name);
    tracing::debug!(case = case_name, run_seed, case_seed = seed, "derived case seed");
    ChaCha8Rng::seed_from_u64(seed)
}
