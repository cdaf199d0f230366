//! Shared fixtures for the reconciliation tests.

use std::sync::Arc;

use glossa_core::{Population, ReductionMode};
use glossa_morph::{CachedReducer, MorphologicalReducer, Reducer};
use glossa_reconcile::Corpus;

/// Deterministic stand-in for a Greek stemmer: strips trailing vowels and
/// the final consonants ς, σ, ν.
pub struct StripVowels;

impl MorphologicalReducer for StripVowels {
    fn reduce(&self, word: &str) -> String {
        word.trim_end_matches(|c| "αεηιουωςσν".contains(c)).to_string()
    }

    fn mode(&self) -> ReductionMode {
        ReductionMode::Stem
    }

    fn name(&self) -> &str {
        "strip-vowels"
    }
}

pub fn reducer() -> Reducer {
    Reducer::new(Arc::new(StripVowels))
}

pub fn cache() -> CachedReducer {
    CachedReducer::new(reducer())
}

pub fn corpus(population: Population, docs: &[&str]) -> Corpus {
    Corpus::new(population, docs.iter().map(|d| d.to_string()).collect())
}
