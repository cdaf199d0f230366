//! Fixtures shared by the unit tests.

use std::sync::Arc;

use glossa_core::ReductionMode;
use glossa_morph::{CachedReducer, MorphologicalReducer, Reducer};

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
