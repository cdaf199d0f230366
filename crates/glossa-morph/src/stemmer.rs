//! Snowball Greek stemmer.

use glossa_core::ReductionMode;
use rust_stemmers::{Algorithm, Stemmer};

use crate::backend::MorphologicalReducer;

pub struct GreekStemmer {
    stemmer: Stemmer,
}

impl GreekStemmer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::Greek),
        }
    }
}

impl Default for GreekStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphologicalReducer for GreekStemmer {
    fn reduce(&self, word: &str) -> String {
        let stem = self.stemmer.stem(word);
        if stem.is_empty() {
            word.to_string()
        } else {
            stem.into_owned()
        }
    }

    fn mode(&self) -> ReductionMode {
        ReductionMode::Stem
    }

    fn name(&self) -> &str {
        "snowball-greek"
    }
}
