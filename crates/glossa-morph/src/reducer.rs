//! Abbreviation-aware reducer over multi-word strings.

use std::sync::Arc;

use glossa_core::ReductionMode;
use glossa_text::is_abbreviation;

use crate::backend::MorphologicalReducer;

/// Wraps a backend with the abbreviation bypass: abbreviation tokens are
/// never reduced, in either mode. Multi-word input is reduced word by word
/// and rejoined with single spaces.
#[derive(Clone)]
pub struct Reducer {
    backend: Arc<dyn MorphologicalReducer>,
}

impl Reducer {
    pub fn new(backend: Arc<dyn MorphologicalReducer>) -> Self {
        Self { backend }
    }

    pub fn mode(&self) -> ReductionMode {
        self.backend.mode()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn reduce_word(&self, word: &str) -> String {
        if is_abbreviation(word) {
            return word.to_string();
        }
        let reduced = self.backend.reduce(word);
        if reduced.is_empty() {
            word.to_string()
        } else {
            reduced
        }
    }

    pub fn reduce(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|w| self.reduce_word(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Debug for Reducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reducer")
            .field("backend", &self.backend.name())
            .field("mode", &self.backend.mode())
            .finish()
    }
}
