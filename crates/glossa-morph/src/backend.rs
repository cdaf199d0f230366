//! Morphological reducer trait.

use glossa_core::ReductionMode;

/// A stem or lemma backend for single, accent-folded words.
pub trait MorphologicalReducer: Send + Sync {
    /// Reduce one word. Must never return an empty string for a non-empty
    /// word; backends with nothing to say return the word itself.
    fn reduce(&self, word: &str) -> String;

    fn mode(&self) -> ReductionMode;

    /// Short backend name for logs and reports.
    fn name(&self) -> &str;
}
