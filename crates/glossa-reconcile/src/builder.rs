//! Stem equivalence-class builder.

use std::collections::BTreeSet;

use glossa_core::Population;
use glossa_morph::CachedReducer;
use glossa_text::{RuleSet, SurfaceRewriter};
use tracing::debug;

use crate::dictionary::StemDictionary;
use crate::types::BuildStats;

/// Builds one corpus's `StemDictionary` from its documents.
///
/// Tokens are lowercased and deduplicated first, so the surface battery and
/// the reducer run once per distinct word no matter how often it repeats.
pub struct EquivalenceClassBuilder<'a> {
    rewriter: SurfaceRewriter<'a>,
    reducer: &'a CachedReducer,
}

impl<'a> EquivalenceClassBuilder<'a> {
    pub fn new(surface: &'a RuleSet, population: Population, reducer: &'a CachedReducer) -> Self {
        Self {
            rewriter: surface.rewriter_for(population),
            reducer,
        }
    }

    /// Distinct surface forms of a corpus, plus the number of distinct
    /// tokens they came from. Forms of one character are discarded.
    pub fn surface_forms<S: AsRef<str>>(&self, documents: &[S]) -> (BTreeSet<String>, usize) {
        let tokens: BTreeSet<String> = documents
            .iter()
            .flat_map(|d| d.as_ref().split_whitespace())
            .map(str::to_lowercase)
            .collect();

        let forms = tokens
            .iter()
            .flat_map(|t| self.rewriter.rewrite_token(t))
            .filter(|f| f.chars().count() > 1)
            .collect();

        (forms, tokens.len())
    }

    pub fn build<S: AsRef<str>>(&self, documents: &[S]) -> (StemDictionary, BuildStats) {
        let (forms, distinct_tokens) = self.surface_forms(documents);

        let mut dictionary = StemDictionary::new();
        for form in &forms {
            let key = self.reducer.reduce_word(form);
            dictionary.insert(&key, form);
        }

        let stats = BuildStats {
            distinct_tokens,
            surface_forms: dictionary.surface_count(),
            classes: dictionary.len(),
            singleton_classes: dictionary.singleton_count(),
        };
        debug!(
            population = ?self.rewriter.population(),
            distinct_tokens = stats.distinct_tokens,
            surface_forms = stats.surface_forms,
            classes = stats.classes,
            "Built stem dictionary"
        );

        (dictionary, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::cache;
    use glossa_text::rules::SURFACE;

    #[test]
    fn test_groups_variants_under_one_key() {
        let cache = cache();
        let builder = EquivalenceClassBuilder::new(&SURFACE, Population::Citizens, &cache);
        let (dictionary, stats) = builder.build(&["ΜΕΤΑΝΑΣΤΕΣ ερχονται", "μεταναστης μεταναστες"]);

        assert_eq!(
            dictionary.class("μεταναστ").unwrap(),
            &["μεταναστες", "μεταναστης"]
        );
        assert_eq!(stats.distinct_tokens, 3);
        assert_eq!(stats.surface_forms, 3);
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.singleton_classes, 1);
    }

    #[test]
    fn test_reducer_runs_once_per_form() {
        let cache = cache();
        let builder = EquivalenceClassBuilder::new(&SURFACE, Population::Councilors, &cache);
        let docs = vec!["ερχονται ερχονται"; 50];
        builder.build(&docs);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_empty_corpus() {
        let cache = cache();
        let builder = EquivalenceClassBuilder::new(&SURFACE, Population::Citizens, &cache);
        let (dictionary, stats) = builder.build::<&str>(&[]);
        assert!(dictionary.is_empty());
        assert_eq!(stats, BuildStats::default());
    }
}
