//! Canonicalizer: forces every token onto its class representative.

use std::collections::HashMap;

use glossa_core::Population;
use glossa_morph::CachedReducer;
use glossa_text::{RuleSet, SurfaceRewriter};
use parking_lot::Mutex;

use crate::dictionary::StemDictionary;
use crate::types::CanonicalizeStats;

/// Resolution of one distinct input token.
#[derive(Debug, Clone)]
struct Resolved {
    words: Vec<String>,
    not_found: usize,
}

/// Rewrites documents against one frozen `StemDictionary`.
///
/// A token that is already a known surface form maps straight to its
/// class's first member. Any other token goes through the surface battery
/// and the reducer; when no resulting stem key has a class the token is
/// kept exactly as typed. Canonical forms are members of their own class, so
/// canonicalizing twice with the same dictionary changes nothing.
pub struct Canonicalizer<'a> {
    dictionary: &'a StemDictionary,
    rewriter: SurfaceRewriter<'a>,
    reducer: &'a CachedReducer,
    memo: Mutex<HashMap<String, Resolved>>,
}

impl<'a> Canonicalizer<'a> {
    pub fn new(
        dictionary: &'a StemDictionary,
        surface: &'a RuleSet,
        population: Population,
        reducer: &'a CachedReducer,
    ) -> Self {
        Self {
            dictionary,
            rewriter: surface.rewriter_for(population),
            reducer,
            memo: Mutex::new(HashMap::new()),
        }
    }

    pub fn canonicalize(&self, document: &str) -> String {
        self.canonicalize_with_stats(document).0
    }

    pub fn canonicalize_with_stats(&self, document: &str) -> (String, CanonicalizeStats) {
        let mut stats = CanonicalizeStats::default();
        let mut out: Vec<String> = Vec::new();

        for token in document.split_whitespace() {
            let resolved = self.resolve_token(token);
            stats.tokens += 1;
            stats.not_found += resolved.not_found;
            if resolved.words.len() != 1 || resolved.words[0] != token {
                stats.rewritten += 1;
            }
            out.extend(resolved.words);
        }

        (out.join(" "), stats)
    }

    /// Canonicalize every document, keeping order and count.
    pub fn canonicalize_all<S: AsRef<str>>(&self, documents: &[S]) -> (Vec<String>, CanonicalizeStats) {
        let mut total = CanonicalizeStats::default();
        let out = documents
            .iter()
            .map(|d| {
                let (text, stats) = self.canonicalize_with_stats(d.as_ref());
                total.merge(stats);
                text
            })
            .collect();
        (out, total)
    }

    fn resolve_token(&self, token: &str) -> Resolved {
        if let Some(hit) = self.memo.lock().get(token) {
            return hit.clone();
        }

        let lower = token.to_lowercase();
        let resolved = match self.dictionary.key_of(&lower).and_then(|k| self.dictionary.canonical(k)) {
            Some(canonical) => Resolved {
                words: vec![canonical.to_string()],
                not_found: 0,
            },
            None => self.resolve_fragments(token, &lower),
        };

        self.memo.lock().insert(token.to_string(), resolved.clone());
        resolved
    }

    /// A token the battery removes entirely yields no words. A token none
    /// of whose fragments has a class comes back exactly as typed.
    fn resolve_fragments(&self, token: &str, lower: &str) -> Resolved {
        let fragments = self.rewriter.rewrite_token(lower);
        let found: Vec<Option<&'a str>> = fragments.iter().map(|f| self.lookup(f)).collect();

        if !fragments.is_empty() && found.iter().all(Option::is_none) {
            return Resolved {
                words: vec![token.to_string()],
                not_found: 1,
            };
        }

        let mut not_found = 0;
        let words = fragments
            .into_iter()
            .zip(found)
            .map(|(fragment, canonical)| match canonical {
                Some(c) => c.to_string(),
                None => {
                    not_found += 1;
                    fragment
                }
            })
            .collect();
        Resolved { words, not_found }
    }

    /// Canonical form for a rewritten word, if its stem key has a class.
    fn lookup(&self, fragment: &str) -> Option<&'a str> {
        let dictionary: &'a StemDictionary = self.dictionary;
        match dictionary.key_of(fragment) {
            Some(key) => dictionary.canonical(key),
            None => {
                let key = self.reducer.reduce_word(fragment);
                dictionary.canonical(&key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_text::rules::SURFACE;

    use crate::builder::EquivalenceClassBuilder;
    use crate::test_support::cache;

    fn build(docs: &[&str]) -> (StemDictionary, CachedReducer) {
        let cache = cache();
        let (dictionary, _) =
            EquivalenceClassBuilder::new(&SURFACE, Population::Citizens, &cache).build(docs);
        (dictionary, cache)
    }

    #[test]
    fn test_variants_collapse_to_first_member() {
        let (dictionary, cache) = build(&["μεταναστης ερχεται", "μεταναστες ερχονται"]);
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);

        assert_eq!(c.canonicalize("μεταναστης ερχεται"), "μεταναστες ερχεται");
        assert_eq!(c.canonicalize("ΜΕΤΑΝΑΣΤΕΣ  ερχονται"), "μεταναστες ερχονται");
    }

    #[test]
    fn test_unseen_stem_passes_through() {
        let (dictionary, cache) = build(&["μεταναστες"]);
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);

        let (text, stats) = c.canonicalize_with_stats("μεταναστης προσφυγες");
        assert_eq!(text, "μεταναστες προσφυγες");
        assert_eq!(stats.tokens, 2);
        assert_eq!(stats.rewritten, 1);
        assert_eq!(stats.not_found, 1);
    }

    #[test]
    fn test_unresolved_tokens_kept_as_typed() {
        let (dictionary, cache) = build(&["μεταναστες"]);
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);

        // χρηματων is rewritten to χρηματα by the battery, which has no class either
        let (text, stats) = c.canonicalize_with_stats("Προσφυγες χρηματων ΔΗΜΑΡΧΟΣ");
        assert_eq!(text, "Προσφυγες χρηματων ΔΗΜΑΡΧΟΣ");
        assert_eq!(
            stats,
            CanonicalizeStats {
                tokens: 3,
                rewritten: 0,
                not_found: 3,
            }
        );
        assert_eq!(c.canonicalize(&text), text);
    }

    #[test]
    fn test_excised_token_dropped_and_uppercase_resolved() {
        let (dictionary, cache) = build(&["μεταναστες"]);
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);

        let (text, stats) = c.canonicalize_with_stats("«» ΜΕΤΑΝΑΣΤΗΣ «μεταναστες»");
        assert_eq!(text, "μεταναστες μεταναστες");
        assert_eq!(stats.tokens, 3);
        assert_eq!(stats.rewritten, 3);
        assert_eq!(stats.not_found, 0);
    }

    #[test]
    fn test_empty_document() {
        let (dictionary, cache) = build(&["χωρα"]);
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);
        assert_eq!(c.canonicalize(""), "");
        assert_eq!(c.canonicalize("   \t "), "");
    }

    #[test]
    fn test_idempotent() {
        let docs = ["μεταναστης ερχεται", "μεταναστες ερχονται", "χρηματων λαθραιοι"];
        let (dictionary, cache) = build(&docs);
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);
        for doc in docs {
            let once = c.canonicalize(doc);
            assert_eq!(c.canonicalize(&once), once);
        }
    }

    #[test]
    fn test_canonicalize_all_keeps_row_count() {
        let docs = ["μεταναστης", "", "μεταναστες"];
        let (dictionary, cache) = build(&docs);
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);
        let (out, stats) = c.canonicalize_all(&docs);
        assert_eq!(out, vec!["μεταναστες", "", "μεταναστες"]);
        assert_eq!(stats.tokens, 2);
        assert_eq!(stats.rewritten, 1);
    }
}
