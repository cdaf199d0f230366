//! Lexicon lemmatizer.
//!
//! Lemmas come from a JSON object `{ "form": "lemma", ... }`. Keys are
//! accent-folded on load so lookups work on folded tokens; forms missing
//! from the lexicon pass through unchanged.

use std::collections::HashMap;
use std::path::Path;

use glossa_core::{Error, ReductionMode, Result};
use glossa_text::fold_accents;
use tracing::{debug, warn};

use crate::backend::MorphologicalReducer;

pub struct LexiconLemmatizer {
    lexicon: HashMap<String, String>,
}

impl LexiconLemmatizer {
    pub fn from_map(entries: HashMap<String, String>) -> Self {
        let mut lexicon = HashMap::with_capacity(entries.len());
        for (form, lemma) in entries {
            let lemma = fold_accents(lemma.trim());
            if lemma.is_empty() {
                continue;
            }
            lexicon.insert(fold_accents(form.trim()), lemma);
        }
        Self { lexicon }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| Error::Lexicon(format!("expected an object of form -> lemma: {}", e)))?;
        Ok(Self::from_map(entries))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let lemmatizer = Self::from_json(&content)?;
        if lemmatizer.is_empty() {
            warn!(path = %path.display(), "Lemma lexicon is empty; every form passes through");
        }
        debug!(path = %path.display(), entries = lemmatizer.len(), "Loaded lemma lexicon");
        Ok(lemmatizer)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl MorphologicalReducer for LexiconLemmatizer {
    fn reduce(&self, word: &str) -> String {
        self.lexicon
            .get(word)
            .cloned()
            .unwrap_or_else(|| word.to_string())
    }

    fn mode(&self) -> ReductionMode {
        ReductionMode::Lemma
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_passthrough() {
        let lemmatizer =
            LexiconLemmatizer::from_json(r#"{"ερχονται": "ερχομαι", "Μετανάστες": "μετανάστης"}"#)
                .unwrap();
        assert_eq!(lemmatizer.reduce("ερχονται"), "ερχομαι");
        assert_eq!(lemmatizer.reduce("μεταναστες"), "μεταναστης");
        assert_eq!(lemmatizer.reduce("χωρα"), "χωρα");
    }

    #[test]
    fn test_non_object_is_lexicon_error() {
        let err = LexiconLemmatizer::from_json(r#"["ερχομαι"]"#).err().unwrap();
        assert!(matches!(err, Error::Lexicon(_)));
    }

    #[test]
    fn test_empty_lemmas_skipped() {
        let lemmatizer = LexiconLemmatizer::from_json(r#"{"και": " "}"#).unwrap();
        assert!(lemmatizer.is_empty());
        assert_eq!(lemmatizer.reduce("και"), "και");
    }
}
