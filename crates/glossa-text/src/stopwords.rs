//! Stopword sets.

use std::collections::HashSet;
use std::path::Path;

use glossa_core::Result;
use tracing::debug;

use crate::fold_accents;

/// Read a word list: one word per line, trimmed, blank lines skipped.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Membership set of stopwords. Every word is also stored in its
/// accent-folded form, so accented and unaccented spellings both match.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// `base ∪ additional`, minus every word in `keep`.
    pub fn from_lists(base: &[String], additional: &[String], keep: &[String]) -> Self {
        let keep: HashSet<&str> = keep.iter().map(String::as_str).collect();
        let set = Self::new(
            base.iter()
                .chain(additional)
                .filter(|w| !keep.contains(w.as_str())),
        );
        debug!(
            base = base.len(),
            additional = additional.len(),
            keep = keep.len(),
            size = set.len(),
            "Built stopword set"
        );
        set
    }

    /// A copy of this set with `extra` added.
    pub fn with_additional(&self, extra: &[String]) -> Self {
        let mut set = self.clone();
        set.extend(extra);
        set
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            self.words.insert(word.to_string());
            self.words.insert(fold_accents(word));
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every stopword token from `text`, rejoining with single spaces.
    pub fn remove_from(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|t| !self.contains(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
