//! Raw response → cleaned text.

use std::sync::Arc;

use crate::rewrite::RuleSet;
use crate::stopwords::StopwordSet;
use crate::{abbreviate, normalize_text};

/// Turns a raw survey response into the cleaned text the reconciler
/// consumes: normalize, fold abbreviations, drop stopwords.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    abbreviations: Arc<RuleSet>,
    stopwords: StopwordSet,
}

impl Preprocessor {
    pub fn new(abbreviations: Arc<RuleSet>, stopwords: StopwordSet) -> Self {
        Self {
            abbreviations,
            stopwords,
        }
    }

    pub fn clean(&self, text: &str) -> String {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return normalized;
        }
        let abbreviated = abbreviate(&normalized, &self.abbreviations);
        self.stopwords.remove_from(&abbreviated)
    }

    pub fn clean_all(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|t| self.clean(t)).collect()
    }
}
