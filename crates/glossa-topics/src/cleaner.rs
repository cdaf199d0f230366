//! Topic-text cleanup.

use std::sync::Arc;

use glossa_text::{RuleSet, StopwordSet};

/// Prepares reconciled text for keyword matching: the topic battery folds
/// remaining variants, then topic stopwords are dropped.
#[derive(Debug, Clone)]
pub struct TopicCleaner {
    rules: Arc<RuleSet>,
    stopwords: StopwordSet,
}

impl TopicCleaner {
    pub fn new(rules: Arc<RuleSet>, stopwords: StopwordSet) -> Self {
        Self { rules, stopwords }
    }

    pub fn clean(&self, text: &str) -> String {
        let rewritten = self.rules.rewriter().rewrite(text);
        self.stopwords.remove_from(&rewritten)
    }

    pub fn clean_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|t| self.clean(t.as_ref())).collect()
    }
}
