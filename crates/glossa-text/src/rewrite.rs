//! Ordered surface-rewrite rules.
//!
//! A rule set is a declarative, ordered list of `(pattern, replacement)`
//! pairs. Rules are applied one after another to the *current* state of the
//! string, so later rules see what earlier rules produced. After every rule
//! the string is tidied: whitespace collapsed and trimmed and, for sets that
//! drop orphans, words of a single character removed unless protected.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::Path;

use glossa_core::{Error, Population, Result};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Which population a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleScope {
    #[default]
    Both,
    Citizens,
    Councilors,
}

impl RuleScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Citizens => "citizens",
            Self::Councilors => "councilors",
        }
    }

    /// Population-specific rules never fire without a population.
    pub fn applies_to(&self, population: Option<Population>) -> bool {
        match (self, population) {
            (Self::Both, _) => true,
            (Self::Citizens, Some(Population::Citizens)) => true,
            (Self::Councilors, Some(Population::Councilors)) => true,
            _ => false,
        }
    }
}

/// One rule as written in a rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub scope: RuleScope,
}

/// A rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetSpec {
    pub name: String,
    /// Remove single-character words after every rule. Token batteries
    /// need it; whole-text batteries match on single letters and keep them.
    #[serde(default = "default_drop_orphans")]
    pub drop_orphans: bool,
    /// Single-character words that survive the orphan-drop step.
    #[serde(default)]
    pub protected: Vec<String>,
    pub rules: Vec<RuleSpec>,
}

fn default_drop_orphans() -> bool {
    true
}

#[derive(Debug)]
struct Rule {
    regex: Regex,
    replacement: String,
    scope: RuleScope,
}

/// A compiled, immutable rule set.
#[derive(Debug)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
    drop_orphans: bool,
    protected: BTreeSet<String>,
    digest: String,
}

impl RuleSet {
    /// Compile every pattern. The first pattern that fails to compile fails
    /// the whole set.
    pub fn compile(spec: RuleSetSpec) -> Result<Self> {
        let digest = digest_spec(&spec);

        let mut rules = Vec::with_capacity(spec.rules.len());
        for (index, rule) in spec.rules.into_iter().enumerate() {
            let regex = Regex::new(&rule.pattern).map_err(|e| Error::InvalidRule {
                set: spec.name.clone(),
                index,
                message: e.to_string(),
            })?;
            rules.push(Rule {
                regex,
                replacement: rule.replacement,
                scope: rule.scope,
            });
        }

        debug!(set = %spec.name, rules = rules.len(), "Compiled rule set");

        Ok(Self {
            name: spec.name,
            rules,
            drop_orphans: spec.drop_orphans,
            protected: spec.protected.into_iter().collect(),
            digest,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: RuleSetSpec = serde_json::from_str(json)?;
        Self::compile(spec)
    }

    /// Load and compile a rule file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules that fire for `population`.
    pub fn len_for(&self, population: Option<Population>) -> usize {
        self.rules
            .iter()
            .filter(|r| r.scope.applies_to(population))
            .count()
    }

    /// Hex SHA-256 of the ordered rule content.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn drops_orphans(&self) -> bool {
        self.drop_orphans
    }

    pub fn is_protected(&self, word: &str) -> bool {
        self.protected.contains(word)
    }

    /// Rewriter applying only the population-neutral rules.
    pub fn rewriter(&self) -> SurfaceRewriter<'_> {
        SurfaceRewriter::new(self, None)
    }

    /// Rewriter applying the neutral rules plus those scoped to `population`.
    pub fn rewriter_for(&self, population: Population) -> SurfaceRewriter<'_> {
        SurfaceRewriter::new(self, Some(population))
    }
}

fn digest_spec(spec: &RuleSetSpec) -> String {
    let mut hasher = Sha256::new();
    hasher.update(spec.name.as_bytes());
    hasher.update(if spec.drop_orphans { b"+" } else { b"-" });
    for rule in &spec.rules {
        hasher.update(b"\x1e");
        hasher.update(rule.pattern.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(rule.replacement.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(rule.scope.as_str().as_bytes());
    }
    let protected: BTreeSet<&String> = spec.protected.iter().collect();
    for word in protected {
        hasher.update(b"\x1d");
        hasher.update(word.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Applies a rule set, filtered to one population, to text or tokens.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRewriter<'a> {
    rules: &'a RuleSet,
    population: Option<Population>,
}

impl<'a> SurfaceRewriter<'a> {
    pub fn new(rules: &'a RuleSet, population: Option<Population>) -> Self {
        Self { rules, population }
    }

    pub fn population(&self) -> Option<Population> {
        self.population
    }

    /// Rewrite a whole string. Unmatched rules are no-ops.
    pub fn rewrite(&self, text: &str) -> String {
        let mut state = Cow::Borrowed(text);
        let mut tidied = false;

        for rule in &self.rules.rules {
            if !rule.scope.applies_to(self.population) {
                continue;
            }
            // Tidying is idempotent, so an unchanged state only needs it once.
            if !tidied {
                state = Cow::Owned(self.tidy(&state));
                tidied = true;
            }
            let replaced = match rule.regex.replace_all(&state, NoExpand(&rule.replacement)) {
                Cow::Borrowed(_) => None,
                Cow::Owned(next) => Some(next),
            };
            if let Some(next) = replaced {
                state = Cow::Owned(self.tidy(&next));
            }
        }

        if tidied {
            state.into_owned()
        } else {
            crate::collapse_whitespace(&state)
        }
    }

    /// Rewrite a single token. A rule may split the token or excise it
    /// entirely, so the result is the list of surviving words, each free of
    /// whitespace.
    pub fn rewrite_token(&self, token: &str) -> Vec<String> {
        self.rewrite(token)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn tidy(&self, text: &str) -> String {
        let rules = self.rules;
        text.split_whitespace()
            .filter(|w| !rules.drop_orphans || w.chars().count() > 1 || rules.is_protected(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
