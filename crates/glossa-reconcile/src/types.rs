//! Reconciliation types.

use chrono::{DateTime, Utc};
use glossa_core::{Population, ReductionMode};
use glossa_morph::CacheStats;
use glossa_text::RuleSet;
use serde::Serialize;

use crate::dictionary::StemDictionary;

/// One population's documents, in row order.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub population: Population,
    pub documents: Vec<String>,
}

impl Corpus {
    pub fn new(population: Population, documents: Vec<String>) -> Self {
        Self {
            population,
            documents,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Counters from building one stem dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    /// Distinct lowercased tokens before rewriting.
    pub distinct_tokens: usize,
    /// Distinct surface forms after rewriting and orphan removal.
    pub surface_forms: usize,
    pub classes: usize,
    pub singleton_classes: usize,
}

/// Counters from canonicalizing documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalizeStats {
    pub tokens: usize,
    /// Tokens whose output differs from the input token.
    pub rewritten: usize,
    /// Fragments whose stem key had no class; they pass through unchanged.
    pub not_found: usize,
}

impl CanonicalizeStats {
    pub fn merge(&mut self, other: CanonicalizeStats) {
        self.tokens += other.tokens;
        self.rewritten += other.rewritten;
        self.not_found += other.not_found;
    }
}

/// Per-population section of the run report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationReport {
    pub population: Population,
    pub documents: usize,
    pub build: BuildStats,
    pub canonicalize: CanonicalizeStats,
    pub reducer_cache: CacheStats,
    pub duration_ms: u64,
}

/// Name, size and content digest of a rule set used in the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDigest {
    pub name: String,
    pub rules: usize,
    pub digest: String,
}

impl From<&RuleSet> for RuleDigest {
    fn from(rules: &RuleSet) -> Self {
        Self {
            name: rules.name().to_string(),
            rules: rules.len(),
            digest: rules.digest().to_string(),
        }
    }
}

/// Result of reconciling both populations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub mode: ReductionMode,
    pub reducer: String,
    pub populations: Vec<PopulationReport>,
    pub rule_sets: Vec<RuleDigest>,
    pub duration_ms: u64,
    pub generated_at: DateTime<Utc>,
}

/// One population after reconciliation.
#[derive(Debug, Clone)]
pub struct ReconciledCorpus {
    pub population: Population,
    /// Canonicalized documents, same order and count as the input.
    pub documents: Vec<String>,
    pub dictionary: StemDictionary,
    pub report: PopulationReport,
}

/// Both populations plus the run report.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub citizens: ReconciledCorpus,
    pub councilors: ReconciledCorpus,
    pub report: ReconcileReport,
}

impl Reconciliation {
    pub fn get(&self, population: Population) -> &ReconciledCorpus {
        match population {
            Population::Citizens => &self.citizens,
            Population::Councilors => &self.councilors,
        }
    }
}
