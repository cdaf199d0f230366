//! Dual-corpus reconciliation.

use std::time::Instant;

use chrono::Utc;
use glossa_core::{Error, Population, Result};
use glossa_morph::{CachedReducer, Reducer};
use glossa_text::RuleBook;
use tracing::{debug, info, warn};

use crate::builder::EquivalenceClassBuilder;
use crate::canonicalizer::Canonicalizer;
use crate::types::*;

/// Runs build → canonicalize → final battery over each population.
///
/// Each population gets its own reducer cache and its own dictionary;
/// nothing built for one corpus is ever applied to the other.
pub struct Reconciler {
    rules: RuleBook,
    reducer: Reducer,
    parallel: bool,
}

impl Reconciler {
    pub fn new(rules: RuleBook, reducer: Reducer) -> Self {
        Self {
            rules,
            reducer,
            parallel: true,
        }
    }

    /// Process the two populations on separate rayon tasks.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    /// Reconcile one corpus in isolation.
    pub fn reconcile_corpus(&self, corpus: &Corpus) -> ReconciledCorpus {
        let start = Instant::now();
        let population = corpus.population;

        if corpus.is_empty() {
            warn!(%population, "Corpus is empty");
        }

        let cache = CachedReducer::new(self.reducer.clone());

        let builder = EquivalenceClassBuilder::new(&self.rules.surface, population, &cache);
        let (dictionary, build) = builder.build(&corpus.documents);

        let canonicalizer = Canonicalizer::new(&dictionary, &self.rules.surface, population, &cache);
        let (canonical, canonicalize) = canonicalizer.canonicalize_all(&corpus.documents);
        drop(canonicalizer);

        let battery = self.rules.reconcile.rewriter_for(population);
        let documents: Vec<String> = canonical.iter().map(|d| battery.rewrite(d)).collect();

        let reducer_cache = cache.stats();
        let report = PopulationReport {
            population,
            documents: documents.len(),
            build,
            canonicalize,
            reducer_cache,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            %population,
            documents = report.documents,
            surface_forms = build.surface_forms,
            classes = build.classes,
            rewritten = canonicalize.rewritten,
            not_found = canonicalize.not_found,
            "Reconciled corpus"
        );
        debug!(
            %population,
            hits = reducer_cache.hits,
            misses = reducer_cache.misses,
            hit_ratio = reducer_cache.hit_ratio(),
            "Reducer cache"
        );

        ReconciledCorpus {
            population,
            documents,
            dictionary,
            report,
        }
    }

    /// Reconcile both populations and assemble the run report.
    pub fn reconcile(&self, citizens: &Corpus, councilors: &Corpus) -> Result<Reconciliation> {
        for (corpus, expected) in [
            (citizens, Population::Citizens),
            (councilors, Population::Councilors),
        ] {
            if corpus.population != expected {
                return Err(Error::InvalidArgument(format!(
                    "expected a {} corpus, got {}",
                    expected, corpus.population
                )));
            }
        }

        let start = Instant::now();
        info!(
            mode = %self.reducer.mode(),
            citizens = citizens.len(),
            councilors = councilors.len(),
            parallel = self.parallel,
            "Starting reconciliation"
        );

        let (citizens, councilors) = if self.parallel {
            rayon::join(
                || self.reconcile_corpus(citizens),
                || self.reconcile_corpus(councilors),
            )
        } else {
            (
                self.reconcile_corpus(citizens),
                self.reconcile_corpus(councilors),
            )
        };

        let report = ReconcileReport {
            mode: self.reducer.mode(),
            reducer: self.reducer.backend_name().to_string(),
            populations: vec![citizens.report.clone(), councilors.report.clone()],
            rule_sets: vec![
                RuleDigest::from(self.rules.surface.as_ref()),
                RuleDigest::from(self.rules.reconcile.as_ref()),
            ],
            duration_ms: start.elapsed().as_millis() as u64,
            generated_at: Utc::now(),
        };

        info!(duration_ms = report.duration_ms, "Reconciliation complete");

        Ok(Reconciliation {
            citizens,
            councilors,
            report,
        })
    }
}
