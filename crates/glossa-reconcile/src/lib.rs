//! Glossa Reconcile — stem-consistency reconciliation.
//!
//! For each population the `EquivalenceClassBuilder` groups the corpus's
//! distinct surface forms by stem key into a `StemDictionary`; the
//! `Canonicalizer` then forces every token onto the first member of its
//! class. The `Reconciler` runs both populations independently and applies
//! the final cross-cutting rewrite battery.

pub mod builder;
pub mod canonicalizer;
pub mod dictionary;
pub mod reconciler;
pub mod types;

#[cfg(test)]
mod test_support;

pub use builder::EquivalenceClassBuilder;
pub use canonicalizer::Canonicalizer;
pub use dictionary::StemDictionary;
pub use reconciler::Reconciler;
pub use types::{
    BuildStats, CanonicalizeStats, Corpus, PopulationReport, ReconcileReport, ReconciledCorpus,
    Reconciliation, RuleDigest,
};
