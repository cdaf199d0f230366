//! Reconciliation properties: partition, idempotence, determinism, corpus
//! isolation, abbreviation bypass, and the end-to-end collapse scenarios
//! with both a fake reducer and the Snowball Greek stemmer.

mod common;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use glossa_core::{Population, ReductionMode};
use glossa_morph::{create_reducer, CachedReducer, LexiconLemmatizer, Reducer};
use glossa_reconcile::{Canonicalizer, EquivalenceClassBuilder, Reconciler, StemDictionary};
use glossa_text::rules::SURFACE;
use glossa_text::{RuleBook, ABBREVIATIONS};

use common::{cache, corpus, reducer};

const CITIZENS: &[&str] = &[
    "μεταναστες ερχονται",
    "οι προσφυγες ηρθαν",
    "ΜΕΤΑΝΑΣΤΕΣ χρηματων",
    "λαθραιοι μεταναστεσ",
    "",
];

const COUNCILORS: &[&str] = &["μεταναστης ερχεται", "προσφυγας", "προσφυγας ηρθαν"];

fn build(population: Population, docs: &[&str], cache: &CachedReducer) -> StemDictionary {
    EquivalenceClassBuilder::new(&SURFACE, population, cache)
        .build(docs)
        .0
}

/// Every distinct surface form lands in exactly one class.
#[test]
fn test_classes_partition_surface_forms() {
    let cache = cache();
    let builder = EquivalenceClassBuilder::new(&SURFACE, Population::Citizens, &cache);
    let (forms, _) = builder.surface_forms(CITIZENS);
    let (dictionary, stats) = builder.build(CITIZENS);

    let mut seen = BTreeSet::new();
    let mut total = 0;
    for (key, members) in dictionary.iter() {
        assert!(!members.is_empty(), "class {key} is empty");
        for m in members {
            total += 1;
            assert!(seen.insert(m.clone()), "{m} appears in two classes");
            assert_eq!(dictionary.key_of(m), Some(key));
        }
    }

    assert_eq!(seen, forms);
    assert_eq!(total, forms.len());
    assert_eq!(stats.surface_forms, forms.len());
}

/// Canonicalizing canonical text changes nothing.
#[test]
fn test_canonicalize_is_idempotent() {
    for (population, docs) in [
        (Population::Citizens, CITIZENS),
        (Population::Councilors, COUNCILORS),
    ] {
        let cache = cache();
        let dictionary = build(population, docs, &cache);
        let c = Canonicalizer::new(&dictionary, &SURFACE, population, &cache);
        for doc in docs {
            let once = c.canonicalize(doc);
            assert_eq!(c.canonicalize(&once), once, "not a fixed point: {doc:?}");
        }
    }
}

/// Rebuilding over the same corpus, in any document order, yields the same
/// keys with the same member order.
#[test]
fn test_builder_is_deterministic() {
    let first = build(Population::Citizens, CITIZENS, &cache());
    let second = build(Population::Citizens, CITIZENS, &cache());
    let mut reversed_docs = CITIZENS.to_vec();
    reversed_docs.reverse();
    let reversed = build(Population::Citizens, &reversed_docs, &cache());

    assert_eq!(first, second);
    assert_eq!(first, reversed);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&reversed).unwrap()
    );
}

/// Each population keeps its own dictionary; applying the wrong one gives
/// different output.
#[test]
fn test_corpora_are_isolated() {
    let reconciler = Reconciler::new(RuleBook::builtin(), reducer());
    let result = reconciler
        .reconcile(
            &corpus(Population::Citizens, CITIZENS),
            &corpus(Population::Councilors, COUNCILORS),
        )
        .unwrap();

    assert_ne!(result.citizens.dictionary, result.councilors.dictionary);
    assert_eq!(
        result.citizens.dictionary.class("μεταναστ").unwrap(),
        &["μεταναστες", "μεταναστεσ"]
    );
    assert_eq!(
        result.councilors.dictionary.class("μεταναστ").unwrap(),
        &["μεταναστης"]
    );

    let cache = cache();
    let own = Canonicalizer::new(
        &result.councilors.dictionary,
        &SURFACE,
        Population::Councilors,
        &cache,
    );
    let foreign = Canonicalizer::new(
        &result.citizens.dictionary,
        &SURFACE,
        Population::Councilors,
        &cache,
    );
    let own_out: Vec<String> = COUNCILORS.iter().map(|d| own.canonicalize(d)).collect();
    let foreign_out: Vec<String> = COUNCILORS.iter().map(|d| foreign.canonicalize(d)).collect();

    assert_eq!(own_out, vec!["μεταναστης ερχεται", "προσφυγας", "προσφυγας ηρθαν"]);
    assert_eq!(foreign_out, vec!["μεταναστες ερχεται", "προσφυγες", "προσφυγες ηρθαν"]);
    assert_ne!(own_out, foreign_out);
}

/// Abbreviation tokens are their own stem key in both modes and survive
/// canonicalization untouched.
#[test]
fn test_abbreviations_bypass_reduction() {
    let text = ABBREVIATIONS.join(" ");

    let lexicon: HashMap<String, String> = ABBREVIATIONS
        .iter()
        .map(|a| (a.to_string(), "λαθος".to_string()))
        .collect();
    let reducers = [
        create_reducer(ReductionMode::Stem, None).unwrap(),
        Reducer::new(Arc::new(LexiconLemmatizer::from_map(lexicon))),
        reducer(),
    ];

    for reducer in reducers {
        let cache = CachedReducer::new(reducer);
        let dictionary = build(Population::Citizens, &[text.as_str()], &cache);
        for abbr in ABBREVIATIONS {
            assert_eq!(dictionary.key_of(abbr), Some(abbr), "{abbr} was reduced");
        }
        let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);
        assert_eq!(c.canonicalize(&text), text);
    }
}

/// Three spellings of "immigrants" collapse to one across all documents.
#[test]
fn test_immigrant_variants_collapse() {
    let docs = ["μεταναστες ερχονται", "μεταναστης ερχεται", "μεταναστεσ ερχετε"];

    for population in Population::all() {
        let cache = cache();
        let dictionary = build(*population, &docs, &cache);
        assert_eq!(
            dictionary.class("μεταναστ").unwrap(),
            &["μεταναστες", "μεταναστεσ", "μεταναστης"]
        );

        let reconciler = Reconciler::new(RuleBook::builtin(), reducer());
        let reconciled = reconciler.reconcile_corpus(&corpus(*population, &docs));

        let spellings: BTreeSet<&str> = reconciled
            .documents
            .iter()
            .flat_map(|d| d.split_whitespace())
            .filter(|t| t.starts_with("μεταναστ"))
            .collect();
        assert_eq!(spellings.len(), 1, "{population}: {spellings:?}");
        assert_eq!(reconciled.documents.len(), 3);
        assert_eq!(
            reconciled.documents,
            vec!["μεταναστες ερχονται", "μεταναστες ερχεται", "μεταναστες ερχεται"]
        );
    }
}

/// A form sharing its stem with nothing still gets a one-element class and
/// is left as is.
#[test]
fn test_singleton_class_is_kept() {
    let docs = ["μεταναστες χωρα", "μεταναστης"];
    let cache = cache();
    let dictionary = build(Population::Citizens, &docs, &cache);

    assert_eq!(dictionary.class("χωρ").unwrap(), &["χωρα"]);
    assert_eq!(dictionary.singleton_count(), 1);

    let c = Canonicalizer::new(&dictionary, &SURFACE, Population::Citizens, &cache);
    assert_eq!(c.canonicalize("μεταναστες χωρα"), "μεταναστες χωρα");
    assert_eq!(c.canonicalize("μεταναστης"), "μεταναστες");
}

/// The same collapse through the Snowball Greek stemmer.
#[test]
fn test_immigrant_variants_collapse_with_greek_stemmer() {
    let docs = ["μεταναστες ερχονται", "μεταναστης ερχεται", "μεταναστεσ ερχετε"];
    let stemmer = || create_reducer(ReductionMode::Stem, None).unwrap();

    let cache = CachedReducer::new(stemmer());
    let dictionary = build(Population::Citizens, &docs, &cache);
    assert_eq!(
        dictionary.class("μεταναστ").unwrap(),
        &["μεταναστες", "μεταναστεσ", "μεταναστης"]
    );
    assert_eq!(
        dictionary.class("ερχ").unwrap(),
        &["ερχεται", "ερχετε", "ερχονται"]
    );

    let reconciler = Reconciler::new(RuleBook::builtin(), stemmer());
    let reconciled = reconciler.reconcile_corpus(&corpus(Population::Citizens, &docs));
    assert_eq!(reconciled.documents, vec!["μεταναστες ερχεται"; 3]);

    let c = Canonicalizer::new(&reconciled.dictionary, &SURFACE, Population::Citizens, &cache);
    for doc in &reconciled.documents {
        assert_eq!(&c.canonicalize(doc), doc);
    }
}
