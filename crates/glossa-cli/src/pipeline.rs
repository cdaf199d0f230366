//! Command flows: read tables, run the libraries, write outputs.

use std::path::PathBuf;
use std::sync::Arc;

use glossa_core::{Error, GlossaConfig, Population, Result, StopwordPaths};
use glossa_morph::create_reducer;
use glossa_reconcile::{Corpus, Reconciler, Reconciliation};
use glossa_text::{load_word_list, Preprocessor, RuleBook, StopwordSet};
use glossa_topics::{bigram_matrix, unigram_matrix, TopicCleaner, TopicTaxonomy};
use tracing::{info, warn};

use crate::table::{write_json, Table};

/// Everything a normalize run produced, kept for the topics flow.
pub struct NormalizeOutcome {
    pub rules: RuleBook,
    pub stopwords: StopwordSet,
    pub reconciliation: Reconciliation,
    pub written: Vec<PathBuf>,
}

fn read_list(path: &Option<PathBuf>) -> Result<Vec<String>> {
    match path {
        Some(p) => load_word_list(p),
        None => Ok(Vec::new()),
    }
}

fn load_stopwords(paths: &StopwordPaths) -> Result<StopwordSet> {
    let base = read_list(&paths.base)?;
    let additional = read_list(&paths.additional)?;
    let keep = read_list(&paths.keep)?;
    Ok(StopwordSet::from_lists(&base, &additional, &keep))
}

/// Preprocess (optionally) and reconcile both tables, then write the
/// normalized tables, per-population dictionaries and the run report.
pub fn run_normalize(config: &GlossaConfig) -> Result<NormalizeOutcome> {
    config.validate()?;
    let mode = config.mode()?;

    let rules = RuleBook::from_paths(&config.rules)?;
    let stopwords = load_stopwords(&config.stopwords)?;
    let preprocessor = config
        .preprocess
        .then(|| Preprocessor::new(Arc::clone(&rules.abbreviations), stopwords.clone()));

    let mut tables = Vec::with_capacity(2);
    let mut corpora = Vec::with_capacity(2);
    for population in Population::all() {
        let path = config.inputs.for_population(*population);
        let table = Table::load(path)?;
        let texts = table.texts(&config.text_column)?;
        info!(
            population = %population,
            rows = table.len(),
            path = %path.display(),
            "Loaded table"
        );
        let documents = match &preprocessor {
            Some(p) => p.clean_all(&texts),
            None => texts,
        };
        corpora.push(Corpus::new(*population, documents));
        tables.push(table);
    }

    let reducer = create_reducer(mode, config.lemma_lexicon.as_deref())?;
    let reconciler = Reconciler::new(rules.clone(), reducer).with_parallel(config.parallel);
    let reconciliation = reconciler.reconcile(&corpora[0], &corpora[1])?;

    std::fs::create_dir_all(&config.output_dir)?;
    let mut written = Vec::new();
    for (population, table) in Population::all().iter().zip(&tables) {
        let reconciled = reconciliation.get(*population);

        let out = config.output_dir.join(format!("{}.json", population));
        table
            .with_column(&config.text_column, &reconciled.documents)?
            .save(&out)?;
        written.push(out);

        let dict = config
            .output_dir
            .join(format!("stem_dictionary.{}.json", population));
        write_json(&dict, &reconciled.dictionary)?;
        written.push(dict);
    }

    let report = config.output_dir.join("report.json");
    write_json(&report, &reconciliation.report)?;
    written.push(report);

    info!(
        outputs = written.len(),
        dir = %config.output_dir.display(),
        "Normalization complete"
    );

    Ok(NormalizeOutcome {
        rules,
        stopwords,
        reconciliation,
        written,
    })
}

/// Normalize, then clean for topics and write unigram and bigram
/// presence matrices per population.
pub fn run_topics(config: &GlossaConfig) -> Result<Vec<PathBuf>> {
    let taxonomy_path = config.taxonomy.as_deref().ok_or_else(|| {
        Error::Config("topics requires a taxonomy file".into())
    })?;
    let taxonomy = TopicTaxonomy::load(taxonomy_path)?;
    if taxonomy.is_empty() {
        warn!(path = %taxonomy_path.display(), "Taxonomy has no keywords");
    }

    let mut outcome = run_normalize(config)?;
    let extra = read_list(&config.stopwords.topic_additional)?;
    let cleaner = TopicCleaner::new(
        Arc::clone(&outcome.rules.topic),
        outcome.stopwords.with_additional(&extra),
    );

    for population in Population::all() {
        let cleaned = cleaner.clean_all(&outcome.reconciliation.get(*population).documents);
        let unigrams = unigram_matrix(&cleaned, &taxonomy);
        let bigrams = bigram_matrix(&cleaned, &taxonomy);
        info!(
            population = %population,
            documents = cleaned.len(),
            unigram_totals = ?unigrams.totals(),
            bigram_totals = ?bigrams.totals(),
            "Topic matrices built"
        );

        for (kind, matrix) in [("unigram", &unigrams), ("bigram", &bigrams)] {
            let out = config
                .output_dir
                .join(format!("topics.{}.{}.json", population, kind));
            write_json(&out, matrix)?;
            outcome.written.push(out);
        }
    }

    Ok(outcome.written)
}

/// Rule table names, sizes and digests, one line each.
pub fn describe_rules(config: Option<&GlossaConfig>) -> Result<Vec<String>> {
    let rules = match config {
        Some(c) => RuleBook::from_paths(&c.rules)?,
        None => RuleBook::builtin(),
    };
    Ok(rules
        .all()
        .iter()
        .map(|set| {
            format!(
                "{:<14} {:>4} rules  {}",
                set.name(),
                set.len(),
                set.digest()
            )
        })
        .collect())
}

/// Config path from the command line, falling back to `glossa.json`.
pub fn config_path(arg: Option<&String>) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("glossa.json"))
}
