//! Built-in rule tables and the per-run rule book.

use std::path::Path;
use std::sync::Arc;

use glossa_core::{RulePaths, Result};
use once_cell::sync::Lazy;
use tracing::info;

use crate::rewrite::RuleSet;

const SURFACE_JSON: &str = include_str!("../rules/surface.json");
const RECONCILE_JSON: &str = include_str!("../rules/reconcile.json");
const ABBREVIATIONS_JSON: &str = include_str!("../rules/abbreviations.json");
const TOPIC_JSON: &str = include_str!("../rules/topic.json");

fn builtin(json: &str) -> Arc<RuleSet> {
    // Embedded tables are covered by the tests below.
    Arc::new(RuleSet::from_json(json).expect("built-in rule table must compile"))
}

/// Pre-stemming battery shared by both populations.
pub static SURFACE: Lazy<Arc<RuleSet>> = Lazy::new(|| builtin(SURFACE_JSON));
/// Final cross-cutting battery applied after canonicalization.
pub static RECONCILE: Lazy<Arc<RuleSet>> = Lazy::new(|| builtin(RECONCILE_JSON));
/// Abbreviation detection.
pub static ABBREVIATIONS: Lazy<Arc<RuleSet>> = Lazy::new(|| builtin(ABBREVIATIONS_JSON));
/// Topic-text cleanup battery.
pub static TOPIC: Lazy<Arc<RuleSet>> = Lazy::new(|| builtin(TOPIC_JSON));

/// The four rule sets one run works with.
#[derive(Debug, Clone)]
pub struct RuleBook {
    pub surface: Arc<RuleSet>,
    pub reconcile: Arc<RuleSet>,
    pub abbreviations: Arc<RuleSet>,
    pub topic: Arc<RuleSet>,
}

impl RuleBook {
    pub fn builtin() -> Self {
        Self {
            surface: Arc::clone(&SURFACE),
            reconcile: Arc::clone(&RECONCILE),
            abbreviations: Arc::clone(&ABBREVIATIONS),
            topic: Arc::clone(&TOPIC),
        }
    }

    /// Built-in tables, each replaced by its override file when configured.
    pub fn from_paths(paths: &RulePaths) -> Result<Self> {
        let pick = |path: &Option<std::path::PathBuf>, default: &Lazy<Arc<RuleSet>>| {
            path.as_deref()
                .map(load_override)
                .unwrap_or_else(|| Ok(Arc::clone(default)))
        };

        Ok(Self {
            surface: pick(&paths.surface, &SURFACE)?,
            reconcile: pick(&paths.reconcile, &RECONCILE)?,
            abbreviations: pick(&paths.abbreviations, &ABBREVIATIONS)?,
            topic: pick(&paths.topic, &TOPIC)?,
        })
    }

    pub fn all(&self) -> [&RuleSet; 4] {
        [
            self.surface.as_ref(),
            self.reconcile.as_ref(),
            self.abbreviations.as_ref(),
            self.topic.as_ref(),
        ]
    }
}

fn load_override(path: &Path) -> Result<Arc<RuleSet>> {
    let rules = RuleSet::load(path)?;
    info!(set = rules.name(), path = %path.display(), rules = rules.len(), "Loaded rule table override");
    Ok(Arc::new(rules))
}
