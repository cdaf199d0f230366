//! Run configuration.
//!
//! One `GlossaConfig` is loaded at startup and handed by reference to every
//! stage. Nothing in the libraries reads configuration from ambient state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{Error, Population, ReductionMode, Result};

/// Locations of the two population tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputPaths {
    pub citizens: PathBuf,
    pub councilors: PathBuf,
}

impl InputPaths {
    pub fn for_population(&self, population: Population) -> &Path {
        match population {
            Population::Citizens => &self.citizens,
            Population::Councilors => &self.councilors,
        }
    }
}

/// Optional overrides for the built-in rule tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulePaths {
    #[serde(default)]
    pub surface: Option<PathBuf>,
    #[serde(default)]
    pub reconcile: Option<PathBuf>,
    #[serde(default)]
    pub abbreviations: Option<PathBuf>,
    #[serde(default)]
    pub topic: Option<PathBuf>,
}

/// Word-list files feeding the stopword sets (one word per line).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordPaths {
    #[serde(default)]
    pub base: Option<PathBuf>,
    #[serde(default)]
    pub additional: Option<PathBuf>,
    /// Words removed again from the base list because they carry meaning.
    #[serde(default)]
    pub keep: Option<PathBuf>,
    #[serde(default)]
    pub topic_additional: Option<PathBuf>,
}

/// Top-level Glossa configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaConfig {
    /// `"stem"` or `"lemma"`. Kept as a string so a bad value surfaces as
    /// an invalid-argument error at validation time instead of a parse error.
    #[serde(default = "default_normalization")]
    pub normalization_type: String,
    /// Column holding the free-text response in both tables.
    #[serde(default = "default_text_column")]
    pub text_column: String,
    pub inputs: InputPaths,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub rules: RulePaths,
    #[serde(default)]
    pub stopwords: StopwordPaths,
    /// JSON object of `form -> lemma`; required in lemma mode.
    #[serde(default)]
    pub lemma_lexicon: Option<PathBuf>,
    /// JSON object of `topic name -> [keywords]`.
    #[serde(default)]
    pub taxonomy: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub preprocess: bool,
    /// Reconcile the two populations concurrently.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_normalization() -> String {
    "stem".to_string()
}

fn default_text_column() -> String {
    "cleaned".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_true() -> bool {
    true
}

impl GlossaConfig {
    /// Minimal configuration over two input tables, everything else default.
    pub fn new(citizens: impl Into<PathBuf>, councilors: impl Into<PathBuf>) -> Self {
        Self {
            normalization_type: default_normalization(),
            text_column: default_text_column(),
            inputs: InputPaths {
                citizens: citizens.into(),
                councilors: councilors.into(),
            },
            output_dir: default_output_dir(),
            rules: RulePaths::default(),
            stopwords: StopwordPaths::default(),
            lemma_lexicon: None,
            taxonomy: None,
            preprocess: true,
            parallel: true,
        }
    }

    /// Load a JSON configuration file. Relative paths inside the file are
    /// resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: GlossaConfig = serde_json::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Load from file, then apply environment overrides.
    pub fn from_env(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;

        if let Ok(mode) = std::env::var("GLOSSA_NORMALIZATION") {
            info!(mode = %mode, "Normalization type overridden from environment");
            config.normalization_type = mode;
        }
        if let Ok(dir) = std::env::var("GLOSSA_OUTPUT_DIR") {
            info!(dir = %dir, "Output directory overridden from environment");
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Parsed reduction mode.
    pub fn mode(&self) -> Result<ReductionMode> {
        self.normalization_type.parse()
    }

    /// Check the configuration is usable before any corpus is touched.
    pub fn validate(&self) -> Result<()> {
        let mode = self.mode()?;

        if self.text_column.trim().is_empty() {
            return Err(Error::Config("text_column must not be empty".into()));
        }
        if mode == ReductionMode::Lemma && self.lemma_lexicon.is_none() {
            return Err(Error::Config(
                "lemma mode requires a lemma_lexicon file".into(),
            ));
        }
        for population in Population::all() {
            let input = self.inputs.for_population(*population);
            if input.as_os_str().is_empty() {
                return Err(Error::Config(format!(
                    "missing input table for {}",
                    population
                )));
            }
        }

        Ok(())
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let fix = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        let fix_opt = |p: &mut Option<PathBuf>| {
            if let Some(inner) = p.as_mut() {
                if inner.is_relative() {
                    *inner = base.join(&*inner);
                }
            }
        };

        fix(&mut self.inputs.citizens);
        fix(&mut self.inputs.councilors);
        fix(&mut self.output_dir);
        fix_opt(&mut self.rules.surface);
        fix_opt(&mut self.rules.reconcile);
        fix_opt(&mut self.rules.abbreviations);
        fix_opt(&mut self.rules.topic);
        fix_opt(&mut self.stopwords.base);
        fix_opt(&mut self.stopwords.additional);
        fix_opt(&mut self.stopwords.keep);
        fix_opt(&mut self.stopwords.topic_additional);
        fix_opt(&mut self.lemma_lexicon);
        fix_opt(&mut self.taxonomy);
    }
}
