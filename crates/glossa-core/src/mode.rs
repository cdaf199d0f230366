//! Morphological reduction mode selector.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which reduction the morphological reducer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionMode {
    /// Suffix-stripping stem.
    Stem,
    /// Dictionary lemma.
    Lemma,
}

impl ReductionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Lemma => "lemma",
        }
    }
}

impl std::fmt::Display for ReductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReductionMode {
    type Err = Error;

    /// Unknown selectors are a caller error, never silently defaulted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stem" => Ok(Self::Stem),
            "lemma" => Ok(Self::Lemma),
            other => Err(Error::InvalidArgument(format!(
                "normalization type must be 'stem' or 'lemma', got '{}'",
                other
            ))),
        }
    }
}
