//! Respondent populations.

use serde::{Deserialize, Serialize};

/// The two survey populations. Each one is reconciled against its own
/// stem dictionary; state never crosses between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Population {
    Citizens,
    Councilors,
}

impl Population {
    pub fn all() -> &'static [Population] {
        &[Self::Citizens, Self::Councilors]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizens => "citizens",
            Self::Councilors => "councilors",
        }
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Population {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "citizens" => Ok(Self::Citizens),
            "councilors" => Ok(Self::Councilors),
            other => Err(crate::Error::InvalidArgument(format!(
                "unknown population '{}', expected citizens or councilors",
                other
            ))),
        }
    }
}
