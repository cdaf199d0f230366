//! Topic taxonomy: keyword → topic.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use glossa_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The nine discourse topics, in topic-matrix column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topic {
    IdentityCharacteristics,
    LegalRationale,
    CulturalSocialConcerns,
    PublicOrderConcerns,
    EconomicConcerns,
    HumanitarianConcerns,
    MobilityConcerns,
    TrustInAuthorities,
    Fairness,
}

impl Topic {
    pub const COUNT: usize = 9;

    pub fn all() -> &'static [Topic] {
        &[
            Self::IdentityCharacteristics,
            Self::LegalRationale,
            Self::CulturalSocialConcerns,
            Self::PublicOrderConcerns,
            Self::EconomicConcerns,
            Self::HumanitarianConcerns,
            Self::MobilityConcerns,
            Self::TrustInAuthorities,
            Self::Fairness,
        ]
    }

    /// Matrix column.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::IdentityCharacteristics => "Identity Characteristics",
            Self::LegalRationale => "Legal rationale",
            Self::CulturalSocialConcerns => "Cultural/Social concerns",
            Self::PublicOrderConcerns => "Public order concerns",
            Self::EconomicConcerns => "Economic concerns",
            Self::HumanitarianConcerns => "Humanitarian concerns",
            Self::MobilityConcerns => "Mobility concerns",
            Self::TrustInAuthorities => "Trust in authorities",
            Self::Fairness => "Fairness",
        }
    }

    /// Look a topic up by display name, ignoring case and spacing
    /// (`"Cultural/ Social  concerns"` matches).
    pub fn from_name(name: &str) -> Option<Topic> {
        let wanted = squash(name);
        Self::all().iter().copied().find(|t| squash(t.name()) == wanted)
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Placeholder that pads short keyword columns.
const PLACEHOLDER: &str = "nothing";

/// Keyword → topic lookup.
#[derive(Debug, Clone, Default)]
pub struct TopicTaxonomy {
    keywords: HashMap<String, Topic>,
}

impl TopicTaxonomy {
    /// Build from per-topic keyword lists. Lists are applied in topic order,
    /// so a keyword listed under two topics belongs to the later one.
    /// Underscores become spaces and the `nothing` placeholder is skipped.
    pub fn from_lists(lists: &BTreeMap<Topic, Vec<String>>) -> Self {
        let mut keywords = HashMap::new();
        for (topic, terms) in lists {
            for term in terms {
                let term = term.trim();
                if term.is_empty() || term == PLACEHOLDER {
                    continue;
                }
                let keyword = term.replace('_', " ");
                if let Some(previous) = keywords.insert(keyword.clone(), *topic) {
                    if previous != *topic {
                        debug!(%keyword, from = %previous, to = %topic, "Keyword reassigned");
                    }
                }
            }
        }
        Self { keywords }
    }

    /// Parse `{ "topic name": ["keyword", ...], ... }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut lists = BTreeMap::new();
        for (name, terms) in raw {
            let topic = Topic::from_name(&name)
                .ok_or_else(|| Error::Config(format!("unknown topic '{}' in taxonomy", name)))?;
            lists.insert(topic, terms);
        }
        for topic in Topic::all() {
            if !lists.contains_key(topic) {
                warn!(%topic, "Taxonomy has no keywords for topic");
            }
        }
        Ok(Self::from_lists(&lists))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn topic_of(&self, keyword: &str) -> Option<Topic> {
        self.keywords.get(keyword).copied()
    }

    /// All keywords with their topics, sorted by keyword.
    pub fn keywords(&self) -> Vec<(&str, Topic)> {
        let mut all: Vec<_> = self
            .keywords
            .iter()
            .map(|(k, t)| (k.as_str(), *t))
            .collect();
        all.sort();
        all
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
