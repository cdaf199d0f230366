//! Topic-presence matrices.
//!
//! One row per response, one column per topic. The unigram matrix marks a
//! topic when a whitespace token is exactly one of its keywords; the bigram
//! matrix marks it when any keyword, single or multi-word, occurs anywhere in
//! the text.

use rayon::prelude::*;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::taxonomy::{Topic, TopicTaxonomy};

/// Which of the nine topics one response refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicPresence([bool; Topic::COUNT]);

impl TopicPresence {
    pub fn mark(&mut self, topic: Topic) {
        self.0[topic.index()] = true;
    }

    pub fn has(&self, topic: Topic) -> bool {
        self.0[topic.index()]
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|p| **p).count()
    }

    /// Columns as 0/1.
    pub fn as_row(&self) -> [u8; Topic::COUNT] {
        self.0.map(u8::from)
    }
}

/// Serializes as `{ "topic name": 0 | 1, ... }` in column order.
impl Serialize for TopicPresence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Topic::COUNT))?;
        for topic in Topic::all() {
            map.serialize_entry(topic.name(), &u8::from(self.has(*topic)))?;
        }
        map.end()
    }
}

/// Rows of topic presence, one per response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicMatrix {
    pub rows: Vec<TopicPresence>,
}

impl TopicMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of responses referring to each topic.
    pub fn totals(&self) -> [usize; Topic::COUNT] {
        let mut totals = [0; Topic::COUNT];
        for row in &self.rows {
            for topic in Topic::all() {
                if row.has(*topic) {
                    totals[topic.index()] += 1;
                }
            }
        }
        totals
    }
}

pub fn unigram_matrix<S: AsRef<str> + Sync>(texts: &[S], taxonomy: &TopicTaxonomy) -> TopicMatrix {
    let rows: Vec<TopicPresence> = texts
        .par_iter()
        .map(|text| {
            let mut presence = TopicPresence::default();
            for token in text.as_ref().split_whitespace() {
                if let Some(topic) = taxonomy.topic_of(token) {
                    presence.mark(topic);
                }
            }
            presence
        })
        .collect();

    let matrix = TopicMatrix { rows };
    debug!(rows = matrix.len(), totals = ?matrix.totals(), "Built unigram topic matrix");
    matrix
}

pub fn bigram_matrix<S: AsRef<str> + Sync>(texts: &[S], taxonomy: &TopicTaxonomy) -> TopicMatrix {
    let keywords = taxonomy.keywords();
    let rows: Vec<TopicPresence> = texts
        .par_iter()
        .map(|text| {
            let text = text.as_ref();
            let mut presence = TopicPresence::default();
            for (keyword, topic) in &keywords {
                if !presence.has(*topic) && text.contains(keyword) {
                    presence.mark(*topic);
                }
            }
            presence
        })
        .collect();

    let matrix = TopicMatrix { rows };
    debug!(rows = matrix.len(), totals = ?matrix.totals(), "Built bigram topic matrix");
    matrix
}
