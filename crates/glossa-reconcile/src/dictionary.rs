//! Stem dictionary: stem key → sorted equivalence class.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One corpus's equivalence classes. Every surface form belongs to exactly
/// one class; members of each class are sorted and unique, so the first
/// member is a deterministic canonical form.
///
/// Serializes as a plain `{ "stem key": ["form", ...] }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct StemDictionary {
    classes: BTreeMap<String, Vec<String>>,
    /// surface form → stem key
    index: HashMap<String, String>,
}

impl StemDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `surface` to the class of `key`. A surface form already filed
    /// under another key stays where it is.
    pub fn insert(&mut self, key: &str, surface: &str) -> bool {
        if self.index.contains_key(surface) {
            return false;
        }
        let members = self.classes.entry(key.to_string()).or_default();
        let pos = members.binary_search_by(|m| m.as_str().cmp(surface)).unwrap_or_else(|p| p);
        members.insert(pos, surface.to_string());
        self.index.insert(surface.to_string(), key.to_string());
        true
    }

    /// Members of the class indexed by `key`.
    pub fn class(&self, key: &str) -> Option<&[String]> {
        self.classes.get(key).map(Vec::as_slice)
    }

    /// The canonical form of the class indexed by `key`: its first member.
    pub fn canonical(&self, key: &str) -> Option<&str> {
        self.classes
            .get(key)
            .and_then(|members| members.first())
            .map(String::as_str)
    }

    /// Stem key a surface form was filed under.
    pub fn key_of(&self, surface: &str) -> Option<&str> {
        self.index.get(surface).map(String::as_str)
    }

    pub fn contains_surface(&self, surface: &str) -> bool {
        self.index.contains_key(surface)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of distinct surface forms across all classes.
    pub fn surface_count(&self) -> usize {
        self.index.len()
    }

    pub fn singleton_count(&self) -> usize {
        self.classes.values().filter(|m| m.len() == 1).count()
    }

    /// Classes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn into_classes(self) -> BTreeMap<String, Vec<String>> {
        self.classes
    }
}

impl From<BTreeMap<String, Vec<String>>> for StemDictionary {
    fn from(classes: BTreeMap<String, Vec<String>>) -> Self {
        let mut dictionary = Self::new();
        for (key, members) in &classes {
            for surface in members {
                dictionary.insert(key, surface);
            }
        }
        dictionary
    }
}

impl From<StemDictionary> for BTreeMap<String, Vec<String>> {
    fn from(dictionary: StemDictionary) -> Self {
        dictionary.classes
    }
}
