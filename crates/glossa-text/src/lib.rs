//! Glossa Text — accent folding, Latin-to-Greek normalization, the ordered
//! surface-rewrite rule engine and its built-in tables, abbreviations,
//! stopwords and raw-response preprocessing.

pub mod abbreviations;
pub mod accents;
pub mod normalize;
pub mod preprocess;
pub mod rewrite;
pub mod rules;
pub mod stopwords;

pub use abbreviations::{abbreviate, is_abbreviation, ABBREVIATIONS};
pub use accents::fold_accents;
pub use normalize::normalize_text;
pub use preprocess::Preprocessor;
pub use rewrite::{RuleScope, RuleSet, RuleSetSpec, RuleSpec, SurfaceRewriter};
pub use rules::RuleBook;
pub use stopwords::{load_word_list, StopwordSet};

/// Collapse whitespace runs to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
