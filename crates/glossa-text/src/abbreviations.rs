//! Abbreviation tokens.
//!
//! The abbreviation battery folds multi-word names into short tokens. Those
//! tokens are fixed: the morphological reducer passes them through untouched.

use crate::rewrite::RuleSet;

/// Tokens produced by the abbreviation battery: non-governmental
/// organisations, USA, Golden Dawn, UAE, European Union, "one percent".
pub const ABBREVIATIONS: [&str; 6] = ["μκο", "ηπα", "χα", "ηαε", "εε", "1%"];

pub fn is_abbreviation(token: &str) -> bool {
    ABBREVIATIONS.contains(&token)
}

/// Fold every multi-word name in `text` to its abbreviation.
pub fn abbreviate(text: &str, rules: &RuleSet) -> String {
    rules.rewriter().rewrite(text)
}
