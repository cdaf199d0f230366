//! Greek accent folding.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

fn is_greek(c: char) -> bool {
    matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}')
}

/// Lowercase `text` and strip every diacritic (tonos, dialytika and their
/// combinations) from Greek letters, leaving the base letters. Letters of
/// other scripts keep their marks.
///
/// Total and idempotent: `fold_accents(&fold_accents(s)) == fold_accents(s)`.
pub fn fold_accents(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_greek = false;

    for c in text.to_lowercase().chars() {
        if is_combining_mark(c) {
            // already-decomposed input: a mark following a Greek letter
            if !after_greek {
                out.push(c);
            }
            continue;
        }
        after_greek = is_greek(c);
        if after_greek {
            decompose_canonical(c, |d| {
                if !is_combining_mark(d) {
                    out.push(d);
                }
            });
        } else {
            out.push(c);
        }
    }

    out
}
