//! Raw-response text normalizer.
//!
//! Lowercases and folds accents, transliterates Latin letters typed in place
//! of Greek ones, blanks out punctuation (the percent sign survives) and
//! removes digits that are not part of a percentage.

use crate::{collapse_whitespace, fold_accents};

/// Punctuation replaced by a space. `%` is deliberately absent.
const PUNCTUATION: &str = "!\"#$&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Greek counterpart of a lowercase Latin letter. `c`, `j`, `q` and `x`
/// have none and are left as typed.
fn latin_to_greek(c: char) -> Option<&'static str> {
    let greek = match c {
        'a' => "α",
        'b' => "μπ",
        'd' => "δ",
        'e' => "ε",
        'f' => "φ",
        'g' => "γ",
        'h' => "χ",
        'i' => "ι",
        'k' => "κ",
        'l' => "λ",
        'm' => "μ",
        'n' => "ν",
        'o' => "ο",
        'p' => "π",
        'r' => "ρ",
        's' => "σ",
        't' => "τ",
        'u' => "υ",
        'v' => "β",
        'w' => "ω",
        'y' => "υ",
        'z' => "ζ",
        _ => return None,
    };
    Some(greek)
}

/// Normalize one raw response. Whitespace in the result is collapsed and
/// trimmed; an empty or punctuation-only input yields an empty string.
pub fn normalize_text(text: &str) -> String {
    let folded = fold_accents(text);

    let mut mapped = String::with_capacity(folded.len());
    for c in folded.chars() {
        if let Some(greek) = latin_to_greek(c) {
            mapped.push_str(greek);
        } else if PUNCTUATION.contains(c) {
            mapped.push(' ');
        } else {
            mapped.push(c);
        }
    }

    collapse_whitespace(&remove_stray_digits(&mapped))
}

/// Replace every ASCII digit with a space unless its digit run is followed
/// by `%`, optionally after one whitespace character.
fn remove_stray_digits(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }

        let percent_follows = match chars.get(i) {
            Some('%') => true,
            Some(c) if c.is_whitespace() => chars.get(i + 1) == Some(&'%'),
            _ => false,
        };

        if percent_follows {
            out.extend(&chars[start..i]);
        } else {
            out.extend(std::iter::repeat(' ').take(i - start));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_and_punctuation() {
        assert_eq!(
            normalize_text("Η Ελλάδα έχει 10% μετανάστες!"),
            "η ελλαδα εχει 10% μεταναστες"
        );
        assert_eq!(normalize_text("ναι, αλλά... όχι;"), "ναι αλλα οχι");
    }

    #[test]
    fn test_latin_letters_transliterated() {
        assert_eq!(normalize_text("siziτηση"), "σιζιτηση");
        assert_eq!(normalize_text("Bar"), "μπαρ");
        // no Greek counterpart
        assert_eq!(normalize_text("xq"), "xq");
    }

    #[test]
    fn test_digits_removed_unless_percentage() {
        assert_eq!(normalize_text("το 2020 ηρθαν"), "το ηρθαν");
        assert_eq!(normalize_text("περιπου 15 % απο αυτους"), "περιπου 15 % απο αυτους");
        assert_eq!(normalize_text("12 3%"), "3%");
    }

    #[test]
    fn test_underscore_is_punctuation() {
        assert_eq!(normalize_text("_χωρανε"), "χωρανε");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("  ?!  "), "");
    }
}
