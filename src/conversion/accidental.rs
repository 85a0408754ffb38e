//! Accidental glyphs to ABC prefixes
//!
//! In ABC an accidental precedes the note (`^c`, `_e`, `=f`); IME users
//! type it after the note (`c♯`). Only lowercase letters a-g are moved,
//! which is what the phonetic phase produces.

use lazy_static::lazy_static;
use regex::Regex;

use super::rules::RewriteRule;

pub const ACCIDENTAL_RULES: &[RewriteRule] = &[
    RewriteRule::new("♯", "^"),
    RewriteRule::new("＃", "^"),
    RewriteRule::new("#", "^"),
    RewriteRule::new("♭", "_"),
    RewriteRule::new("♮", "="),
];

lazy_static! {
    /// `([a-g])<glyph>` for each rule, in rule order
    static ref ACCIDENTAL_PATTERNS: Vec<(Regex, &'static str)> = ACCIDENTAL_RULES
        .iter()
        .map(|rule| {
            let pattern = format!("([a-g]){}", regex::escape(rule.pattern));
            let regex = Regex::new(&pattern).expect("accidental pattern is a valid regex");
            (regex, rule.replacement)
        })
        .collect();
}

/// Move every `letter + glyph` pair to `prefix + letter`
pub fn convert_accidentals(input: &str) -> String {
    ACCIDENTAL_PATTERNS
        .iter()
        .fold(input.to_string(), |text, (regex, prefix)| {
            if !regex.is_match(&text) {
                return text;
            }
            regex
                .replace_all(&text, |caps: &regex::Captures| format!("{}{}", prefix, &caps[1]))
                .into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_glyph() {
        assert_eq!(convert_accidentals("c♯"), "^c");
        assert_eq!(convert_accidentals("c＃"), "^c");
        assert_eq!(convert_accidentals("c#"), "^c");
        assert_eq!(convert_accidentals("e♭"), "_e");
        assert_eq!(convert_accidentals("f♮"), "=f");
    }

    #[test]
    fn test_multiple_matches_in_one_string() {
        assert_eq!(convert_accidentals("c#d e♭f#"), "^cd _e^f");
    }

    #[test]
    fn test_uppercase_and_out_of_range_letters_are_ignored() {
        assert_eq!(convert_accidentals("C#"), "C#");
        assert_eq!(convert_accidentals("h#"), "h#");
    }

    #[test]
    fn test_glyph_without_letter() {
        assert_eq!(convert_accidentals("#♭"), "#♭");
    }
}
