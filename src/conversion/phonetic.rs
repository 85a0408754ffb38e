//! Solfège syllables to ABC note letters
//!
//! The katakana syllables of the fixed-do scale map onto the seven
//! lowercase ABC pitch names.

use super::rules::{any_pattern_in, RewriteRule};

pub const PHONETIC_RULES: &[RewriteRule] = &[
    RewriteRule::new("ド", "c"),
    RewriteRule::new("レ", "d"),
    RewriteRule::new("ミ", "e"),
    RewriteRule::new("ファ", "f"),
    RewriteRule::new("ソ", "g"),
    RewriteRule::new("ラ", "a"),
    RewriteRule::new("シ", "b"),
];

/// Replace every syllable occurrence, one pass per rule
pub fn convert_phonetic(input: &str) -> String {
    if !any_pattern_in(PHONETIC_RULES, input) {
        return input.to_string();
    }

    PHONETIC_RULES
        .iter()
        .fold(input.to_string(), |text, rule| text.replace(rule.pattern, rule.replacement))
}
