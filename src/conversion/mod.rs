//! Notation conversion for IME input
//!
//! Input typed with solfège syllables and accidental glyphs is rewritten
//! into ABC notation in two ordered phases:
//!
//! 1. `phonetic`: syllables become lowercase note letters (`ド` → `c`)
//! 2. `accidental`: a glyph after a note letter moves in front of it and
//!    becomes its ABC prefix (`c♯` → `^c`)
//!
//! The accidental phase only matches `letter + glyph`, so it has to see the
//! output of the phonetic phase: `ド♯` → `c♯` → `^c`.

pub mod rules;
pub mod phonetic;
pub mod accidental;

pub use rules::RewriteRule;
pub use phonetic::{convert_phonetic, PHONETIC_RULES};
pub use accidental::{convert_accidentals, ACCIDENTAL_RULES};

/// Convert IME input to ABC notation
///
/// Returns `None` when neither phase changed anything, meaning the input
/// should be searched verbatim rather than offered as a candidate.
pub fn convert_to_abc(input: &str) -> Option<String> {
    let phonetic = convert_phonetic(input);
    let converted = convert_accidentals(&phonetic);

    if converted == input {
        None
    } else {
        log::debug!("convert {:?} -> {:?}", input, converted);
        Some(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phonetic_only() {
        assert_eq!(convert_to_abc("ドレミ"), Some("cde".to_string()));
    }

    #[test]
    fn test_accidental_only() {
        assert_eq!(convert_to_abc("c♯"), Some("^c".to_string()));
    }

    #[test]
    fn test_phonetic_then_accidental() {
        assert_eq!(convert_to_abc("ド♯"), Some("^c".to_string()));
        assert_eq!(convert_to_abc("ミ♭レ"), Some("_ed".to_string()));
    }

    #[test]
    fn test_plain_input_is_not_converted() {
        assert_eq!(convert_to_abc("twinkle"), None);
        assert_eq!(convert_to_abc("CDEF"), None);
        assert_eq!(convert_to_abc(""), None);
    }

    #[test]
    fn test_lone_glyph_is_not_converted() {
        assert_eq!(convert_to_abc("#"), None);
        assert_eq!(convert_to_abc("C♯"), None);
    }

    #[test]
    fn test_mixed_text_converts_only_syllables() {
        assert_eq!(convert_to_abc("きらきらド"), Some("きらきらc".to_string()));
    }
}
