//! Beider-Morse Phonetic Matching, generic name type, approximate rules.
//!
//! Ambiguous letter groups branch into every plausible pronunciation, so the
//! result is a set of phonetic forms. Forms use the BMPM alphabet, where `S`
//! is "sh", `Z` is "zh" and `x` is the "ch" in "Bach". The rules are the
//! language-independent (`any`) set; forms are joined with a single space.

use once_cell::sync::Lazy;
use rphonetic::{BeiderMorse, BeiderMorseBuilder, ConfigFiles, Encoder, NameType, RuleType};

static RULES: Lazy<ConfigFiles> = Lazy::new(ConfigFiles::default);

static ENCODER: Lazy<BeiderMorse<'static>> = Lazy::new(|| {
    BeiderMorseBuilder::new(&RULES)
        .name_type(NameType::Generic)
        .rule_type(RuleType::Approx)
        .build()
});

/// Approximate Beider-Morse forms, space-separated.
pub fn beider_morse(s: &str) -> String {
    let word: String = s.chars().filter(|c| c.is_alphabetic()).collect();
    if word.is_empty() {
        return String::new();
    }

    ENCODER.encode(&word).replace('|', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beider_morse_branches() {
        let encoded = beider_morse("angelo");
        let forms: Vec<&str> = encoded.split(' ').collect();
        assert!(forms.len() > 1, "got {}", encoded);
        for expected in ["agilo", "angilo", "anilo", "anzilo", "ogilo"] {
            assert!(forms.contains(&expected), "{} missing from {}", expected, encoded);
        }
    }

    #[test]
    fn test_beider_morse_is_case_insensitive() {
        assert_eq!(beider_morse("Angelo"), beider_morse("angelo"));
    }

    #[test]
    fn test_beider_morse_empty() {
        assert_eq!(beider_morse(""), "");
        assert_eq!(beider_morse("42"), "");
    }
}
