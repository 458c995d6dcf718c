//! Daitch-Mokotoff Soundex.
//!
//! Letter groups with more than one possible pronunciation branch into
//! several six-digit codes. All branches are kept, sorted and joined with a
//! comma, so one stored value covers every reading of the name.

use once_cell::sync::Lazy;
use rphonetic::DaitchMokotoffSoundex;

static ENCODER: Lazy<DaitchMokotoffSoundex> = Lazy::new(DaitchMokotoffSoundex::default);

/// Daitch-Mokotoff Soundex codes, sorted and comma-separated.
pub fn daitch_mokotoff(s: &str) -> String {
    let word: String = s.chars().filter(|c| c.is_alphabetic()).collect();

    let mut codes = ENCODER.inner_soundex(&word, true);
    codes.sort();
    codes.dedup();
    codes.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daitch_mokotoff_single_branch() {
        assert_eq!(daitch_mokotoff("Mintz"), "664000");
        assert_eq!(daitch_mokotoff("Topf"), "370000");
    }

    #[test]
    fn test_daitch_mokotoff_alternates() {
        assert_eq!(daitch_mokotoff("peters"), "734000,739400");
        assert_eq!(daitch_mokotoff("AUERBACH"), "097400,097500");
    }

    #[test]
    fn test_daitch_mokotoff_is_sorted() {
        let codes = daitch_mokotoff("Rosochowaciec");
        let parts: Vec<&str> = codes.split(',').collect();
        let mut sorted = parts.clone();
        sorted.sort();
        assert_eq!(parts, sorted);
        assert_eq!(parts.len(), 8);
        assert!(parts.iter().all(|c| c.len() == 6));
    }

    #[test]
    fn test_daitch_mokotoff_empty() {
        assert_eq!(daitch_mokotoff(""), "000000");
        assert_eq!(daitch_mokotoff("42"), "000000");
    }
}
