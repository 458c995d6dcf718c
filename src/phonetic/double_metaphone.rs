//! Double Metaphone.
//!
//! Produces a primary and an alternate key so that names with more than one
//! plausible pronunciation ("Schmidt", "Jose", "Thomas") can match either way.
//! The registry exposes the primary key; [`double_metaphone`] returns both.

use once_cell::sync::Lazy;
use rphonetic::DoubleMetaphone;

/// Keys are not truncated, so long node names keep their full code.
static ENCODER: Lazy<DoubleMetaphone> = Lazy::new(|| DoubleMetaphone::new(None));

/// Double Metaphone - returns (primary, alternate) codes
pub fn double_metaphone(s: &str) -> (String, String) {
    let word: String = s.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if word.is_empty() {
        return (String::new(), String::new());
    }

    let result = ENCODER.double_metaphone(&word);
    (result.primary(), result.alternate())
}

/// Primary Double Metaphone key.
pub fn double_metaphone_primary(s: &str) -> String {
    double_metaphone(s).0
}
