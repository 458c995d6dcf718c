use super::metaphone::metaphone;
use super::soundex::soundex;

/// MetaSoundex (Koneru et al., 2016), English variant: Soundex of the
/// Metaphone key, with the leading letter replaced by a digit class.
pub fn metasoundex(s: &str) -> String {
    let code = soundex(&metaphone(s));
    let mut chars = code.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    format!("{}{}", leading_class(first), chars.as_str())
}

/// V, W, X and Z have no class and stay as letters.
fn leading_class(c: char) -> char {
    match c {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => '0',
        'B' | 'H' | 'Q' => '4',
        'C' | 'J' | 'P' | 'S' => '1',
        'D' => '5',
        'F' | 'G' => '0',
        'K' => '9',
        'L' | 'T' => '6',
        'M' => '2',
        'N' => '3',
        'R' => '7',
        other => other,
    }
}
