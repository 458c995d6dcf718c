//! Metaphone phonetic algorithm.
//!
//! Metaphone is more accurate than Soundex as it uses more sophisticated rules
//! for encoding English pronunciations: silent letters, PH -> F, TH -> 0 (theta)
//! and so on. Keys are not truncated, so long node names keep their full code.

fn is_vowel(c: Option<char>) -> bool {
    matches!(c, Some('A') | Some('E') | Some('I') | Some('O') | Some('U'))
}

/// Metaphone key of unbounded length.
pub fn metaphone(s: &str) -> String {
    metaphone_with_max(s, 0)
}

/// Metaphone key truncated to `max_len` characters; `0` means no limit.
pub fn metaphone_with_max(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if chars.is_empty() {
        return String::new();
    }

    let limit = if max_len == 0 { usize::MAX } else { max_len };
    let mut result = String::new();
    let mut i = 0;

    // Initial letter exceptions
    match (chars[0], chars.get(1).copied()) {
        ('K', Some('N')) | ('G', Some('N')) | ('P', Some('N')) | ('W', Some('R')) => i = 1,
        ('A', Some('E')) => {
            result.push('E');
            i = 2;
        }
        ('X', _) => {
            result.push('S');
            i = 1;
        }
        ('W', Some('H')) => {
            result.push('W');
            i = 2;
        }
        _ => {}
    }

    while i < chars.len() && result.len() < limit {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };

        // Skip duplicate adjacent letters, except C
        if c != 'C' && prev == Some(c) {
            i += 1;
            continue;
        }

        match c {
            'A' | 'E' | 'I' | 'O' | 'U' => {
                if i == 0 {
                    result.push(c);
                }
            }
            'B' => {
                // B silent after M at end
                if !(prev == Some('M') && next.is_none()) {
                    result.push('B');
                }
            }
            'C' => {
                if prev == Some('S') && matches!(next, Some('E') | Some('I') | Some('Y')) {
                    // SCE, SCI, SCY: C is silent
                } else if next == Some('I') && chars.get(i + 2) == Some(&'A') {
                    result.push('X');
                } else if next == Some('H') {
                    // SCH -> SK
                    result.push(if prev == Some('S') { 'K' } else { 'X' });
                    i += 1;
                } else if matches!(next, Some('I') | Some('E') | Some('Y')) {
                    result.push('S');
                } else {
                    result.push('K');
                }
            }
            'D' => {
                if next == Some('G')
                    && matches!(chars.get(i + 2), Some('E') | Some('I') | Some('Y'))
                {
                    result.push('J');
                    i += 1;
                } else {
                    result.push('T');
                }
            }
            'F' | 'J' | 'L' | 'M' | 'N' | 'R' => result.push(c),
            'G' => {
                if next == Some('H') {
                    // GH is hard before a vowel, silent before a consonant or at the end
                    if is_vowel(chars.get(i + 2).copied()) {
                        result.push('K');
                    }
                    i += 1;
                } else if next == Some('N') {
                    // GN, GNED silent
                } else if matches!(next, Some('E') | Some('I') | Some('Y')) {
                    result.push('J');
                } else {
                    result.push('K');
                }
            }
            'H' => {
                if !is_vowel(prev) && is_vowel(next) {
                    result.push('H');
                }
            }
            'K' => {
                if prev != Some('C') {
                    result.push('K');
                }
            }
            'P' => {
                if next == Some('H') {
                    result.push('F');
                    i += 1;
                } else {
                    result.push('P');
                }
            }
            'Q' => result.push('K'),
            'S' => {
                if next == Some('H') {
                    result.push('X');
                    i += 1;
                } else if next == Some('I') && matches!(chars.get(i + 2), Some('O') | Some('A')) {
                    result.push('X');
                } else {
                    result.push('S');
                }
            }
            'T' => {
                if next == Some('H') {
                    result.push('0'); // Theta sound
                    i += 1;
                } else if next == Some('I') && matches!(chars.get(i + 2), Some('O') | Some('A')) {
                    result.push('X');
                } else if !(next == Some('C') && chars.get(i + 2) == Some(&'H')) {
                    result.push('T');
                }
            }
            'V' => result.push('F'),
            'W' | 'Y' => {
                if is_vowel(next) {
                    result.push(c);
                }
            }
            'X' => {
                result.push('K');
                result.push('S');
            }
            'Z' => result.push('S'),
            _ => {}
        }
        i += 1;
    }

    if result.len() > limit {
        result.truncate(limit);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metaphone() {
        assert_eq!(metaphone("Smith"), "SM0");
        assert_eq!(metaphone("Knife"), "NF");
        assert_eq!(metaphone("add"), "AT");
        assert_eq!(metaphone("Thumb"), "0M");
    }

    #[test]
    fn test_metaphone_equivalents() {
        assert_eq!(metaphone("Wright"), metaphone("Right"));
        assert_eq!(metaphone("Phone"), metaphone("Fone"));
        assert_eq!(metaphone("Katherine"), metaphone("Catherine"));
        assert_eq!(metaphone("Philip"), metaphone("Phillip"));
    }

    #[test]
    fn test_metaphone_initial_x_and_wh() {
        assert_eq!(metaphone("Xavier"), "SFR");
        assert_eq!(metaphone("White"), "WT");
    }

    #[test]
    fn test_metaphone_initial_ae_and_hard_gh() {
        assert_eq!(metaphone("aerial"), "ERL");
        assert_eq!(metaphone("aesthetic"), "ES0TK");
        assert_eq!(metaphone("ghost"), "KST");
        assert_eq!(metaphone("ghana"), "KN");
        // GH before a consonant stays silent
        assert_eq!(metaphone("Knight"), "NT");
    }

    #[test]
    fn test_metaphone_unbounded_and_limited() {
        let long = metaphone("multiplication");
        assert!(long.len() > 6, "got {}", long);
        assert_eq!(metaphone_with_max("multiplication", 4), long[..4]);
    }

    #[test]
    fn test_metaphone_empty() {
        assert_eq!(metaphone(""), "");
        assert_eq!(metaphone("42"), "");
    }
}
