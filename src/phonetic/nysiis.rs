/// NYSIIS (New York State Identification and Intelligence System) algorithm
/// More accurate than Soundex, particularly for names of various ethnic origins.
/// Keys are truncated to six characters as in the original system.
pub fn nysiis(s: &str) -> String {
    nysiis_with_max(s, 6)
}

/// NYSIIS key truncated to `max_len` characters; `0` means no limit.
pub fn nysiis_with_max(s: &str, max_len: usize) -> String {
    let mut name: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if name.is_empty() {
        return String::new();
    }

    // Translate first characters
    let prefix: String = name.iter().take(3).collect();
    if prefix.starts_with("MAC") {
        name.splice(0..3, "MCC".chars());
    } else if prefix.starts_with("KN") {
        name.splice(0..2, "NN".chars());
    } else if prefix.starts_with('K') {
        name[0] = 'C';
    } else if prefix.starts_with("PH") || prefix.starts_with("PF") {
        name.splice(0..2, "FF".chars());
    } else if prefix.starts_with("SCH") {
        name.splice(0..3, "SSS".chars());
    }

    // Translate last characters
    let len = name.len();
    if len >= 2 {
        let suffix: String = name[len - 2..].iter().collect();
        match suffix.as_str() {
            "EE" | "IE" => {
                name.truncate(len - 2);
                name.push('Y');
            }
            "DT" | "RT" | "RD" | "NT" | "ND" => {
                name.truncate(len - 2);
                name.push('D');
            }
            _ => {}
        }
    }

    let mut key = String::from(name[0]);
    let mut i = 1;

    while i < name.len() {
        let prev = name[i - 1];
        let next = name.get(i + 1).copied();

        match name[i] {
            'E' if next == Some('V') => {
                name[i] = 'A';
                name[i + 1] = 'F';
            }
            'A' | 'E' | 'I' | 'O' | 'U' => name[i] = 'A',
            'Q' => name[i] = 'G',
            'Z' => name[i] = 'S',
            'M' => name[i] = 'N',
            'K' => {
                if next == Some('N') {
                    name[i] = 'N';
                } else {
                    name[i] = 'C';
                }
            }
            'S' if next == Some('C') && name.get(i + 2) == Some(&'H') => {
                name[i + 1] = 'S';
                name[i + 2] = 'S';
            }
            'P' if next == Some('H') => {
                name[i] = 'F';
                name[i + 1] = 'F';
            }
            'H' => {
                if !is_vowel(prev) || !next.is_some_and(is_vowel) {
                    name[i] = prev;
                }
            }
            'W' => {
                if is_vowel(prev) {
                    name[i] = prev;
                }
            }
            _ => {}
        }

        let current = name[i];
        if key.chars().last() != Some(current) {
            key.push(current);
        }
        i += 1;
    }

    if key.len() > 1 && key.ends_with('S') {
        key.pop();
    }
    if key.ends_with("AY") {
        key.truncate(key.len() - 2);
        key.push('Y');
    }
    if key.len() > 1 && key.ends_with('A') {
        key.pop();
    }

    if max_len > 0 && key.len() > max_len {
        key.truncate(max_len);
    }
    key
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nysiis() {
        assert_eq!(nysiis("Bishop"), "BASAP");
        assert_eq!(nysiis("Knight"), "NAGT");
        assert_eq!(nysiis("Mackenzie"), "MCANSY");
    }

    #[test]
    fn test_nysiis_truncation() {
        assert_eq!(nysiis_with_max("Mackenzie", 0), "MCANSY");
        assert!(nysiis("Wilkinsonville").len() <= 6);
        assert_eq!(nysiis_with_max("Bishop", 3), "BAS");
    }

    #[test]
    fn test_nysiis_empty() {
        assert_eq!(nysiis(""), "");
        assert_eq!(nysiis("99"), "");
    }
}
