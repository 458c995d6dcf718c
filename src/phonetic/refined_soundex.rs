/// Refined Soundex: keeps the first letter and codes every letter with the
/// finer-grained refined table, collapsing repeats and dropping vowels.
/// Example: "Braz" -> "B195"
pub fn refined_soundex(s: &str) -> String {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let Some(&first) = chars.first() else {
        return String::new();
    };

    let mut code = String::from(first);
    let mut last: Option<char> = None;

    for &ch in &chars {
        let digit = refined_digit(ch);
        if Some(digit) != last {
            if digit != '0' {
                code.push(digit);
            }
            last = Some(digit);
        }
    }

    code
}

fn refined_digit(c: char) -> char {
    match c {
        'B' | 'P' => '1',
        'F' | 'V' => '2',
        'C' | 'K' | 'S' => '3',
        'G' | 'J' => '4',
        'Q' | 'X' | 'Z' => '5',
        'D' | 'T' => '6',
        'L' => '7',
        'M' | 'N' => '8',
        'R' => '9',
        _ => '0',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refined_soundex() {
        assert_eq!(refined_soundex("Braz"), "B195");
        assert_eq!(refined_soundex("Caren"), "C398");
        assert_eq!(refined_soundex("Hayers"), "H93");
    }

    #[test]
    fn test_refined_soundex_separates_soundex_groups() {
        // Soundex puts B and F in one group; refined soundex does not.
        assert_ne!(refined_soundex("Bill")[1..], refined_soundex("Fill")[1..]);
        assert_eq!(refined_soundex("Bill"), "B17");
        assert_eq!(refined_soundex("Fill"), "F27");
    }

    #[test]
    fn test_refined_soundex_empty() {
        assert_eq!(refined_soundex(""), "");
        assert_eq!(refined_soundex("--"), "");
    }
}
