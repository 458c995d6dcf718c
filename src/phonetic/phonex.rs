/// Phonex (Lait and Randell, 1996): a Soundex/Phonix hybrid.
/// Returns a letter followed by three digits.
pub fn phonex(s: &str) -> String {
    let mut name: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    // Trailing S's are not significant
    while name.len() > 1 && name.last() == Some(&'S') {
        name.pop();
    }
    if name.is_empty() {
        return String::new();
    }

    // Leading letter pairs
    let head: String = name.iter().take(2).collect();
    match head.as_str() {
        "KN" => {
            name.remove(0);
        }
        "PH" => {
            name.splice(0..2, ['F']);
        }
        "WR" => {
            name.remove(0);
        }
        _ => {}
    }
    if name.len() > 1 && name[0] == 'H' {
        name.remove(0);
    }

    // Leading letter
    name[0] = match name[0] {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => 'A',
        'P' => 'B',
        'V' => 'F',
        'K' | 'Q' => 'C',
        'J' => 'G',
        'Z' => 'S',
        other => other,
    };

    let mut code = String::from(name[0]);
    let mut last = phonex_digit(&name, 0);
    let mut i = 1;

    while i < name.len() && code.len() < 4 {
        let digit = phonex_digit(&name, i);
        if let Some(d) = digit {
            if Some(d) != last {
                code.push(d);
            }
        }
        // M and N swallow a following D or G
        if matches!(name[i], 'M' | 'N') && matches!(name.get(i + 1), Some('D') | Some('G')) {
            i += 1;
        }
        last = digit;
        i += 1;
    }

    while code.len() < 4 {
        code.push('0');
    }
    code
}

fn phonex_digit(name: &[char], i: usize) -> Option<char> {
    let next = name.get(i + 1).copied();
    let next_is_vowel_or_end =
        next.is_none() || matches!(next, Some('A' | 'E' | 'I' | 'O' | 'U' | 'Y'));

    match name[i] {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' if next != Some('C') => Some('3'),
        'L' if !next_is_vowel_or_end => Some('4'),
        'M' | 'N' => Some('5'),
        'R' if !next_is_vowel_or_end => Some('6'),
        _ => None,
    }
}
