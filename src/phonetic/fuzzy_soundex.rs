/// Fuzzy Soundex (Holmes and McCabe, 2002).
/// Normalizes common letter groups before coding and keeps five characters.
pub fn fuzzy_soundex(s: &str) -> String {
    const MAX_LEN: usize = 5;

    let mut word: String = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if word.is_empty() {
        return "0".repeat(MAX_LEN);
    }

    for (from, to) in [
        ("CS", "SS"),
        ("CZ", "SS"),
        ("TS", "SS"),
        ("TZ", "SS"),
        ("GN", "NN"),
        ("HR", "RR"),
        ("WR", "RR"),
        ("HW", "WW"),
        ("KN", "NN"),
        ("NG", "NN"),
    ] {
        if let Some(rest) = word.strip_prefix(from) {
            word = format!("{}{}", to, rest);
            break;
        }
    }

    if let Some(stem) = word.strip_suffix("CH") {
        word = format!("{}KK", stem);
    } else if let Some(stem) = word.strip_suffix("NT") {
        word = format!("{}TT", stem);
    } else if let Some(stem) = word.strip_suffix("RT") {
        word = format!("{}RR", stem);
    } else if let Some(stem) = word.strip_suffix("RDT") {
        word = format!("{}RR", stem);
    }

    for (from, to) in [
        ("CA", "KA"),
        ("CC", "KK"),
        ("CK", "KK"),
        ("CE", "SE"),
        ("CHL", "KL"),
        ("CL", "KL"),
        ("CHR", "KR"),
        ("CR", "KR"),
        ("CI", "SI"),
        ("CO", "KO"),
        ("CU", "KU"),
        ("CY", "SY"),
        ("DG", "GG"),
        ("GH", "HH"),
        ("MAC", "MK"),
        ("MC", "MK"),
        ("NST", "NSS"),
        ("PF", "FF"),
        ("PH", "FF"),
        ("SCH", "SSS"),
        ("TIO", "SIO"),
        ("TIA", "SIO"),
        ("TCH", "CHH"),
    ] {
        word = word.replace(from, to);
    }

    let digits: Vec<char> = word.chars().filter_map(fuzzy_digit).collect();

    let mut code = String::new();
    let mut last: Option<char> = None;
    for &d in &digits {
        if Some(d) != last {
            code.push(d);
        }
        last = Some(d);
    }

    // The first letter replaces its own digit, except for H, W and Y which
    // have no digit of their own.
    let first = word.chars().next().unwrap_or('0');
    let mut code: String = if matches!(first, 'H' | 'W' | 'Y') {
        format!("{}{}", first, code)
    } else {
        format!("{}{}", first, code.chars().skip(1).collect::<String>())
    };

    code = code.replace('0', "");
    while code.len() < MAX_LEN {
        code.push('0');
    }
    code.truncate(MAX_LEN);
    code
}

/// Digit for each letter; H, W and Y are dropped before coding.
fn fuzzy_digit(c: char) -> Option<char> {
    match c {
        'A' | 'E' | 'I' | 'O' | 'U' => Some('0'),
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'S' | 'Z' => Some('9'),
        'G' | 'J' | 'K' | 'Q' | 'X' => Some('7'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}
