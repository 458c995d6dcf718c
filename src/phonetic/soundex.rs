/// American Soundex algorithm - returns 4-character phonetic code
/// Example: "Smith" and "Smyth" both return "S530"
pub fn soundex(s: &str) -> String {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let Some(&first) = chars.first() else {
        return String::new();
    };

    let mut code = String::from(first);
    let mut last_digit = soundex_digit(first);

    for &ch in &chars[1..] {
        match soundex_digit(ch) {
            Some(d) => {
                if Some(d) != last_digit {
                    code.push(d);
                    if code.len() == 4 {
                        break;
                    }
                }
                last_digit = Some(d);
            }
            // H and W do not separate consonants with the same code
            None if ch == 'H' || ch == 'W' => {}
            None => last_digit = None,
        }
    }

    while code.len() < 4 {
        code.push('0');
    }

    code
}

/// Map character to Soundex digit
pub(crate) fn soundex_digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None, // A, E, I, O, U, H, W, Y
    }
}
