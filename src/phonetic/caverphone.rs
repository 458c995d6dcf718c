/// Caverphone algorithm (version 2) - good for matching European surnames
/// Returns a 10-character code padded with '1'
pub fn caverphone(s: &str) -> String {
    // Remove anything not a letter
    let mut result: String = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if result.is_empty() {
        return "1111111111".to_string();
    }

    // Remove final 'e'
    if result.ends_with('e') {
        result.pop();
    }

    // Initial transformations
    for (from, to) in [
        ("cough", "cou2f"),
        ("rough", "rou2f"),
        ("tough", "tou2f"),
        ("enough", "enou2f"),
        ("trough", "trou2f"),
        ("gn", "2n"),
    ] {
        if let Some(rest) = result.strip_prefix(from) {
            result = format!("{}{}", to, rest);
        }
    }
    if let Some(stem) = result.strip_suffix("mb") {
        result = format!("{}m2", stem);
    }

    // Common substitutions
    result = result
        .replace("cq", "2q")
        .replace("ci", "si")
        .replace("ce", "se")
        .replace("cy", "sy")
        .replace("tch", "2ch")
        .replace('c', "k")
        .replace('q', "k")
        .replace('x', "k")
        .replace('v', "f")
        .replace("dg", "2g")
        .replace("tio", "sio")
        .replace("tia", "sia")
        .replace('d', "t")
        .replace("ph", "fh")
        .replace('b', "p")
        .replace("sh", "s2")
        .replace('z', "s");

    // Vowels: an initial vowel becomes 'A', every other vowel '3'
    result = result
        .chars()
        .enumerate()
        .map(|(i, c)| match c {
            'a' | 'e' | 'i' | 'o' | 'u' if i == 0 => 'A',
            'a' | 'e' | 'i' | 'o' | 'u' => '3',
            other => other,
        })
        .collect();

    result = result.replace('j', "y");
    if let Some(rest) = result.strip_prefix("y3") {
        result = format!("Y3{}", rest);
    }
    if let Some(rest) = result.strip_prefix('y') {
        result = format!("A{}", rest);
    }
    result = result
        .replace('y', "3")
        .replace("3gh3", "3kh3")
        .replace("gh", "22")
        .replace('g', "k");

    for c in ['s', 't', 'p', 'k', 'f', 'm', 'n'] {
        result = collapse_run(&result, c, c.to_ascii_uppercase());
    }

    result = result.replace("w3", "W3").replace("wh3", "Wh3");
    if let Some(stem) = result.strip_suffix('w') {
        result = format!("{}3", stem);
    }
    result = result.replace('w', "2");

    if let Some(rest) = result.strip_prefix('h') {
        result = format!("A{}", rest);
    }
    result = result.replace('h', "2");

    result = result.replace("r3", "R3");
    if let Some(stem) = result.strip_suffix('r') {
        result = format!("{}3", stem);
    }
    result = result.replace('r', "2");

    result = result.replace("l3", "L3");
    if let Some(stem) = result.strip_suffix('l') {
        result = format!("{}3", stem);
    }
    result = result.replace('l', "2");

    // Remove all '2's, turn a final '3' into 'A', then drop the other '3's
    result = result.replace('2', "");
    if let Some(stem) = result.strip_suffix('3') {
        result = format!("{}A", stem);
    }
    result = result.replace('3', "");

    // Pad with 1's or truncate to 10 characters
    while result.len() < 10 {
        result.push('1');
    }
    result.truncate(10);

    result.to_uppercase()
}

/// Replace every run of `c` with a single `with`.
fn collapse_run(s: &str, c: char, with: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch == c {
            if !in_run {
                out.push(with);
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caverphone() {
        assert_eq!(caverphone("add"), "AT11111111");
        assert_eq!(caverphone("Thompson"), "TMPSN11111");
        assert_eq!(caverphone("Stephen"), caverphone("Steven"));
        assert_eq!(caverphone("Lee"), "LA11111111");
    }

    #[test]
    fn test_caverphone_length() {
        assert_eq!(caverphone("Stevenson").len(), 10);
        assert_eq!(caverphone("Peter").len(), 10);
    }

    #[test]
    fn test_caverphone_empty() {
        assert_eq!(caverphone(""), "1111111111");
        assert_eq!(caverphone("__"), "1111111111");
    }
}
