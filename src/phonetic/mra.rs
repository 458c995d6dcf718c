/// Match Rating Approach codex (Western Airlines, 1977).
/// Vowels after the first letter are dropped, doubled consonants collapse,
/// and codes longer than six keep their first and last three letters.
pub fn mra(s: &str) -> String {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut codex: Vec<char> = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && matches!(c, 'A' | 'E' | 'I' | 'O' | 'U') {
            continue;
        }
        if codex.last() == Some(&c) {
            continue;
        }
        codex.push(c);
    }

    if codex.len() > 6 {
        let tail = codex.len() - 3;
        codex.drain(3..tail);
    }

    codex.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mra() {
        assert_eq!(mra("Byrne"), "BYRN");
        assert_eq!(mra("Smith"), "SMTH");
        assert_eq!(mra("Catherine"), "CTHRN");
        assert_eq!(mra("add"), "AD");
    }

    #[test]
    fn test_mra_long_names_keep_ends() {
        assert_eq!(mra("Multiplication"), "MLTCTN");
    }

    #[test]
    fn test_mra_empty() {
        assert_eq!(mra(""), "");
    }
}
