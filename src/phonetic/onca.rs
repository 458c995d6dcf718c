use super::nysiis::nysiis_with_max;
use super::soundex::soundex;

/// Oxford Name Compression Algorithm: a NYSIIS pass (up to twelve
/// characters) followed by Soundex.
pub fn onca(s: &str) -> String {
    soundex(&nysiis_with_max(s, 12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onca() {
        assert_eq!(onca("Bishop"), soundex("BASAP"));
        assert_eq!(onca("Knight"), "N230");
    }

    #[test]
    fn test_onca_groups_variants() {
        assert_eq!(onca("Mackenzie"), onca("McKenzie"));
    }

    #[test]
    fn test_onca_empty() {
        assert_eq!(onca(""), "");
    }
}
