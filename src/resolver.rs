use crate::dictionary::Record;
use crate::fuzz;

/// Pick the single record whose name best matches `query`.
///
/// Candidate names are compared lowercased. The winner is then looked up in
/// `all_records` by lowercased name, so when several records share a name the
/// first one in the collection is returned, even if it was not a candidate.
pub fn select_best_name<'a>(query: &str, all_records: &'a [Record], candidates: &[&'a Record]) -> Option<&'a Record> {
    let names: Vec<String> = candidates.iter().map(|r| r.name.to_lowercase()).collect();
    let best = fuzz::extract_one(query, names.iter().map(String::as_str))?;

    all_records
        .iter()
        .find(|record| record.name.to_lowercase() == best.choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_candidates() {
        let all = vec![Record::new("Add")];
        assert!(select_best_name("add", &all, &[]).is_none());
    }

    #[test]
    fn test_picks_closest_name() {
        let all = vec![Record::new("Add"), Record::new("Subtract"), Record::new("Add Multi")];
        let candidates: Vec<&Record> = all.iter().collect();
        let best = select_best_name("subtrac", &all, &candidates).unwrap();
        assert_eq!(best.name, "Subtract");
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let all = vec![
            Record::new("Add").with_code("kind", "first"),
            Record::new("ADD").with_code("kind", "second"),
        ];
        let candidates = vec![&all[1]];
        let best = select_best_name("add", &all, &candidates).unwrap();
        assert_eq!(best.code("kind").unwrap(), "first");
    }

    #[test]
    fn test_deterministic() {
        let all = vec![Record::new("Sin"), Record::new("Sign"), Record::new("Sine")];
        let candidates: Vec<&Record> = all.iter().collect();
        let first = select_best_name("sine", &all, &candidates);
        for _ in 0..5 {
            assert_eq!(select_best_name("sine", &all, &candidates), first);
        }
    }
}
