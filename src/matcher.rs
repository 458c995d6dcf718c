//! Code matching: find the records whose stored code matches a query code.

use crate::dictionary::Record;
use crate::error::{SearchError, SearchResult};
use crate::fuzz;
use std::fmt;
use std::str::FromStr;

/// Number of distinct codes kept by fuzzy matching unless configured.
pub const DEFAULT_FUZZY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    #[default]
    Exact,
    Fuzzy,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => f.write_str("exact"),
            MatchMode::Fuzzy => f.write_str("fuzzy"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "fuzzy" => Ok(MatchMode::Fuzzy),
            _ => Err(SearchError::UnknownMatchMode(s.to_string())),
        }
    }
}

/// Every record whose `code_field` equals `code`, in collection order.
pub fn match_exact<'a>(code: &str, records: &'a [Record], code_field: &str) -> SearchResult<Vec<&'a Record>> {
    let mut matches = Vec::new();
    for record in records {
        if record.code(code_field)? == code {
            matches.push(record);
        }
    }
    Ok(matches)
}

/// Records carrying one of the `limit` stored codes closest to `code`.
///
/// Codes are scored once each, in first-occurrence order; ties keep that
/// order. Records are grouped by selected code, best code first.
pub fn match_fuzzy<'a>(
    code: &str,
    records: &'a [Record],
    code_field: &str,
    limit: usize,
) -> SearchResult<Vec<&'a Record>> {
    let mut distinct: Vec<&str> = Vec::new();
    for record in records {
        let stored = record.code(code_field)?;
        if !distinct.contains(&stored) {
            distinct.push(stored);
        }
    }

    let selected = fuzz::extract(code, distinct.iter().copied(), limit);

    let mut matches = Vec::new();
    for scored in &selected {
        for record in records {
            if record.code(code_field)? == scored.choice {
                matches.push(record);
            }
        }
    }
    Ok(matches)
}
