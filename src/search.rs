//! The phonetic search pipeline.
//!
//! A query goes through four strictly sequential steps:
//!
//! 1. normalize the text (lowercase, strip spaces/underscores, spell digits)
//! 2. encode it with one phonetic algorithm
//! 3. match the code against the code field of every record
//! 4. resolve the candidates to a single record by fuzzy name match
//!
//! [`search`] is the generic pipeline; [`PhoneticSearch`] owns a loaded
//! dictionary and exposes the named combinations.

use crate::config::Config;
use crate::dictionary::{Collection, Dictionary, Record};
use crate::error::SearchResult;
use crate::matcher::{match_exact, match_fuzzy, MatchMode, DEFAULT_FUZZY_LIMIT};
use crate::normalize::normalize;
use crate::phonetic::{EncodeFn, EncoderSet};
use crate::resolver::select_best_name;
use std::path::Path;

/// Emits pipeline internals on the `phonetic_lookup::debug` target: at INFO
/// when debug output is switched on, at TRACE otherwise.
macro_rules! debug_event {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            tracing::info!(target: "phonetic_lookup::debug", $($arg)+);
        } else {
            tracing::trace!(target: "phonetic_lookup::debug", $($arg)+);
        }
    };
}

/// Run one query through normalize, encode, match and resolve.
///
/// An empty candidate set is not an error: the result is `Ok(None)`.
pub fn search<'a, M, R>(
    query: &str,
    records: &'a [Record],
    encode: EncodeFn,
    code_field: &str,
    match_fn: M,
    resolve_fn: R,
    debug: bool,
) -> SearchResult<Option<&'a Record>>
where
    M: Fn(&str, &'a [Record], &str) -> SearchResult<Vec<&'a Record>>,
    R: Fn(&str, &'a [Record], &[&'a Record]) -> Option<&'a Record>,
{
    let query = normalize(query)?;

    let code = encode(&query);
    debug_event!(debug, query = %query, code = %code, "Searching code");

    let matches = match_fn(&code, records, code_field)?;
    let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
    debug_event!(debug, count = matches.len(), ?names, "Matches");

    let found = resolve_fn(&query, records, &matches);
    debug_event!(debug, found = ?found.map(|r| r.name.as_str()), "Node found");

    Ok(found)
}

/// A loaded dictionary plus the encoders used to query it.
///
/// Immutable apart from the debug switch and fuzzy limit, so it can be shared
/// by reference across threads once configured.
#[derive(Debug, Clone)]
pub struct PhoneticSearch {
    dictionary: Dictionary,
    encoders: EncoderSet,
    debug: bool,
    fuzzy_limit: usize,
}

impl PhoneticSearch {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_encoders(dictionary, EncoderSet::standard())
    }

    pub fn with_encoders(dictionary: Dictionary, encoders: EncoderSet) -> Self {
        Self {
            dictionary,
            encoders,
            debug: false,
            fuzzy_limit: DEFAULT_FUZZY_LIMIT,
        }
    }

    /// Load the dictionary document at `path`.
    pub fn open(path: impl AsRef<Path>) -> SearchResult<Self> {
        Ok(Self::new(Dictionary::load(path)?))
    }

    pub fn from_config(config: &Config) -> SearchResult<Self> {
        let mut engine = Self::open(&config.dictionary_path)?.with_fuzzy_limit(config.fuzzy_limit);
        engine.set_debug(config.debug);
        Ok(engine)
    }

    pub fn with_fuzzy_limit(mut self, limit: usize) -> Self {
        self.fuzzy_limit = limit;
        self
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn fuzzy_limit(&self) -> usize {
        self.fuzzy_limit
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }

    /// Search `collection` with any registered encoder and either matcher.
    ///
    /// The code field is the encoder's un-hyphenated name, e.g.
    /// `doublemetaphone` for `double-metaphone`.
    pub fn search_with(
        &self,
        query: &str,
        collection: Collection,
        encoder: &str,
        mode: MatchMode,
    ) -> SearchResult<Option<&Record>> {
        let encode = self.encoders.get(encoder)?;
        let field = self.encoders.field_name(encoder)?;
        let records = self.dictionary.collection(collection);

        match mode {
            MatchMode::Exact => search(query, records, encode, &field, match_exact, select_best_name, self.debug),
            MatchMode::Fuzzy => {
                let limit = self.fuzzy_limit;
                search(
                    query,
                    records,
                    encode,
                    &field,
                    |code, records, field| match_fuzzy(code, records, field, limit),
                    select_best_name,
                    self.debug,
                )
            }
        }
    }

    pub fn search_node_exact_metaphone(&self, query: &str) -> SearchResult<Option<&Record>> {
        self.search_with(query, Collection::Nodes, "metaphone", MatchMode::Exact)
    }

    pub fn search_node_fuzzy_metaphone(&self, query: &str) -> SearchResult<Option<&Record>> {
        self.search_with(query, Collection::Nodes, "metaphone", MatchMode::Fuzzy)
    }

    pub fn search_node_exact_caverphone(&self, query: &str) -> SearchResult<Option<&Record>> {
        self.search_with(query, Collection::Nodes, "caverphone", MatchMode::Exact)
    }

    pub fn search_type_exact_metaphone(&self, query: &str) -> SearchResult<Option<&Record>> {
        self.search_with(query, Collection::Types, "metaphone", MatchMode::Exact)
    }

    pub fn search_type_exact_caverphone(&self, query: &str) -> SearchResult<Option<&Record>> {
        self.search_with(query, Collection::Types, "caverphone", MatchMode::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::phonetic::metaphone;

    fn engine() -> PhoneticSearch {
        let set = EncoderSet::standard();
        let nodes = vec![
            Record::encoded("Add", &set).unwrap(),
            Record::encoded("Subtract", &set).unwrap(),
            Record::encoded("Multiply", &set).unwrap(),
        ];
        let types = vec![
            Record::encoded("Int", &set).unwrap(),
            Record::encoded("Float", &set).unwrap(),
        ];
        PhoneticSearch::new(Dictionary::new(nodes, types))
    }

    #[test]
    fn test_generic_pipeline() {
        let records = vec![Record::new("Add").with_code("metaphone", "AT")];
        let found = search("ad_d", &records, metaphone, "metaphone", match_exact, select_best_name, false).unwrap();
        assert_eq!(found.map(|r| r.name.as_str()), Some("Add"));
    }

    #[test]
    fn test_named_searches() {
        let engine = engine();
        assert_eq!(engine.search_node_exact_metaphone("add").unwrap().unwrap().name, "Add");
        assert_eq!(engine.search_node_exact_caverphone("subtract").unwrap().unwrap().name, "Subtract");
        assert_eq!(engine.search_type_exact_metaphone("float").unwrap().unwrap().name, "Float");
        assert_eq!(engine.search_type_exact_caverphone("int").unwrap().unwrap().name, "Int");
        assert_eq!(engine.search_node_fuzzy_metaphone("multiply").unwrap().unwrap().name, "Multiply");
    }

    #[test]
    fn test_types_are_not_searched_for_nodes() {
        let engine = engine();
        assert!(engine.search_node_exact_metaphone("float").unwrap().is_none());
    }

    #[test]
    fn test_search_with_other_encoders() {
        let engine = engine();
        for encoder in engine.encoders().names() {
            let found = engine
                .search_with("Subtract", Collection::Nodes, encoder, MatchMode::Exact)
                .unwrap();
            assert_eq!(found.map(|r| r.name.as_str()), Some("Subtract"), "encoder {}", encoder);
        }
    }

    #[test]
    fn test_search_with_unknown_encoder() {
        let engine = engine();
        let err = engine
            .search_with("add", Collection::Nodes, "klingon", MatchMode::Exact)
            .unwrap_err();
        assert!(matches!(err, SearchError::UnknownEncoder(_)));
    }

    #[test]
    fn test_debug_does_not_change_results() {
        let mut engine = engine();
        let quiet = engine.search_node_exact_metaphone("add").unwrap().cloned();
        engine.set_debug(true);
        assert!(engine.debug());
        let loud = engine.search_node_exact_metaphone("add").unwrap().cloned();
        assert_eq!(quiet, loud);
    }
}
