use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Dictionary '{0}' not found")]
    DictionaryNotFound(String),

    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),

    #[error("Dictionary is missing the '{0}' collection")]
    MissingCollection(String),

    #[error("Unknown collection '{0}'")]
    UnknownCollection(String),

    #[error("Unknown match mode '{0}'")]
    UnknownMatchMode(String),

    #[error("Unknown phonetic encoder '{0}'")]
    UnknownEncoder(String),

    #[error("Record '{name}' has no '{field}' code")]
    MissingCodeField { field: String, name: String },

    #[error("Number too large to spell out: {0}")]
    NumberTooLarge(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SearchResult<T> = Result<T, SearchError>;

impl serde::Serialize for SearchError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl SearchError {
    /// Whether the error happened while building the dictionary rather than
    /// while answering a query.
    pub fn is_initialization(&self) -> bool {
        matches!(
            self,
            SearchError::DictionaryNotFound(_)
                | SearchError::InvalidDictionary(_)
                | SearchError::MissingCollection(_)
                | SearchError::Io(_)
                | SearchError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SearchError::DictionaryNotFound("nodes.json".to_string());
        assert_eq!(err.to_string(), "Dictionary 'nodes.json' not found");

        let err = SearchError::MissingCollection("types".to_string());
        assert_eq!(
            err.to_string(),
            "Dictionary is missing the 'types' collection"
        );

        let err = SearchError::UnknownEncoder("klingon".to_string());
        assert_eq!(err.to_string(), "Unknown phonetic encoder 'klingon'");

        let err = SearchError::MissingCodeField {
            field: "metaphone".to_string(),
            name: "Add".to_string(),
        };
        assert_eq!(err.to_string(), "Record 'Add' has no 'metaphone' code");

        let err = SearchError::NumberTooLarge("9".repeat(50));
        assert!(err.to_string().starts_with("Number too large to spell out: 999"));
    }

    #[test]
    fn test_error_kind() {
        assert!(SearchError::InvalidDictionary("bad".to_string()).is_initialization());
        assert!(!SearchError::NumberTooLarge("1".to_string()).is_initialization());
        assert!(!SearchError::UnknownEncoder("x".to_string()).is_initialization());
    }

    #[test]
    fn test_error_serializes_as_message() {
        let err = SearchError::UnknownCollection("edges".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!("Unknown collection 'edges'"));
    }

    #[test]
    fn test_search_result_type() {
        let ok_result: SearchResult<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: SearchResult<i32> = Err(SearchError::InvalidDictionary("x".to_string()));
        assert!(err_result.is_err());
    }
}
