//! The in-memory dictionary: two flat collections of named records, each
//! carrying one precomputed code per phonetic algorithm.

use crate::error::{SearchError, SearchResult};
use crate::normalize::normalize;
use crate::phonetic::EncoderSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A dictionary entry.
///
/// Only `name` is required. Code fields and any other attributes are kept
/// as-is and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Map::new(),
        }
    }

    pub fn with_code(mut self, field: impl Into<String>, code: impl Into<String>) -> Self {
        self.fields.insert(field.into(), Value::String(code.into()));
        self
    }

    /// The code stored under `field`. Missing and non-string values are both
    /// treated as absent.
    pub fn code(&self, field: &str) -> SearchResult<&str> {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| SearchError::MissingCodeField {
                field: field.to_string(),
                name: self.name.clone(),
            })
    }

    /// Build a record for `name` with every code field filled in, computed
    /// from the normalized name.
    pub fn encoded(name: impl Into<String>, encoders: &EncoderSet) -> SearchResult<Self> {
        let name = name.into();
        let normalized = normalize(&name)?;
        let mut record = Self::new(name);
        for (field, code) in encoders.encode_all(&normalized) {
            record.fields.insert(field, Value::String(code));
        }
        Ok(record)
    }
}

/// Which record sequence a search scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Nodes,
    Types,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Nodes => "nodes",
            Collection::Types => "types",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nodes" | "node" => Ok(Collection::Nodes),
            "types" | "type" => Ok(Collection::Types),
            _ => Err(SearchError::UnknownCollection(s.to_string())),
        }
    }
}

/// The loaded dictionary. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    pub nodes: Vec<Record>,
    pub types: Vec<Record>,
}

impl Dictionary {
    pub fn new(nodes: Vec<Record>, types: Vec<Record>) -> Self {
        Self { nodes, types }
    }

    /// Load a dictionary document from disk.
    pub fn load(path: impl AsRef<Path>) -> SearchResult<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SearchError::DictionaryNotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let dictionary = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded dictionary {} ({} nodes, {} types)",
            path.display(),
            dictionary.nodes.len(),
            dictionary.types.len()
        );
        Ok(dictionary)
    }

    /// Parse a dictionary document with top-level `nodes` and `types` arrays.
    pub fn from_json_str(content: &str) -> SearchResult<Self> {
        let document: Value = serde_json::from_str(content)?;
        let Value::Object(mut document) = document else {
            return Err(SearchError::InvalidDictionary(
                "top level must be an object".to_string(),
            ));
        };

        let nodes = take_collection(&mut document, Collection::Nodes)?;
        let types = take_collection(&mut document, Collection::Types)?;
        Ok(Self { nodes, types })
    }

    pub fn collection(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Nodes => &self.nodes,
            Collection::Types => &self.types,
        }
    }

    pub fn to_json_pretty(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SearchResult<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

fn take_collection(document: &mut Map<String, Value>, collection: Collection) -> SearchResult<Vec<Record>> {
    let key = collection.as_str();
    let value = document
        .remove(key)
        .ok_or_else(|| SearchError::MissingCollection(key.to_string()))?;

    serde_json::from_value(value)
        .map_err(|e| SearchError::InvalidDictionary(format!("{}: {}", key, e)))
}
