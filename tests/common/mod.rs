//! Common test utilities for the search tests
//!
//! Provides shared helper functions for:
//! - Writing dictionary documents to a temp dir
//! - Building records with every code field filled in

#![allow(dead_code)]

use phonetic_lookup::{Dictionary, EncoderSet, PhoneticSearch, Record};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn write_dictionary(doc: &Value) -> (PathBuf, TempDir) {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = tmp_dir.path().join("dictionary.json");
    std::fs::write(&path, serde_json::to_string_pretty(doc).unwrap())
        .expect("Failed to write dictionary");
    (path, tmp_dir)
}

pub fn encoded(names: &[&str]) -> Vec<Record> {
    let encoders = EncoderSet::standard();
    names
        .iter()
        .map(|name| Record::encoded(*name, &encoders).expect("Failed to encode name"))
        .collect()
}

/// A small node/type dictionary with every code field precomputed.
pub fn create_seeded_engine() -> PhoneticSearch {
    let nodes = encoded(&[
        "Add",
        "Subtract",
        "Multiply",
        "Divide",
        "Value Display",
        "Sin",
        "Cos",
        "Vector 3",
    ]);
    let types = encoded(&["Int", "Float", "String", "Bool", "Float 3"]);
    PhoneticSearch::new(Dictionary::new(nodes, types))
}
