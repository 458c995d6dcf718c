//! Phonetic encoders for sound-alike lookup.
//!
//! Every algorithm maps a normalized string to a code string. Two spellings
//! that sound alike should produce the same (or a close) code, which is what
//! the dictionary is searched by.
//!
//! # Available Algorithms
//!
//! - **soundex**: American Soundex
//! - **refined-soundex**: Refined Soundex (finer letter classes, unbounded)
//! - **metaphone**: Metaphone (better than Soundex for English)
//! - **double-metaphone**: Double Metaphone, primary key
//! - **nysiis**: NYSIIS (various ethnic origins)
//! - **caverphone**: Caverphone 2 (European surnames)
//! - **daitch-mokotoff**: Daitch-Mokotoff Soundex (Slavic and Yiddish names)
//! - **mra**: Match Rating Approach codex
//! - **phonex**: Phonex (Lait and Randell)
//! - **phonix**: Phonix (Gadd)
//! - **beider-morse**: Beider-Morse, approximate generic forms
//! - **fuzzy-soundex**: Fuzzy Soundex (Holmes and McCabe)
//! - **onca**: Oxford Name Compression Algorithm
//! - **metasoundex**: MetaSoundex (English)

pub mod beider_morse;
pub mod caverphone;
pub mod daitch_mokotoff;
pub mod double_metaphone;
pub mod fuzzy_soundex;
pub mod metaphone;
pub mod metasoundex;
pub mod mra;
pub mod nysiis;
pub mod onca;
pub mod phonex;
pub mod phonix;
pub mod refined_soundex;
pub mod soundex;

pub use beider_morse::beider_morse;
pub use caverphone::caverphone;
pub use daitch_mokotoff::daitch_mokotoff;
pub use double_metaphone::{double_metaphone, double_metaphone_primary};
pub use fuzzy_soundex::fuzzy_soundex;
pub use metaphone::metaphone;
pub use metasoundex::metasoundex;
pub use mra::mra;
pub use nysiis::nysiis;
pub use onca::onca;
pub use phonex::phonex;
pub use phonix::phonix;
pub use refined_soundex::refined_soundex;
pub use soundex::soundex;

use crate::error::{SearchError, SearchResult};

/// A phonetic algorithm: pure, deterministic and infallible.
pub type EncodeFn = fn(&str) -> String;

/// Immutable registry of named phonetic encoders.
///
/// Built once with [`EncoderSet::standard`] and handed to whatever needs to
/// encode. Iteration follows registration order.
#[derive(Debug, Clone)]
pub struct EncoderSet {
    encoders: Vec<(&'static str, EncodeFn)>,
}

impl EncoderSet {
    /// The fourteen supported algorithms.
    pub fn standard() -> Self {
        Self {
            encoders: vec![
                ("soundex", soundex as EncodeFn),
                ("refined-soundex", refined_soundex),
                ("metaphone", metaphone),
                ("double-metaphone", double_metaphone_primary),
                ("nysiis", nysiis),
                ("caverphone", caverphone),
                ("daitch-mokotoff", daitch_mokotoff),
                ("mra", mra),
                ("phonex", phonex),
                ("phonix", phonix),
                ("beider-morse", beider_morse),
                ("fuzzy-soundex", fuzzy_soundex),
                ("onca", onca),
                ("metasoundex", metasoundex),
            ],
        }
    }

    /// Look up an encoder by name. The un-hyphenated spelling used for
    /// dictionary fields is accepted too.
    pub fn get(&self, name: &str) -> SearchResult<EncodeFn> {
        let wanted = field_name(&name.to_lowercase());
        self.encoders
            .iter()
            .find(|(registered, _)| field_name(registered) == wanted)
            .map(|(_, encode)| *encode)
            .ok_or_else(|| SearchError::UnknownEncoder(name.to_string()))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.encoders.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// Dictionary field holding the precomputed code for `name`.
    pub fn field_name(&self, name: &str) -> SearchResult<String> {
        self.get(name)?;
        Ok(field_name(&name.to_lowercase()))
    }

    pub fn encode(&self, name: &str, text: &str) -> SearchResult<String> {
        Ok(self.get(name)?(text))
    }

    /// Run every encoder over `text`, as `(field name, code)` pairs.
    pub fn encode_all(&self, text: &str) -> Vec<(String, String)> {
        self.encoders
            .iter()
            .map(|(name, encode)| (field_name(name), encode(text)))
            .collect()
    }
}

impl Default for EncoderSet {
    fn default() -> Self {
        Self::standard()
    }
}

fn field_name(name: &str) -> String {
    name.replace(['-', '_'], "")
}
