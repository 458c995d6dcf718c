pub mod config;
pub mod dictionary;
pub mod error;
pub mod fuzz;
pub mod matcher;
pub mod normalize;
pub mod phonetic;
pub mod resolver;
pub mod search;

pub use config::Config;
pub use dictionary::{Collection, Dictionary, Record};
pub use error::{SearchError, SearchResult};
pub use matcher::{match_exact, match_fuzzy, MatchMode};
pub use normalize::normalize;
pub use phonetic::{EncodeFn, EncoderSet};
pub use resolver::select_best_name;
pub use search::{search, PhoneticSearch};
