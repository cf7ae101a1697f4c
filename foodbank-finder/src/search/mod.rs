//! Nearest-and-available foodbank search.
//!
//! Two kinds of query are answered from the shared reference tables:
//! "nearest" (closest foodbanks open on chosen weekdays) and "asap"
//! (foodbanks ordered by how soon they open, or close if already open).

mod config;
mod finder;
mod query;
mod resolve;

pub use config::{AsapStrategy, SearchConfig};
pub use finder::FoodbankSearch;
pub use query::{
    DEFAULT_MAX_DISTANCE_M, DEFAULT_MAX_RESULTS, InvalidQuery, Origin, Query, ResultRow,
    SearchError, SearchMode, Urgency,
};
pub use resolve::{KnownPostcodes, PostcodeResolver};
