//! Search queries and results.

use std::fmt;
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use crate::domain::{DaySet, Foodbank, OpeningSlot};

/// Default travel budget in meters.
pub const DEFAULT_MAX_DISTANCE_M: f64 = 5000.0;

/// Default number of rows returned.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Where the user is searching from.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    /// A postcode as typed by the user.
    Postcode(String),
    /// A point picked on a map.
    Coordinate { lat: f64, long: f64 },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Postcode(postcode) => f.write_str(postcode.trim()),
            Origin::Coordinate { lat, long } => write!(f, "({lat:.6}, {long:.6})"),
        }
    }
}

/// What the user wants to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Nearest foodbanks open on at least one of `days`, nearest first.
    Nearest { days: DaySet },
    /// Foodbanks ordered by how soon they are available after `reference`.
    Asap { reference: NaiveDateTime },
}

impl SearchMode {
    /// Select a mode by its name, `"nearest"` or `"asap"`.
    ///
    /// `days` is only used by `nearest` and `reference` only by `asap`.
    pub fn from_name(name: &str, days: DaySet, reference: NaiveDateTime) -> Result<Self, InvalidQuery> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(SearchMode::Nearest { days }),
            "asap" => Ok(SearchMode::Asap { reference }),
            _ => Err(InvalidQuery::UnknownMode(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Nearest { .. } => "nearest",
            SearchMode::Asap { .. } => "asap",
        }
    }
}

/// A single search request.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub origin: Origin,
    pub mode: SearchMode,
    /// Travel budget; foodbanks further away are not considered.
    pub max_distance_m: f64,
    pub max_results: usize,
}

impl Query {
    /// Create a query with the default distance budget and result count.
    pub fn new(origin: Origin, mode: SearchMode) -> Self {
        Self {
            origin,
            mode,
            max_distance_m: DEFAULT_MAX_DISTANCE_M,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_distance(mut self, meters: f64) -> Self {
        self.max_distance_m = meters;
        self
    }

    pub fn with_max_results(mut self, count: usize) -> Self {
        self.max_results = count;
        self
    }
}

/// Why a query was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidQuery {
    /// Mode name other than "nearest" or "asap"
    #[error("unknown search mode {0:?}; expected \"nearest\" or \"asap\"")]
    UnknownMode(String),

    /// Origin is outside the service area or not a known postcode
    #[error("could not resolve origin {0}")]
    UnresolvedOrigin(String),

    /// A "nearest" query with an empty day filter
    #[error("no days selected")]
    NoDaysSelected,

    /// Distance budget is negative or not a number
    #[error("invalid maximum distance {0}")]
    InvalidDistance(f64),
}

/// Error from foodbank search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidQuery),
}

/// How soon a foodbank is available, relative to an "asap" reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Urgency {
    /// Time until it next opens; zero when open every day.
    pub time_to_open: Duration,
    /// Time until it next closes; `None` when open every day.
    pub time_to_close: Option<Duration>,
    /// Whether some slot is open at the reference time.
    pub open_now: bool,
    /// The slot that determined the ranking, if any.
    pub next_slot: Option<OpeningSlot>,
}

impl Urgency {
    /// Urgency of a foodbank open every day with no time restriction.
    pub fn always_open() -> Self {
        Self {
            time_to_open: Duration::zero(),
            time_to_close: None,
            open_now: true,
            next_slot: None,
        }
    }

    /// The sort key: the sooner of next opening and next closing.
    pub fn sort_key(&self) -> Duration {
        match self.time_to_close {
            Some(close) => self.time_to_open.min(close),
            None => self.time_to_open,
        }
    }

    /// Whether the foodbank is open at the reference time.
    pub fn is_open(&self) -> bool {
        self.open_now
    }
}

/// One foodbank in a search result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub foodbank: Arc<Foodbank>,
    pub distance_m: f64,
    /// Present for "asap" queries ranked by parsed opening hours.
    pub urgency: Option<Urgency>,
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.foodbank.name.as_deref().unwrap_or("(unnamed)");
        write!(f, "{} {} ({:.0} m)", self.foodbank.id, name, self.distance_m)
    }
}
