//! Nearest-and-available foodbank search.
//!
//! A search resolves the origin to a postcode, takes the foodbanks within
//! the distance budget from the precomputed distance table, then orders
//! them according to the query mode.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::domain::{Day, DaySet, Postcode};
use crate::hours::{OpeningHours, RankedSlot, mentions_all, mentions_day, rank_by_urgency};
use crate::reference::{Candidate, ReferenceData};

use super::config::{AsapStrategy, SearchConfig};
use super::query::{InvalidQuery, Query, ResultRow, SearchError, SearchMode, Urgency};
use super::resolve::PostcodeResolver;

/// Foodbank search over shared reference data.
pub struct FoodbankSearch<'a, R: PostcodeResolver> {
    data: &'a ReferenceData,
    resolver: &'a R,
    config: &'a SearchConfig,
}

impl<'a, R: PostcodeResolver> FoodbankSearch<'a, R> {
    /// Create a new search.
    pub fn new(data: &'a ReferenceData, resolver: &'a R, config: &'a SearchConfig) -> Self {
        Self {
            data,
            resolver,
            config,
        }
    }

    /// Run a query.
    ///
    /// An empty result is not an error. The query is refused when its
    /// origin cannot be resolved to a postcode in the distance table, when
    /// its distance budget is negative, or when a "nearest" query selects
    /// no days.
    pub fn search(&self, query: &Query) -> Result<Vec<ResultRow>, SearchError> {
        if !query.max_distance_m.is_finite() || query.max_distance_m < 0.0 {
            return Err(InvalidQuery::InvalidDistance(query.max_distance_m).into());
        }
        if let SearchMode::Nearest { days } = &query.mode
            && days.is_empty()
        {
            return Err(InvalidQuery::NoDaysSelected.into());
        }

        let origin = self.resolve(query)?;
        let candidates = self.data.within(&origin, query.max_distance_m);

        debug!(
            mode = query.mode.name(),
            origin = %origin,
            max_distance_m = query.max_distance_m,
            candidates = candidates.len(),
            "searching foodbanks"
        );

        let mut rows = match &query.mode {
            SearchMode::Nearest { days } => nearest(&candidates, *days, query.max_results),
            SearchMode::Asap { reference } => match self.config.asap_strategy {
                AsapStrategy::Ranked => self.asap_ranked(&candidates, *reference),
                AsapStrategy::DayMatch => self.asap_day_match(&candidates, *reference),
            },
        };
        rows.truncate(query.max_results);

        debug!(results = rows.len(), "search complete");
        Ok(rows)
    }

    fn resolve(&self, query: &Query) -> Result<Postcode, InvalidQuery> {
        self.resolver
            .resolve(&query.origin)
            .filter(|postcode| self.data.knows_postcode(postcode))
            .ok_or_else(|| InvalidQuery::UnresolvedOrigin(query.origin.to_string()))
    }

    /// Rank by parsed opening hours: soonest opening or closing first,
    /// nearer first on ties. Foodbanks whose next edge falls after the
    /// last look-ahead day are left out.
    fn asap_ranked(&self, candidates: &[Candidate<'_>], reference: NaiveDateTime) -> Vec<ResultRow> {
        let window = self.config.remaining_window(reference);

        let mut ranked: Vec<(Urgency, &Candidate<'_>)> = candidates
            .iter()
            .filter_map(|candidate| {
                let urgency = urgency_at(&candidate.record.hours, reference);
                match urgency {
                    Some(u) if u.sort_key() < window => Some((u, candidate)),
                    Some(_) => {
                        trace!(foodbank = %candidate.record.foodbank.id, "not available within look-ahead");
                        None
                    }
                    None => {
                        trace!(foodbank = %candidate.record.foodbank.id, "opening hours unknown");
                        None
                    }
                }
            })
            .collect();

        ranked.sort_by(|(ua, a), (ub, b)| {
            ua.sort_key()
                .cmp(&ub.sort_key())
                .then(a.distance_m.total_cmp(&b.distance_m))
        });

        ranked
            .into_iter()
            .map(|(urgency, candidate)| row(candidate, Some(urgency)))
            .collect()
    }

    /// Older behaviour: walk the days from today, collecting foodbanks whose
    /// text names that day (or "all"), each day's matches nearest first.
    fn asap_day_match(&self, candidates: &[Candidate<'_>], reference: NaiveDateTime) -> Vec<ResultRow> {
        let today = Day::of(reference);
        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for offset in 0..=self.config.lookahead_days as usize {
            let day = Day::from_index(today.index() as usize + offset);
            for candidate in candidates {
                let text = &candidate.record.foodbank.opening_text;
                if (mentions_day(text, day) || mentions_all(text))
                    && seen.insert(candidate.record.foodbank.id)
                {
                    rows.push(row(candidate, None));
                }
            }
        }

        rows
    }
}

/// Keep foodbanks whose text names one of `days` or says "all".
fn nearest(candidates: &[Candidate<'_>], days: DaySet, limit: usize) -> Vec<ResultRow> {
    candidates
        .iter()
        .filter(|candidate| {
            let text = &candidate.record.foodbank.opening_text;
            mentions_all(text) || days.iter().any(|day| mentions_day(text, day))
        })
        .take(limit)
        .map(|candidate| row(candidate, None))
        .collect()
}

/// Urgency of a foodbank at `reference`, `None` when its hours are unknown.
///
/// `time_to_open` and `time_to_close` are each the minimum over all slots.
/// The foodbank is open when any one of its slots is.
fn urgency_at(hours: &OpeningHours, reference: NaiveDateTime) -> Option<Urgency> {
    match hours {
        OpeningHours::Always => Some(Urgency::always_open()),
        OpeningHours::Scheduled(slots) => {
            let ranked = rank_by_urgency(slots, reference);
            let head = ranked.first()?;
            Some(Urgency {
                time_to_open: ranked.iter().map(|r| r.time_to_open).min()?,
                time_to_close: ranked.iter().map(|r| r.time_to_close).min(),
                open_now: ranked.iter().any(RankedSlot::is_open),
                next_slot: Some(head.slot),
            })
        }
        OpeningHours::Unknown(_) => None,
    }
}

fn row(candidate: &Candidate<'_>, urgency: Option<Urgency>) -> ResultRow {
    ResultRow {
        foodbank: Arc::clone(&candidate.record.foodbank),
        distance_m: candidate.distance_m,
        urgency,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
