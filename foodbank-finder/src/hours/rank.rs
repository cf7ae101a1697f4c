//! Urgency ranking of opening slots.
//!
//! Every slot recurs weekly, so the time until its next opening and its
//! next closing is always somewhere in `[0, 1 week)`. The ranker computes
//! both for each slot relative to a reference instant and orders slots by
//! whichever edge comes first. An open slot surfaces through its closing
//! edge; a closed one through its opening edge.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::domain::{ClockTime, Day, OpeningSlot};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// An opening slot with its distance in time from a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedSlot {
    pub slot: OpeningSlot,
    /// Time until the slot next opens.
    pub time_to_open: Duration,
    /// Time until the slot next closes.
    pub time_to_close: Duration,
}

impl RankedSlot {
    /// Rank a single slot against `reference`.
    pub fn new(slot: OpeningSlot, reference: NaiveDateTime) -> Self {
        let day_delta = Day::of(reference).days_until(slot.day) as i64;
        let now = reference.num_seconds_from_midnight() as i64;

        Self {
            slot,
            time_to_open: until(day_delta, slot.open, now),
            time_to_close: until(day_delta, slot.close, now),
        }
    }

    /// The sooner of the next opening and the next closing.
    pub fn urgency(&self) -> Duration {
        self.time_to_open.min(self.time_to_close)
    }

    /// Whether the reference instant falls inside the slot.
    pub fn is_open(&self) -> bool {
        self.time_to_close < self.time_to_open
    }
}

/// Seconds from `now` (seconds since midnight on the reference day) until
/// `edge` on the day `day_delta` days ahead, wrapped into one week.
fn until(day_delta: i64, edge: ClockTime, now: i64) -> Duration {
    let raw = day_delta * SECONDS_PER_DAY + edge.seconds_from_midnight() - now;
    Duration::seconds(raw.rem_euclid(SECONDS_PER_WEEK))
}

/// Rank slots by urgency relative to `reference`.
///
/// The input is only read; each returned [`RankedSlot`] carries a copy of
/// its slot. Slots are ordered by [`RankedSlot::urgency`], ties keeping
/// their input order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use foodbank_finder::hours::{parse_entry, rank_by_urgency};
///
/// let slots = parse_entry("Monday 00.10 - 02.00\nFriday 10.00 - 12.00").unwrap();
/// // 2023-06-11 is a Sunday.
/// let now = NaiveDate::from_ymd_opt(2023, 6, 11).unwrap().and_hms_opt(23, 50, 0).unwrap();
///
/// let ranked = rank_by_urgency(&slots, now);
/// assert_eq!(ranked[0].time_to_open, chrono::Duration::minutes(20));
/// ```
pub fn rank_by_urgency(slots: &[OpeningSlot], reference: NaiveDateTime) -> Vec<RankedSlot> {
    let mut ranked: Vec<RankedSlot> = slots
        .iter()
        .map(|slot| RankedSlot::new(*slot, reference))
        .collect();
    ranked.sort_by_key(RankedSlot::urgency);
    ranked
}

/// The most urgent slot, if any.
pub fn next_opening(slots: &[OpeningSlot], reference: NaiveDateTime) -> Option<RankedSlot> {
    slots
        .iter()
        .map(|slot| RankedSlot::new(*slot, reference))
        .min_by_key(RankedSlot::urgency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// An instant in the week of Monday 2023-05-08.
    fn at(day: Day, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 5, 8 + day.index() as u32)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn slot(day: Day, open: (u32, u32), close: (u32, u32)) -> OpeningSlot {
        OpeningSlot::new(
            day,
            ClockTime::new(open.0, open.1).unwrap(),
            ClockTime::new(close.0, close.1).unwrap(),
        )
    }

    #[test]
    fn later_today() {
        let r = RankedSlot::new(slot(Day::Wednesday, (13, 0), (15, 0)), at(Day::Wednesday, 12, 0));
        assert_eq!(r.time_to_open, Duration::hours(1));
        assert_eq!(r.time_to_close, Duration::hours(3));
        assert!(!r.is_open());
        assert_eq!(r.urgency(), Duration::hours(1));
    }

    #[test]
    fn currently_open() {
        let r = RankedSlot::new(slot(Day::Monday, (10, 0), (12, 0)), at(Day::Monday, 10, 30));
        assert_eq!(r.time_to_close, Duration::minutes(90));
        assert_eq!(
            r.time_to_open,
            Duration::days(7) - Duration::minutes(30)
        );
        assert!(r.is_open());
        assert_eq!(r.urgency(), Duration::minutes(90));
    }

    #[test]
    fn just_closed_waits_a_week() {
        let r = RankedSlot::new(slot(Day::Monday, (10, 0), (12, 0)), at(Day::Monday, 12, 30));
        assert_eq!(r.time_to_open, Duration::days(7) - Duration::minutes(150));
        assert_eq!(r.time_to_close, Duration::days(7) - Duration::minutes(30));
        assert!(!r.is_open());
    }

    #[test]
    fn opening_edge_is_zero() {
        let r = RankedSlot::new(slot(Day::Friday, (9, 0), (11, 0)), at(Day::Friday, 9, 0));
        assert_eq!(r.time_to_open, Duration::zero());
        assert_eq!(r.urgency(), Duration::zero());
    }

    #[test]
    fn wraps_sunday_night_to_monday() {
        let r = RankedSlot::new(slot(Day::Monday, (0, 10), (2, 0)), at(Day::Sunday, 23, 50));
        assert_eq!(r.time_to_open, Duration::minutes(20));
        assert_eq!(r.time_to_close, Duration::minutes(130));
    }

    #[test]
    fn earlier_day_wraps_forward() {
        let r = RankedSlot::new(slot(Day::Tuesday, (11, 0), (13, 0)), at(Day::Thursday, 11, 0));
        assert_eq!(r.time_to_open, Duration::days(5));
    }

    #[test]
    fn seconds_are_respected() {
        let reference = at(Day::Monday, 9, 59) + Duration::seconds(30);
        let r = RankedSlot::new(slot(Day::Monday, (10, 0), (11, 0)), reference);
        assert_eq!(r.time_to_open, Duration::seconds(30));
    }

    #[test]
    fn open_now_beats_opens_in_three_days() {
        let reference = at(Day::Monday, 10, 30);
        let later = slot(Day::Thursday, (10, 0), (12, 0));
        let open_now = slot(Day::Monday, (10, 0), (12, 0));

        let ranked = rank_by_urgency(&[later, open_now], reference);
        assert_eq!(ranked[0].slot, open_now);
        assert_eq!(ranked[1].slot, later);
        assert!(ranked[0].time_to_close < ranked[1].time_to_open);
    }

    #[test]
    fn input_untouched() {
        let slots = vec![
            slot(Day::Friday, (10, 0), (12, 0)),
            slot(Day::Monday, (10, 0), (12, 0)),
        ];
        let before = slots.clone();
        let ranked = rank_by_urgency(&slots, at(Day::Monday, 8, 0));
        assert_eq!(slots, before);
        assert_eq!(ranked[0].slot, before[1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let a = slot(Day::Monday, (10, 0), (12, 0));
        let b = slot(Day::Monday, (10, 0), (13, 0));
        let ranked = rank_by_urgency(&[a, b], at(Day::Monday, 9, 0));
        assert_eq!(ranked[0].slot, a);
        assert_eq!(ranked[1].slot, b);
    }

    #[test]
    fn next_opening_is_head_of_ranking() {
        let slots = [
            slot(Day::Saturday, (10, 0), (12, 0)),
            slot(Day::Wednesday, (14, 0), (16, 0)),
        ];
        let reference = at(Day::Tuesday, 18, 0);
        assert_eq!(
            next_opening(&slots, reference),
            rank_by_urgency(&slots, reference).first().copied()
        );
        assert_eq!(next_opening(&[], reference), None);
    }

    #[test]
    fn empty() {
        assert!(rank_by_urgency(&[], at(Day::Monday, 0, 0)).is_empty());
    }
}
