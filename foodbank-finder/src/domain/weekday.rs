//! Weekday handling shared by the parser, the ranker and the day filter.
//!
//! There is exactly one day numbering in this crate: ISO order, Monday = 0
//! through Sunday = 6. Every component converts through [`Day`] rather than
//! keeping its own name-to-index table.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Weekday};

/// A day of the week.
///
/// # Examples
///
/// ```
/// use foodbank_finder::domain::Day;
///
/// assert_eq!(Day::from_token("Mondays"), Some(Day::Monday));
/// assert_eq!(Day::Monday.index(), 0);
/// assert_eq!(Day::Sunday.index(), 6);
/// assert_eq!(Day::Thursday.days_until(Day::Tuesday), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in week order, starting on Monday.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position in the week, Monday = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Day at the given position, wrapping modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Lower-case English name, e.g. `"monday"`.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Match a single word against the day names.
    ///
    /// Matching ignores case and accepts a trailing "s" ("Mondays").
    pub fn from_token(token: &str) -> Option<Self> {
        let lower = token.to_ascii_lowercase();
        let stem = lower.strip_suffix('s').unwrap_or(&lower);
        Self::ALL
            .into_iter()
            .find(|day| day.name() == lower || day.name() == stem)
    }

    /// The following day, wrapping Sunday to Monday.
    pub fn succ(self) -> Self {
        Self::from_index(self.index() as usize + 1)
    }

    /// Number of days walking forward from `self` to `other` (0..=6).
    pub fn days_until(self, other: Day) -> u8 {
        (other.index() + 7 - self.index()) % 7
    }

    /// Day of the week of a timestamp.
    pub fn of(instant: NaiveDateTime) -> Self {
        instant.weekday().into()
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Self::from_index(weekday.num_days_from_monday() as usize)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

/// A set of weekdays, stored as a bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaySet(u8);

impl DaySet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every day of the week.
    pub fn all() -> Self {
        Self(0b111_1111)
    }

    pub fn insert(&mut self, day: Day) {
        self.0 |= 1 << day.index();
    }

    pub fn contains(&self, day: Day) -> bool {
        self.0 & (1 << day.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in week order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Day> + '_ {
        Day::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Day> for DaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        let mut set = DaySet::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn iso_indices() {
        assert_eq!(Day::Monday.index(), 0);
        assert_eq!(Day::Wednesday.index(), 2);
        assert_eq!(Day::Sunday.index(), 6);
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(Day::from_index(i), *day);
        }
        assert_eq!(Day::from_index(7), Day::Monday);
    }

    #[test]
    fn token_matching_ignores_case_and_plural() {
        assert_eq!(Day::from_token("monday"), Some(Day::Monday));
        assert_eq!(Day::from_token("MONDAY"), Some(Day::Monday));
        assert_eq!(Day::from_token("Mondays"), Some(Day::Monday));
        assert_eq!(Day::from_token("SATURDAYS"), Some(Day::Saturday));
    }

    #[test]
    fn token_matching_rejects_other_words() {
        assert_eq!(Day::from_token("mon"), None);
        assert_eq!(Day::from_token("to"), None);
        assert_eq!(Day::from_token(""), None);
        assert_eq!(Day::from_token("s"), None);
        assert_eq!(Day::from_token("mondayss"), None);
    }

    #[test]
    fn succ_wraps() {
        assert_eq!(Day::Friday.succ(), Day::Saturday);
        assert_eq!(Day::Sunday.succ(), Day::Monday);
    }

    #[test]
    fn days_until_walks_forward() {
        assert_eq!(Day::Monday.days_until(Day::Monday), 0);
        assert_eq!(Day::Monday.days_until(Day::Sunday), 6);
        assert_eq!(Day::Sunday.days_until(Day::Monday), 1);
        assert_eq!(Day::Thursday.days_until(Day::Tuesday), 5);
    }

    #[test]
    fn from_chrono() {
        assert_eq!(Day::from(Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);

        // 2023-05-11 was a Thursday.
        let instant = NaiveDate::from_ymd_opt(2023, 5, 11)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(Day::of(instant), Day::Thursday);
    }

    #[test]
    fn display() {
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn day_set() {
        let mut set = DaySet::new();
        assert!(set.is_empty());
        set.insert(Day::Sunday);
        set.insert(Day::Monday);
        set.insert(Day::Monday);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Day::Monday));
        assert!(!set.contains(Day::Tuesday));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Day::Monday, Day::Sunday]);
        assert_eq!(DaySet::all().len(), 7);
        assert_eq!(format!("{:?}", set), "{Monday, Sunday}");
    }
}
