//! Free-text opening-hours parser.
//!
//! Foodbank listings describe their hours by hand, one rule per line:
//!
//! ```text
//! Tuesday 11.00 - 13.00
//! Wednesday to Friday 11.30 - 14.30
//! Thursday to Tuesday, 9.00 - 14.00
//! ```
//!
//! Each line is normalized, split into words, and only weekday names and
//! time-shaped words are kept. Two days on a line form an inclusive range
//! walked forward through the week, so a range may wrap past Sunday.

use tracing::debug;

use crate::domain::{ClockTime, Day, OpeningSlot};

use super::error::ParseError;

/// A word of a line that the parser cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Day(Day),
    Time(&'a str),
}

/// Days named together, followed by the times that apply to them.
#[derive(Debug, Default)]
struct Group<'a> {
    days: Vec<Day>,
    times: Vec<&'a str>,
}

impl Group<'_> {
    fn is_empty(&self) -> bool {
        self.days.is_empty() && self.times.is_empty()
    }
}

/// Lower-case the line and drop every character except letters, digits,
/// `.`, `:`, space and `-`. Other whitespace becomes a space.
fn normalize(line: &str) -> String {
    line.chars()
        .map(|c| {
            if c.is_whitespace() {
                ' '
            } else {
                c.to_ascii_lowercase()
            }
        })
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | ':' | ' ' | '-'))
        .collect()
}

fn classify(word: &str) -> Option<Token<'_>> {
    if let Some(day) = Day::from_token(word.trim_matches(|c| c == '.' || c == ':')) {
        Some(Token::Day(day))
    } else if ClockTime::looks_like_time(word) {
        Some(Token::Time(word))
    } else {
        None
    }
}

/// Split the classified words into groups. A new group starts whenever a
/// day follows a time; times met before any day stay with the first group.
///
/// Days trailing the last rule with no times of their own ("except bank
/// holiday Mondays", "closed Friday") are dropped.
fn group_tokens<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> Vec<Group<'a>> {
    let mut groups = Vec::new();
    let mut current = Group::default();

    for token in tokens {
        match token {
            Token::Day(day) => {
                if !current.days.is_empty() && !current.times.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
                current.days.push(day);
            }
            Token::Time(time) => current.times.push(time),
        }
    }

    let trailing_days = current.times.is_empty() && !groups.is_empty();
    if !current.is_empty() && !trailing_days {
        groups.push(current);
    }
    groups
}

/// Walk forward from `first` to `last` inclusive, wrapping after Sunday.
fn day_range(first: Day, last: Day) -> impl Iterator<Item = Day> {
    let len = first.days_until(last) as usize + 1;
    (0..len).map(move |offset| Day::from_index(first.index() as usize + offset))
}

fn expand_group(group: &Group<'_>, line: &str, slots: &mut Vec<OpeningSlot>) -> Result<(), ParseError> {
    let (Some(&first), Some(&last)) = (group.days.first(), group.days.last()) else {
        return Ok(());
    };

    if group.days.len() > 2 {
        return Err(ParseError::TooManyDays {
            line: line.to_string(),
            count: group.days.len(),
        });
    }

    if group.times.len() < 2 || group.times.len() % 2 != 0 {
        return Err(ParseError::MissingTimes {
            line: line.to_string(),
        });
    }

    let times = group
        .times
        .iter()
        .map(|token| {
            ClockTime::parse_token(token).map_err(|_| ParseError::InvalidTime {
                line: line.to_string(),
                token: (*token).to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for day in day_range(first, last) {
        for window in times.chunks_exact(2) {
            slots.push(OpeningSlot::new(day, window[0], window[1]));
        }
    }

    Ok(())
}

/// Parse one line of opening-hours text.
///
/// A line with no weekday names yields no slots and is not an error. A
/// line that names days must give an open and close time for them.
/// Several rules on one line ("Tuesday 11.00-13.00, Friday 11.00-13.00")
/// and several windows for the same days ("Monday 10.00-12.00 and
/// 13.00-15.00") are both read.
///
/// # Examples
///
/// ```
/// use foodbank_finder::domain::Day;
/// use foodbank_finder::hours::parse_line;
///
/// let slots = parse_line("Thursday to Tuesday, 9.00 - 14.00").unwrap();
/// let days: Vec<Day> = slots.iter().map(|s| s.day).collect();
/// assert_eq!(
///     days,
///     [Day::Thursday, Day::Friday, Day::Saturday, Day::Sunday, Day::Monday, Day::Tuesday]
/// );
/// ```
pub fn parse_line(line: &str) -> Result<Vec<OpeningSlot>, ParseError> {
    let normalized = normalize(line);
    let tokens: Vec<Token<'_>> = normalized
        .split([' ', '-'])
        .filter(|word| !word.is_empty())
        .filter_map(classify)
        .collect();

    if !tokens.iter().any(|t| matches!(t, Token::Day(_))) {
        return Ok(Vec::new());
    }

    let mut slots = Vec::new();
    for group in group_tokens(tokens) {
        expand_group(&group, line.trim(), &mut slots)?;
    }
    Ok(slots)
}

/// Parse a whole opening-hours entry, one rule per line.
///
/// Lines that fail to parse are skipped. The entry only fails, with
/// [`ParseError::NoSlots`], when no line yields any slot.
///
/// # Examples
///
/// ```
/// use foodbank_finder::hours::parse_entry;
///
/// let slots = parse_entry("Wednesday 13.00 - 15.00\nFriday 13.00 - 15.00").unwrap();
/// assert_eq!(slots.len(), 2);
///
/// assert!(parse_entry("Please phone ahead").is_err());
/// ```
pub fn parse_entry(text: &str) -> Result<Vec<OpeningSlot>, ParseError> {
    let mut slots = Vec::new();
    let mut rejected = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match parse_line(line) {
            Ok(found) => slots.extend(found),
            Err(e) => {
                debug!(error = %e, "skipping unreadable opening-hours line");
                rejected.push(e);
            }
        }
    }

    if slots.is_empty() {
        return Err(ParseError::NoSlots {
            text: text.to_string(),
            rejected,
        });
    }

    Ok(slots)
}
