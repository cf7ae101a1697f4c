//! Opening hours: reading free text into slots and ranking slots by how
//! soon they open or close.

mod error;
mod opening;
mod parse;
mod rank;

pub use error::ParseError;
pub use opening::{OpeningHours, mentions_all, mentions_day};
pub use parse::{parse_entry, parse_line};
pub use rank::{RankedSlot, next_opening, rank_by_urgency};
