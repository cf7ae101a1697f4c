//! Domain types for the foodbank finder.
//!
//! This module contains the value types shared by the parser, the ranker
//! and the search. Types that wrap text (postcodes, times) validate at
//! construction time, so code that receives them can trust their form.

mod clock;
mod foodbank;
mod postcode;
mod slot;
mod weekday;

pub use clock::{ClockTime, InvalidClockTime};
pub use foodbank::{DistanceEntry, Foodbank, FoodbankId};
pub use postcode::{InvalidPostcode, Postcode};
pub use slot::OpeningSlot;
pub use weekday::{Day, DaySet};
