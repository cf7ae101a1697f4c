//! Foodbank finder.
//!
//! Answers "which foodbank can I get to, and when is it open?" from a
//! static table of foodbanks and a precomputed postcode distance table.
//! Free-text opening hours are parsed into weekly slots and ranked by how
//! soon each foodbank opens (or closes, if it is already open).

pub mod domain;
pub mod hours;
pub mod reference;
pub mod search;
