//! Type-safe wrappers and enums for Premier League season data.

pub mod filters;
pub mod time;


pub use filters::CrossTableOrder;
pub use time::{Matchweek, Season};
