//! Season data: wire types, fetching and the cached season provider.

pub mod http;
pub mod provider;
pub mod types;

pub use provider::{SeasonCache, SeasonDataProvider, SeasonSet};
pub use types::{Match, Period, SeasonTableEntry, TeamScore};
