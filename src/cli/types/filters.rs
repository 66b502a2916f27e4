//! Ordering options for CLI views.

use std::fmt;

/// Row/column order of the home-away cross table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CrossTableOrder {
    /// Current league standing, leader first
    #[default]
    LeaguePosition,
    /// Alphabetical by full team name
    TeamName,
}

impl fmt::Display for CrossTableOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrossTableOrder::LeaguePosition => "Order by league position",
            CrossTableOrder::TeamName => "Order by team name",
        };
        write!(f, "{}", s)
    }
}
