//! Time-related types for Premier League seasons and matchweeks.

use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of matchweeks in a 20-team Premier League season.
pub const MATCHWEEKS_PER_SEASON: u8 = 38;

/// Type-safe wrapper for a season, identified by the year it starts in.
///
/// `Season::new(2025)` is the 2025/26 campaign.
///
/// # Examples
///
/// ```rust
/// use pl_form::Season;
///
/// let season = Season::new(2024);
/// assert_eq!(season.short_label(), "24/25");
/// assert_eq!(season.previous(1), Season::new(2023));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The season `n` years earlier, saturating at year 0.
    pub fn previous(&self, n: u16) -> Self {
        Self(self.0.saturating_sub(n))
    }

    /// Two-digit label used in table headers, e.g. `"24/25"`.
    pub fn short_label(&self) -> String {
        format!("{:02}/{:02}", self.0 % 100, self.0.saturating_add(1) % 100)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u16>()
            .map(Self)
            .map_err(|_| FormError::InvalidSeason {
                value: s.to_string(),
            })
    }
}

/// Type-safe wrapper for matchweek numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matchweek(pub u8);

impl Matchweek {
    pub fn new(week: u8) -> Self {
        Self(week)
    }

    /// Build a matchweek, rejecting anything outside 1..=38.
    pub fn try_new(week: u8) -> Result<Self> {
        if (1..=MATCHWEEKS_PER_SEASON).contains(&week) {
            Ok(Self(week))
        } else {
            Err(FormError::InvalidMatchweek {
                value: week.to_string(),
            })
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for Matchweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Matchweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Matchweek {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        let week = s
            .trim()
            .parse::<u8>()
            .map_err(|_| FormError::InvalidMatchweek {
                value: s.to_string(),
            })?;
        Self::try_new(week)
    }
}
