//! Fixture Difficulty Rating (FDR).
//!
//! A 1–5 score for how hard an opponent is, from the opponent's standing in the
//! current table and the venue. Two interchangeable methods are available:
//!
//! - **Rank bucket** (default): league position in bands of four.
//!   Positions 1–4 rate 5, 5–8 rate 4, 9–12 rate 3, 13–16 rate 2, 17–20 rate 1.
//! - **Percentile**: where the opponent's points sit between the bottom side
//!   and the leader, scaled to 0–5.
//!
//! Away fixtures add 0.5. Every rating is clamped to `[1, 5]`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{analysis::enrich::Venue, football::types::SeasonTableEntry};


pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;
pub const AWAY_BONUS: f64 = 0.5;

/// Used when every team is level on points, and by views when the opponent is
/// missing from the table.
pub const MID_TIER_RATING: f64 = 3.0;

const TEAMS_PER_BUCKET: usize = 4;

fn clamp_rating(rating: f64) -> f64 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

fn with_venue(rating: f64, venue: Venue) -> f64 {
    match venue {
        Venue::Home => rating,
        Venue::Away => rating + AWAY_BONUS,
    }
}

/// Rating from the opponent's 1-indexed league position.
///
/// Position 0 is treated as top of the table; positions past 20 fall into the
/// bottom bucket.
pub fn rank_bucket_rating(position: usize, venue: Venue) -> f64 {
    let bucket = (position.max(1) - 1) / TEAMS_PER_BUCKET;
    let base = MAX_RATING - bucket.min(4) as f64;
    clamp_rating(with_venue(base, venue))
}

/// Rating from the opponent's points relative to the leader and the bottom side.
pub fn percentile_rating(
    opponent_points: i32,
    leader_points: i32,
    last_place_points: i32,
    venue: Venue,
) -> f64 {
    let range = f64::from(leader_points) - f64::from(last_place_points);
    if range == 0.0 {
        return MID_TIER_RATING;
    }

    let percentile = (f64::from(opponent_points) - f64::from(last_place_points)) / range * 100.0;
    let raw = percentile * MAX_RATING / 100.0;
    clamp_rating(with_venue(raw, venue))
}

/// 1-indexed league position of `team`, if it is in the table.
pub fn league_position(team: &str, table: &[SeasonTableEntry]) -> Option<usize> {
    table
        .iter()
        .position(|entry| entry.name == team)
        .map(|idx| idx + 1)
}

pub fn team_points(team: &str, table: &[SeasonTableEntry]) -> Option<i32> {
    table
        .iter()
        .find(|entry| entry.name == team)
        .map(|entry| entry.points)
}

/// Which rating method to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RatingMethod {
    /// League position in bands of four
    #[default]
    RankBucket,
    /// Points relative to the leader and the bottom side
    Percentile,
}

impl RatingMethod {
    /// Rate a fixture against `opponent`. `None` when the opponent is not in the table.
    pub fn rate(&self, table: &[SeasonTableEntry], opponent: &str, venue: Venue) -> Option<f64> {
        match self {
            RatingMethod::RankBucket => {
                league_position(opponent, table).map(|pos| rank_bucket_rating(pos, venue))
            }
            RatingMethod::Percentile => {
                let opponent_points = team_points(opponent, table)?;
                let leader = table.first()?.points;
                let last = table.last()?.points;
                Some(percentile_rating(opponent_points, leader, last, venue))
            }
        }
    }
}

impl fmt::Display for RatingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingMethod::RankBucket => write!(f, "rank bucket"),
            RatingMethod::Percentile => write!(f, "points percentile"),
        }
    }
}

/// One decimal place, with a trailing `.0` dropped: `4.0` → `"4"`, `4.5` → `"4.5"`.
pub fn format_rating(rating: f64) -> String {
    let fixed = format!("{:.1}", rating);
    match fixed.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}

/// Difficulty band of a rating, easiest first.
///
/// The bands are `[1, 1.5]`, `(1.5, 2.5]`, `(2.5, 3.5]`, `(3.5, 4.5]`, `(4.5, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    VeryEasy,
    Easy,
    Moderate,
    Hard,
    VeryHard,
}

impl Severity {
    pub fn from_rating(rating: f64) -> Self {
        if rating <= 1.5 {
            Severity::VeryEasy
        } else if rating <= 2.5 {
            Severity::Easy
        } else if rating <= 3.5 {
            Severity::Moderate
        } else if rating <= 4.5 {
            Severity::Hard
        } else {
            Severity::VeryHard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::VeryEasy => "very easy",
            Severity::Easy => "easy",
            Severity::Moderate => "moderate",
            Severity::Hard => "hard",
            Severity::VeryHard => "very hard",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
