use crate::cli::types::{Matchweek, Season};
use chrono::NaiveDateTime;
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::fmt;


/// Kickoff timestamps arrive as `2025-08-15 19:00:00` (UTC).
pub const KICKOFF_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The season tag is a string in the match feed but a number elsewhere.
fn de_season_str_or_num<'de, D>(deserializer: D) -> Result<Season, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u16),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(Season::new(n)),
        Raw::Str(s) => s.trim().parse::<u16>().map(Season::new).map_err(D::Error::custom),
    }
}

/// Completion state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Period {
    Scheduled,
    InProgress,
    Finished,
}

impl Period {
    pub fn is_finished(&self) -> bool {
        matches!(self, Period::Finished)
    }
}

impl From<String> for Period {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "FullTime" => Period::Finished,
            "PreMatch" => Period::Scheduled,
            _ => Period::InProgress,
        }
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        match period {
            Period::Scheduled => "PreMatch",
            Period::InProgress => "Live",
            Period::Finished => "FullTime",
        }
        .to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Scheduled => "Scheduled",
            Period::InProgress => "In progress",
            Period::Finished => "Finished",
        };
        write!(f, "{}", s)
    }
}

/// One side of a match: the team and its scoreline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub abbr: String,
    #[serde(default)]
    pub score: u16,
    #[serde(default)]
    pub half_time_score: u16,
    #[serde(default)]
    pub red_cards: u16,
}

impl TeamScore {
    pub fn new(name: impl Into<String>, abbr: impl Into<String>, score: u16) -> Self {
        let name = name.into();
        Self {
            id: String::new(),
            short_name: name.clone(),
            name,
            abbr: abbr.into(),
            score,
            half_time_score: 0,
            red_cards: 0,
        }
    }
}

/// A single fixture as supplied by the season feed. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub match_id: String,
    #[serde(deserialize_with = "de_season_str_or_num")]
    pub season: Season,
    #[serde(rename = "matchWeek")]
    pub matchweek: Matchweek,
    pub kickoff: String,
    pub period: Period,
    pub home_team: TeamScore,
    pub away_team: TeamScore,
    #[serde(default)]
    pub ground: Option<String>,
}

impl Match {
    pub fn new(
        season: Season,
        matchweek: Matchweek,
        kickoff: impl Into<String>,
        home_team: TeamScore,
        away_team: TeamScore,
        period: Period,
    ) -> Self {
        Self {
            match_id: String::new(),
            season,
            matchweek,
            kickoff: kickoff.into(),
            period,
            home_team,
            away_team,
            ground: None,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team.name == team || self.away_team.name == team
    }

    pub fn is_finished(&self) -> bool {
        self.period.is_finished()
    }

    /// Parsed kickoff time, `None` when the feed carries an unexpected format.
    pub fn kickoff_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.kickoff, KICKOFF_FORMAT).ok()
    }
}

/// One row of a league table. Rank is the row's position, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeasonTableEntry {
    pub name: String,
    #[serde(default)]
    pub abbr: String,
    pub points: i32,
    pub gf: i32,
    pub ga: i32,
    pub gd: i32,
}

impl SeasonTableEntry {
    pub fn new(name: impl Into<String>, abbr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbr: abbr.into(),
            points: 0,
            gf: 0,
            ga: 0,
            gd: 0,
        }
    }
}

/// Top-level envelope of `<season>.json`
#[derive(Debug, Deserialize)]
pub struct SeasonMatchesResponse {
    #[serde(deserialize_with = "de_season_str_or_num")]
    pub season: Season,
    #[serde(default)]
    pub competition: Option<u32>,
    #[serde(default)]
    pub matchweeks: Vec<MatchweekPage>,
}

#[derive(Debug, Deserialize)]
pub struct MatchweekPage {
    pub matchweek: u8,
    pub data: MatchweekData,
}

#[derive(Debug, Deserialize)]
pub struct MatchweekData {
    #[serde(default)]
    pub data: Vec<Match>,
}

impl SeasonMatchesResponse {
    /// All matches of the season, in matchweek order.
    pub fn into_matches(mut self) -> Vec<Match> {
        self.matchweeks.sort_by_key(|mw| mw.matchweek);
        self.matchweeks
            .into_iter()
            .flat_map(|mw| mw.data.data)
            .collect()
    }
}
