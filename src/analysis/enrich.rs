//! A match seen from one team's side.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    football::types::{Match, TeamScore},
    FormError, Result,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn letter(&self) -> char {
        match self {
            Venue::Home => 'H',
            Venue::Away => 'A',
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::Home => write!(f, "Home"),
            Venue::Away => write!(f, "Away"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// League points earned.
    pub fn points(&self) -> u8 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Draw => 'D',
            MatchResult::Loss => 'L',
        }
    }
}

/// Presentation tag for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Green,
    Gray,
    Red,
    /// No result yet
    Neutral,
}

impl DisplayColor {
    pub fn for_result(result: Option<MatchResult>) -> Self {
        match result {
            Some(MatchResult::Win) => DisplayColor::Green,
            Some(MatchResult::Draw) => DisplayColor::Gray,
            Some(MatchResult::Loss) => DisplayColor::Red,
            None => DisplayColor::Neutral,
        }
    }
}

/// Outcome of a scoreline for the side playing at `venue`.
pub fn score_result(venue: Venue, home_score: u16, away_score: u16) -> MatchResult {
    if home_score == away_score {
        return MatchResult::Draw;
    }

    let won = match venue {
        Venue::Home => home_score > away_score,
        Venue::Away => away_score > home_score,
    };

    if won {
        MatchResult::Win
    } else {
        MatchResult::Loss
    }
}

/// A match paired with the perspective it was enriched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedMatch {
    pub fixture: Match,
    pub perspective: String,
    pub opponent: TeamScore,
    pub venue: Venue,
    /// Only set once the match is finished.
    pub result: Option<MatchResult>,
    pub color: DisplayColor,
}

impl EnrichedMatch {
    pub fn points(&self) -> Option<u8> {
        self.result.map(|r| r.points())
    }

    /// `home-away` score, e.g. `2-1`.
    pub fn scoreline(&self) -> String {
        format!(
            "{}-{}",
            self.fixture.home_team.score, self.fixture.away_team.score
        )
    }
}

/// Enrich `fixture` from the point of view of `perspective`.
///
/// Unfinished matches carry no result and a neutral color, whatever the
/// placeholder score says.
pub fn enrich(fixture: &Match, perspective: &str) -> Result<EnrichedMatch> {
    let (venue, opponent) = if fixture.home_team.name == perspective {
        (Venue::Home, &fixture.away_team)
    } else if fixture.away_team.name == perspective {
        (Venue::Away, &fixture.home_team)
    } else {
        return Err(FormError::UnrelatedMatch {
            team: perspective.to_string(),
            home: fixture.home_team.name.clone(),
            away: fixture.away_team.name.clone(),
        });
    };

    let result = fixture.is_finished().then(|| {
        score_result(venue, fixture.home_team.score, fixture.away_team.score)
    });

    Ok(EnrichedMatch {
        fixture: fixture.clone(),
        perspective: perspective.to_string(),
        opponent: opponent.clone(),
        venue,
        result,
        color: DisplayColor::for_result(result),
    })
}
