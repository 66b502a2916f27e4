//! Comparison views assembled from enrichment, the cross-season index and FDR.
//!
//! - season over season: one team's fixtures against the same fixtures a year earlier
//! - remaining fixtures: unplayed matches of several teams with difficulty and history
//! - cross table: every home/away result of a season in one grid
//! - team form: recent results and the next fixture of one team

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    analysis::{
        enrich::{enrich, score_result, DisplayColor, EnrichedMatch, Venue},
        fdr::{league_position, RatingMethod, MID_TIER_RATING},
        identity::PromotionMap,
        index::MatchIndex,
    },
    cli::types::CrossTableOrder,
    football::types::{Match, SeasonTableEntry, TeamScore},
    FormError, Matchweek, Result, Season,
};

#[cfg(test)]
mod tests;

/// Render a signed difference: `+3`, `0`, `-1`.
pub fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Every team appearing in `matches`, alphabetically.
pub fn teams_in(matches: &[Match]) -> Vec<String> {
    matches
        .iter()
        .flat_map(|m| [m.home_team.name.as_str(), m.away_team.name.as_str()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Seasons in which `team` played, most recent first.
pub fn comparison_seasons<'a, I>(seasons: I, team: &str) -> Vec<Season>
where
    I: IntoIterator<Item = (Season, &'a [Match])>,
{
    let mut played: Vec<Season> = seasons
        .into_iter()
        .filter(|(_, matches)| matches.iter().any(|m| m.involves(team)))
        .map(|(season, _)| season)
        .collect();
    played.sort_by(|a, b| b.cmp(a));
    played.dedup();
    played
}

/// One anchor-season fixture next to its counterpart from the compared season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// 1-based position in the team's fixture list
    pub ordinal: usize,
    pub matchweek: Matchweek,
    pub opponent: TeamScore,
    pub venue: Venue,
    pub anchor: EnrichedMatch,
    pub compared: Option<EnrichedMatch>,
    /// Anchor points minus compared points; 0 until the anchor match is finished.
    pub point_diff: i32,
    pub aggregate_diff: i32,
    pub compared_total: u32,
    /// Points so far, with unplayed anchor fixtures assumed to go as they did in the compared season.
    pub projected_total: u32,
}

impl ComparisonRow {
    /// Compared opponent when promotion swapped it for another side.
    pub fn substituted_opponent(&self) -> Option<&str> {
        self.compared
            .as_ref()
            .map(|c| c.opponent.name.as_str())
            .filter(|name| *name != self.opponent.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonComparison {
    pub team: String,
    pub anchor_season: Season,
    pub compared_season: Season,
    pub rows: Vec<ComparisonRow>,
}

impl SeasonComparison {
    pub fn aggregate_diff(&self) -> i32 {
        self.rows.last().map_or(0, |r| r.aggregate_diff)
    }

    pub fn compared_total(&self) -> u32 {
        self.rows.last().map_or(0, |r| r.compared_total)
    }

    pub fn projected_total(&self) -> u32 {
        self.rows.last().map_or(0, |r| r.projected_total)
    }
}

/// Pair each of `team`'s anchor-season fixtures with the equivalent fixture in
/// `compared_index`'s season.
pub fn compare_seasons(
    team: &str,
    anchor_season: Season,
    anchor_matches: &[Match],
    compared_index: &MatchIndex,
    promotions: &PromotionMap,
) -> Result<SeasonComparison> {
    let mut rows = Vec::new();
    let mut aggregate_diff = 0i32;
    let mut compared_total = 0u32;
    let mut projected_total = 0u32;

    for fixture in anchor_matches.iter().filter(|m| m.involves(team)) {
        let anchor = enrich(fixture, team)?;
        let compared = compared_index
            .lookup(
                promotions,
                anchor_season,
                &anchor.opponent.name,
                team,
                anchor.venue,
            )?
            .cloned();

        let compared_points = compared.as_ref().and_then(|c| c.points()).unwrap_or(0);
        let point_diff = match anchor.points() {
            Some(points) => i32::from(points) - i32::from(compared_points),
            None => 0,
        };
        aggregate_diff += point_diff;
        compared_total += u32::from(compared_points);
        projected_total += u32::from(anchor.points().unwrap_or(compared_points));

        rows.push(ComparisonRow {
            ordinal: rows.len() + 1,
            matchweek: fixture.matchweek,
            opponent: anchor.opponent.clone(),
            venue: anchor.venue,
            anchor,
            compared,
            point_diff,
            aggregate_diff,
            compared_total,
            projected_total,
        });
    }

    if rows.is_empty() {
        return Err(FormError::UnknownTeam {
            team: team.to_string(),
            season: anchor_season.as_u16(),
        });
    }

    Ok(SeasonComparison {
        team: team.to_string(),
        anchor_season,
        compared_season: compared_index.season(),
        rows,
    })
}

/// The equivalent fixture from one earlier season, if there was one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalFixture {
    pub season: Season,
    pub fixture: Option<EnrichedMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainingFixture {
    pub opponent: TeamScore,
    pub venue: Venue,
    pub rating: f64,
    pub history: Vec<HistoricalFixture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamFixture {
    pub team: String,
    /// `None` when the team has already played this matchweek or has no fixture in it.
    pub fixture: Option<RemainingFixture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainingMatchweek {
    pub matchweek: Matchweek,
    /// One entry per selected team, in selection order.
    pub teams: Vec<TeamFixture>,
}

/// Unplayed fixtures of `teams` in the current season, grouped by matchweek.
///
/// `history` holds one index per earlier season, each covering every selected
/// team, most recent first. Matchweeks in which none of the teams has anything
/// left to play are omitted.
pub fn remaining_fixtures(
    teams: &[String],
    current_season: Season,
    current_matches: &[Match],
    history: &[MatchIndex],
    table: &[SeasonTableEntry],
    promotions: &PromotionMap,
    method: RatingMethod,
) -> Result<Vec<RemainingMatchweek>> {
    let mut by_week: BTreeMap<Matchweek, HashMap<&str, Option<RemainingFixture>>> = BTreeMap::new();

    for fixture in current_matches {
        for team in teams.iter().filter(|t| fixture.involves(t)) {
            let entry = if fixture.is_finished() {
                None
            } else {
                Some(remaining_fixture(
                    fixture,
                    team,
                    current_season,
                    history,
                    table,
                    promotions,
                    method,
                )?)
            };
            by_week
                .entry(fixture.matchweek)
                .or_default()
                .insert(team.as_str(), entry);
        }
    }

    Ok(by_week
        .into_iter()
        .filter(|(_, fixtures)| fixtures.values().any(Option::is_some))
        .map(|(matchweek, mut fixtures)| RemainingMatchweek {
            matchweek,
            teams: teams
                .iter()
                .map(|team| TeamFixture {
                    team: team.clone(),
                    fixture: fixtures.remove(team.as_str()).flatten(),
                })
                .collect(),
        })
        .collect())
}

fn remaining_fixture(
    fixture: &Match,
    team: &str,
    current_season: Season,
    history: &[MatchIndex],
    table: &[SeasonTableEntry],
    promotions: &PromotionMap,
    method: RatingMethod,
) -> Result<RemainingFixture> {
    let current = enrich(fixture, team)?;
    let rating = method
        .rate(table, &current.opponent.name, current.venue)
        .unwrap_or(MID_TIER_RATING);

    let history = history
        .iter()
        .map(|index| -> Result<HistoricalFixture> {
            let paired = index.lookup(
                promotions,
                current_season,
                &current.opponent.name,
                team,
                current.venue,
            )?;
            Ok(HistoricalFixture {
                season: index.season(),
                fixture: paired.cloned(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RemainingFixture {
        opponent: current.opponent,
        venue: current.venue,
        rating,
        history,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum CrossCell {
    SameTeam,
    /// Not played yet, or not finished
    NotPlayed,
    Played {
        home: u16,
        away: u16,
        /// From the home side's point of view
        color: DisplayColor,
    },
}

/// Home teams down the rows, away teams across the columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTable {
    pub teams: Vec<String>,
    pub abbreviations: HashMap<String, String>,
    pub cells: Vec<Vec<CrossCell>>,
}

impl CrossTable {
    pub fn cell(&self, home: &str, away: &str) -> Option<&CrossCell> {
        let row = self.teams.iter().position(|t| t == home)?;
        let col = self.teams.iter().position(|t| t == away)?;
        self.cells.get(row)?.get(col)
    }

    /// Abbreviation of `team`, or the full name when the data has none.
    pub fn abbr<'a>(&'a self, team: &'a str) -> &'a str {
        self.abbreviations
            .get(team)
            .map(String::as_str)
            .filter(|a| !a.is_empty())
            .unwrap_or(team)
    }
}

pub fn cross_table(teams: &[String], matches: &[Match]) -> CrossTable {
    let mut abbreviations = HashMap::new();
    let mut by_pairing: HashMap<(&str, &str), &Match> = HashMap::new();

    for m in matches {
        for side in [&m.home_team, &m.away_team] {
            abbreviations
                .entry(side.name.clone())
                .or_insert_with(|| side.abbr.clone());
        }
        by_pairing.insert((m.home_team.name.as_str(), m.away_team.name.as_str()), m);
    }

    let cells = teams
        .iter()
        .map(|home| {
            teams
                .iter()
                .map(|away| {
                    if home == away {
                        return CrossCell::SameTeam;
                    }
                    match by_pairing.get(&(home.as_str(), away.as_str())) {
                        Some(m) if m.is_finished() => {
                            let result =
                                score_result(Venue::Home, m.home_team.score, m.away_team.score);
                            CrossCell::Played {
                                home: m.home_team.score,
                                away: m.away_team.score,
                                color: DisplayColor::for_result(Some(result)),
                            }
                        }
                        _ => CrossCell::NotPlayed,
                    }
                })
                .collect()
        })
        .collect();

    CrossTable {
        teams: teams.to_vec(),
        abbreviations,
        cells,
    }
}

/// Order `teams` for the cross table.
///
/// By league position, teams missing from the table follow the ranked ones
/// alphabetically.
pub fn cross_table_order(
    order: CrossTableOrder,
    table: &[SeasonTableEntry],
    teams: &[String],
) -> Vec<String> {
    let mut alphabetical = teams.to_vec();
    alphabetical.sort();

    match order {
        CrossTableOrder::TeamName => alphabetical,
        CrossTableOrder::LeaguePosition => {
            let mut ordered: Vec<String> = table
                .iter()
                .filter(|entry| teams.contains(&entry.name))
                .map(|entry| entry.name.clone())
                .collect();
            let unranked: Vec<String> = alphabetical
                .into_iter()
                .filter(|team| !ordered.contains(team))
                .collect();
            ordered.extend(unranked);
            ordered
        }
    }
}

/// Snapshot of one team's season so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamForm {
    pub team: String,
    /// Oldest first
    pub recent: Vec<EnrichedMatch>,
    pub next: Option<EnrichedMatch>,
    pub position: Option<usize>,
}

impl TeamForm {
    /// Results as letters, e.g. `WDLWW`.
    pub fn form_string(&self) -> String {
        self.recent
            .iter()
            .filter_map(|m| m.result.map(|r| r.letter()))
            .collect()
    }
}

pub fn team_form(
    team: &str,
    matches: &[Match],
    table: &[SeasonTableEntry],
    limit: usize,
) -> Result<TeamForm> {
    let mut played: Vec<&Match> = matches
        .iter()
        .filter(|m| m.involves(team) && m.is_finished())
        .collect();
    played.sort_by_key(|m| m.kickoff_time());
    let skip = played.len().saturating_sub(limit);
    let recent = played
        .into_iter()
        .skip(skip)
        .map(|m| enrich(m, team))
        .collect::<Result<Vec<_>>>()?;

    let next = matches
        .iter()
        .filter(|m| m.involves(team) && !m.is_finished())
        .min_by_key(|m| m.kickoff_time())
        .map(|m| enrich(m, team))
        .transpose()?;

    Ok(TeamForm {
        team: team.to_string(),
        recent,
        next,
        position: league_position(team, table),
    })
}

/// Matches of the last `count` matchweeks that have kicked off by `now`,
/// latest kickoff first. Matches with an unreadable kickoff are skipped.
pub fn recent_matchweeks(matches: &[Match], now: NaiveDateTime, count: usize) -> Vec<&Match> {
    let started: Vec<(&Match, NaiveDateTime)> = matches
        .iter()
        .filter_map(|m| m.kickoff_time().map(|k| (m, k)))
        .filter(|(_, kickoff)| *kickoff <= now)
        .collect();

    let weeks: BTreeSet<Matchweek> = started.iter().map(|(m, _)| m.matchweek).collect();
    let latest: BTreeSet<Matchweek> = weeks.into_iter().rev().take(count).collect();

    let mut recent: Vec<(&Match, NaiveDateTime)> = started
        .into_iter()
        .filter(|(m, _)| latest.contains(&m.matchweek))
        .collect();
    recent.sort_by(|a, b| b.1.cmp(&a.1));
    recent.into_iter().map(|(m, _)| m).collect()
}
