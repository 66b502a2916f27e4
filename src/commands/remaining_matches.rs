//! Remaining fixtures of several teams, with difficulty and history

use log::debug;
use rayon::prelude::*;

use crate::{
    analysis::{
        compare::{remaining_fixtures, RemainingMatchweek},
        fdr::{format_rating, RatingMethod, Severity},
        index::MatchIndex,
    },
    football::provider::SeasonSet,
    Result, Season,
};

use super::common::{print_json, resolve_team, result_cell, CommandContext};

#[derive(Debug, Clone)]
pub struct RemainingParams {
    pub teams: Vec<String>,
    pub method: RatingMethod,
    pub as_json: bool,
    pub refresh: bool,
}

/// One index per season in `history`, each covering all of `teams`.
pub fn build_history(
    seasons: &SeasonSet,
    history: &[Season],
    teams: &[String],
) -> Result<Vec<MatchIndex>> {
    history
        .par_iter()
        .map(|&season| -> Result<MatchIndex> {
            let matches = seasons.matches(season)?;
            let mut index = MatchIndex::empty(season);
            for team in teams {
                index.extend(matches, team);
            }
            debug!("Season {} index holds {} fixtures", season, index.len());
            Ok(index)
        })
        .collect()
}

/// Canonical team names for `requested`, duplicates dropped.
pub fn selected_teams(seasons: &SeasonSet, current: Season, requested: &[String]) -> Result<Vec<String>> {
    let known = seasons.teams(current)?;
    let mut teams: Vec<String> = Vec::new();
    for input in requested {
        let team = resolve_team(input, &known, current)?;
        if !teams.contains(&team) {
            teams.push(team);
        }
    }
    Ok(teams)
}

pub fn render_remaining(weeks: &[RemainingMatchweek]) -> String {
    let mut out = String::new();
    for week in weeks {
        out.push_str(&format!("Matchweek {}\n", week.matchweek));
        for entry in &week.teams {
            match &entry.fixture {
                None => out.push_str(&format!("  {:<24} -\n", entry.team)),
                Some(fixture) => {
                    let history: Vec<String> = fixture
                        .history
                        .iter()
                        .map(|h| format!("{}: {}", h.season.short_label(), result_cell(h.fixture.as_ref())))
                        .collect();
                    out.push_str(&format!(
                        "  {:<24} {} ({}) FDR {} [{}]  {}\n",
                        entry.team,
                        fixture.opponent.name,
                        fixture.venue.letter(),
                        format_rating(fixture.rating),
                        Severity::from_rating(fixture.rating),
                        history.join("  ")
                    ));
                }
            }
        }
    }
    out
}

/// Handle `compare remaining`
pub async fn handle_remaining(ctx: &CommandContext, params: RemainingParams) -> Result<()> {
    let seasons = ctx.load_seasons(params.refresh).await?;
    let current = ctx.current_season();
    let teams = selected_teams(&seasons, current, &params.teams)?;
    let table = ctx.current_table(params.refresh).await?;
    let history = build_history(&seasons, &ctx.settings.history_seasons(), &teams)?;

    let weeks = remaining_fixtures(
        &teams,
        current,
        seasons.matches(current)?,
        &history,
        &table,
        &ctx.promotions,
        params.method,
    )?;

    if params.as_json {
        print_json(&weeks)?;
    } else if weeks.is_empty() {
        println!("No fixtures left to play"); // tarpaulin::skip
    } else {
        println!("Difficulty by {}", params.method); // tarpaulin::skip
        print!("{}", render_remaining(&weeks)); // tarpaulin::skip
    }
    Ok(())
}
