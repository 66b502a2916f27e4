//! Season data commands: fetching, league table, recent results, cache maintenance

use chrono::{NaiveDateTime, Utc};
use log::info;

use crate::{
    analysis::{
        compare::recent_matchweeks,
        enrich::{score_result, Venue},
        fdr::{format_rating, rank_bucket_rating},
    },
    football::types::{Match, SeasonTableEntry},
    Result, Season,
};

use super::common::{print_json, short_kickoff, CommandContext};

/// Handle `data fetch`: load every configured season and the current table.
pub async fn handle_fetch(ctx: &CommandContext, refresh: bool) -> Result<()> {
    if refresh {
        println!("Fetching fresh season data..."); // tarpaulin::skip
    } else {
        println!("Loading season data (cached if available)..."); // tarpaulin::skip
    }

    let seasons = ctx.load_seasons(refresh).await?;
    for (season, matches) in seasons.iter() {
        let finished = matches.iter().filter(|m| m.is_finished()).count();
        println!(
            "✓ {}: {} matches, {} finished",
            season.short_label(),
            matches.len(),
            finished
        ); // tarpaulin::skip
    }

    let table = ctx.current_table(refresh).await?;
    println!(
        "✓ {} table: {} teams",
        ctx.current_season().short_label(),
        table.len()
    ); // tarpaulin::skip
    Ok(())
}

/// Table rows with the rank-bucket difficulty of facing each side at home and away.
pub fn render_table(table: &[SeasonTableEntry]) -> String {
    let mut out = format!(
        "{:>3} {:<28} {:>4} {:>4} {:>4} {:>4}  {:>5}\n",
        "Pos", "Team", "Pts", "GF", "GA", "GD", "FDR"
    );
    for (idx, entry) in table.iter().enumerate() {
        let position = idx + 1;
        out.push_str(&format!(
            "{:>3} {:<28} {:>4} {:>4} {:>4} {:>4}  {:>2}/{:<3}\n",
            position,
            entry.name,
            entry.points,
            entry.gf,
            entry.ga,
            entry.gd,
            format_rating(rank_bucket_rating(position, Venue::Home)),
            format_rating(rank_bucket_rating(position, Venue::Away)),
        ));
    }
    out
}

/// Handle `data table`
pub async fn handle_table(
    ctx: &CommandContext,
    season: Option<Season>,
    as_json: bool,
    refresh: bool,
) -> Result<()> {
    let season = season.unwrap_or(ctx.current_season());
    let table = ctx.provider.table(season, refresh).await?;

    if as_json {
        print_json(&table)?;
    } else {
        print!("{}", render_table(&table)); // tarpaulin::skip
    }
    Ok(())
}

pub fn render_recent(matches: &[&Match]) -> String {
    let mut out = String::new();
    for m in matches {
        let marker = if m.is_finished() {
            score_result(Venue::Home, m.home_team.score, m.away_team.score)
                .letter()
                .to_string()
        } else {
            "~".to_string()
        };
        out.push_str(&format!(
            "MW{:<3} {}  {:>24} {}-{} {:<24} {}\n",
            m.matchweek.as_u8(),
            short_kickoff(&m.kickoff),
            m.home_team.name,
            m.home_team.score,
            m.away_team.score,
            m.away_team.name,
            marker
        ));
    }
    out
}

/// Handle `data recent`: results of the latest matchweeks, newest first.
pub async fn handle_recent(ctx: &CommandContext, weeks: usize, as_json: bool) -> Result<()> {
    let current = ctx.current_season();
    let matches = ctx.provider.season(current, false).await?;
    let now: NaiveDateTime = Utc::now().naive_utc();
    let recent = recent_matchweeks(&matches, now, weeks);

    if as_json {
        print_json(&recent)?;
    } else {
        print!("{}", render_recent(&recent)); // tarpaulin::skip
    }
    Ok(())
}

/// Handle `data clear-cache`: drop cached files for every configured season.
pub fn handle_clear_cache(ctx: &CommandContext) -> Result<()> {
    for season in ctx.settings.all_seasons() {
        ctx.provider.cache().invalidate(season)?;
        info!("Cleared cached data for {}", season);
    }
    println!("✓ Cache cleared"); // tarpaulin::skip
    Ok(())
}
