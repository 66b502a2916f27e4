//! Season-over-season comparison for one team

use crate::{
    analysis::{
        compare::{compare_seasons, signed, SeasonComparison},
        identity::PromotionMap,
        index::MatchIndex,
    },
    football::provider::SeasonSet,
    FormError, Result, Season,
};

use super::common::{print_json, resolve_team, result_cell, CommandContext};

#[derive(Debug, Clone)]
pub struct BetweenSeasonsParams {
    pub team: String,
    /// Defaults to the current season
    pub anchor: Option<Season>,
    /// Defaults to the latest earlier season the team played in
    pub compared: Option<Season>,
    pub as_json: bool,
    pub refresh: bool,
}

/// Compare `params.team`'s fixtures in the anchor season with the compared season.
pub fn build_comparison(
    seasons: &SeasonSet,
    promotions: &PromotionMap,
    current: Season,
    params: &BetweenSeasonsParams,
) -> Result<SeasonComparison> {
    let anchor = params.anchor.unwrap_or(current);
    let team = resolve_team(&params.team, &seasons.teams(anchor)?, anchor)?;

    let played = seasons.seasons_with_team(&team);
    let compared = match params.compared {
        Some(season) => season,
        None => played
            .iter()
            .copied()
            .find(|season| *season < anchor)
            .ok_or_else(|| FormError::UnknownTeam {
                team: team.clone(),
                season: anchor.previous(1).as_u16(),
            })?,
    };

    if compared == anchor {
        return Err(FormError::InvalidSeason {
            value: format!("{} compared with itself", anchor),
        });
    }
    if !played.contains(&compared) {
        return Err(FormError::UnknownTeam {
            team,
            season: compared.as_u16(),
        });
    }

    let index = MatchIndex::build(compared, seasons.matches(compared)?, &team);
    compare_seasons(&team, anchor, seasons.matches(anchor)?, &index, promotions)
}

pub fn render_comparison(comparison: &SeasonComparison) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {} vs {}\n",
        comparison.team,
        comparison.anchor_season.short_label(),
        comparison.compared_season.short_label()
    ));
    out.push_str(&format!(
        "{:<4} {:<28} {:<6} {:>8} {:>8} {:>5} {:>10}\n",
        "GW",
        "Opponent",
        "Venue",
        comparison.compared_season.short_label(),
        comparison.anchor_season.short_label(),
        "+/-",
        "Total"
    ));

    for row in &comparison.rows {
        let opponent = match row.substituted_opponent() {
            Some(previous) => format!("{} ({})", row.opponent.name, previous),
            None => row.opponent.name.clone(),
        };
        out.push_str(&format!(
            "{:<4} {:<28} {:<6} {:>8} {:>8} {:>5} {:>10}\n",
            row.ordinal,
            opponent,
            row.venue.to_string(),
            result_cell(row.compared.as_ref()),
            result_cell(Some(&row.anchor)),
            signed(row.point_diff),
            format!(
                "{} ({})",
                row.projected_total,
                signed(row.aggregate_diff)
            ),
        ));
    }

    out.push_str(&format!(
        "Projected {} pts vs {} pts in {} ({})\n",
        comparison.projected_total(),
        comparison.compared_total(),
        comparison.compared_season.short_label(),
        signed(comparison.aggregate_diff())
    ));
    out
}

/// Handle `compare seasons`
pub async fn handle_between_seasons(ctx: &CommandContext, params: BetweenSeasonsParams) -> Result<()> {
    let seasons = ctx.load_seasons(params.refresh).await?;
    let comparison = build_comparison(&seasons, &ctx.promotions, ctx.current_season(), &params)?;

    if params.as_json {
        print_json(&comparison)?;
    } else {
        print!("{}", render_comparison(&comparison)); // tarpaulin::skip
    }
    Ok(())
}
