//! Home/away results grid of the current season

use crate::{
    analysis::compare::{cross_table, cross_table_order, CrossCell, CrossTable},
    cli::types::CrossTableOrder,
    football::{provider::SeasonSet, types::SeasonTableEntry},
    Result, Season,
};

use super::common::{print_json, CommandContext};

#[derive(Debug, Clone)]
pub struct CrossTableParams {
    pub order: CrossTableOrder,
    pub as_json: bool,
    pub refresh: bool,
}

pub fn build_cross_table(
    seasons: &SeasonSet,
    season: Season,
    table: &[SeasonTableEntry],
    order: CrossTableOrder,
) -> Result<CrossTable> {
    let teams = cross_table_order(order, table, &seasons.teams(season)?);
    Ok(cross_table(&teams, seasons.matches(season)?))
}

/// Rows are home teams, columns away teams.
pub fn render_cross_table(grid: &CrossTable) -> String {
    let mut out = format!("{:<5}", "");
    for away in &grid.teams {
        out.push_str(&format!("{:>5}", grid.abbr(away)));
    }
    out.push('\n');

    for (home, row) in grid.teams.iter().zip(&grid.cells) {
        out.push_str(&format!("{:<5}", grid.abbr(home)));
        for cell in row {
            let text = match cell {
                CrossCell::SameTeam => "X".to_string(),
                CrossCell::NotPlayed => "-".to_string(),
                CrossCell::Played { home, away, .. } => format!("{}-{}", home, away),
            };
            out.push_str(&format!("{:>5}", text));
        }
        out.push('\n');
    }
    out
}

/// Handle `compare cross-table`
pub async fn handle_cross_table(ctx: &CommandContext, params: CrossTableParams) -> Result<()> {
    let current = ctx.current_season();
    let seasons = ctx.provider.seasons(&[current], params.refresh).await?;
    let table = ctx.current_table(params.refresh).await?;
    let grid = build_cross_table(&seasons, current, &table, params.order)?;

    if params.as_json {
        print_json(&grid)?;
    } else {
        println!("{} ({})", current.short_label(), params.order); // tarpaulin::skip
        print!("{}", render_cross_table(&grid)); // tarpaulin::skip
    }
    Ok(())
}
