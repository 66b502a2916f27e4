//! League table derivation from results.

use std::collections::HashMap;

use crate::{
    analysis::enrich::{score_result, Venue},
    football::types::{Match, SeasonTableEntry, TeamScore},
};


/// Build a league table from the finished matches in `matches`.
///
/// Sorted by points, then goal difference, then goals scored, all descending.
/// Teams still level keep the order in which they first appeared.
pub fn derive_table(matches: &[Match]) -> Vec<SeasonTableEntry> {
    let mut table: Vec<SeasonTableEntry> = Vec::new();
    let mut rows: HashMap<String, usize> = HashMap::new();

    for fixture in matches.iter().filter(|m| m.is_finished()) {
        for (venue, side, scored, conceded) in [
            (
                Venue::Home,
                &fixture.home_team,
                fixture.home_team.score,
                fixture.away_team.score,
            ),
            (
                Venue::Away,
                &fixture.away_team,
                fixture.away_team.score,
                fixture.home_team.score,
            ),
        ] {
            let row = row_for(&mut table, &mut rows, side);
            let result = score_result(venue, fixture.home_team.score, fixture.away_team.score);

            row.points += i32::from(result.points());
            row.gf += i32::from(scored);
            row.ga += i32::from(conceded);
            row.gd = row.gf - row.ga;
        }
    }

    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.gd.cmp(&a.gd))
            .then(b.gf.cmp(&a.gf))
    });
    table
}

fn row_for<'a>(
    table: &'a mut Vec<SeasonTableEntry>,
    rows: &mut HashMap<String, usize>,
    side: &TeamScore,
) -> &'a mut SeasonTableEntry {
    let idx = *rows.entry(side.name.clone()).or_insert_with(|| {
        table.push(SeasonTableEntry::new(side.name.as_str(), side.abbr.as_str()));
        table.len() - 1
    });
    &mut table[idx]
}
