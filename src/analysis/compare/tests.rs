//! Unit tests for the comparison views

use super::*;
use crate::{analysis::enrich::MatchResult, football::types::Period};

fn game(
    season: u16,
    week: u8,
    kickoff: &str,
    home: (&str, u16),
    away: (&str, u16),
    period: Period,
) -> Match {
    Match::new(
        Season::new(season),
        Matchweek::new(week),
        kickoff,
        TeamScore::new(home.0, &home.0[..3].to_uppercase(), home.1),
        TeamScore::new(away.0, &away.0[..3].to_uppercase(), away.1),
        period,
    )
}

fn played(season: u16, week: u8, home: (&str, u16), away: (&str, u16)) -> Match {
    let kickoff = format!("{}-08-{:02} 15:00:00", season, week + 10);
    game(season, week, &kickoff, home, away, Period::Finished)
}

fn upcoming(season: u16, week: u8, home: &str, away: &str) -> Match {
    let kickoff = format!("{}-12-{:02} 15:00:00", season, week);
    game(season, week, &kickoff, (home, 0), (away, 0), Period::Scheduled)
}

fn standings(names: &[&str]) -> Vec<SeasonTableEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut entry = SeasonTableEntry::new(*name, "");
            entry.points = 40 - i as i32 * 2;
            entry
        })
        .collect()
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_signed() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-1), "-1");
    }

    #[test]
    fn test_teams_in_is_sorted_and_unique() {
        let matches = vec![
            played(2025, 1, ("Everton", 1), ("Arsenal", 0)),
            played(2025, 2, ("Arsenal", 1), ("Burnley", 0)),
        ];
        assert_eq!(teams_in(&matches), vec!["Arsenal", "Burnley", "Everton"]);
    }

    #[test]
    fn test_comparison_seasons() {
        let s2025 = vec![played(2025, 1, ("Sunderland", 1), ("Arsenal", 0))];
        let s2024 = vec![played(2024, 1, ("Southampton", 1), ("Arsenal", 0))];
        let s2023 = vec![played(2023, 1, ("Luton Town", 1), ("Arsenal", 0))];
        let seasons = [
            (Season::new(2023), s2023.as_slice()),
            (Season::new(2025), s2025.as_slice()),
            (Season::new(2024), s2024.as_slice()),
        ];

        assert_eq!(
            comparison_seasons(seasons, "Arsenal"),
            vec![Season::new(2025), Season::new(2024), Season::new(2023)]
        );
        assert_eq!(comparison_seasons(seasons, "Sunderland"), vec![Season::new(2025)]);
        assert!(comparison_seasons(seasons, "Hull City").is_empty());
    }
}

#[cfg(test)]
mod season_comparison_tests {
    use super::*;

    fn seasons() -> (Vec<Match>, Vec<Match>) {
        let anchor = vec![
            // Win vs last season's draw: +2
            played(2025, 1, ("Arsenal", 2), ("Chelsea", 0)),
            // Loss to the side that replaced Southampton, who were beaten last year: -3
            played(2025, 2, ("Sunderland", 1), ("Arsenal", 0)),
            // Not played yet; last season's win counts towards the projection
            upcoming(2025, 3, "Arsenal", "Everton"),
            // No equivalent last season
            upcoming(2025, 4, "Arsenal", "Hull City"),
        ];
        let compared = vec![
            played(2024, 5, ("Arsenal", 1), ("Chelsea", 1)),
            played(2024, 9, ("Southampton", 0), ("Arsenal", 3)),
            played(2024, 12, ("Arsenal", 2), ("Everton", 1)),
        ];
        (anchor, compared)
    }

    #[test]
    fn test_rows_and_running_totals() {
        let (anchor, compared) = seasons();
        let promotions = PromotionMap::builtin();
        let index = MatchIndex::build(Season::new(2024), &compared, "Arsenal");

        let comparison =
            compare_seasons("Arsenal", Season::new(2025), &anchor, &index, &promotions).unwrap();
        assert_eq!(comparison.anchor_season, Season::new(2025));
        assert_eq!(comparison.compared_season, Season::new(2024));
        assert_eq!(comparison.rows.len(), 4);

        let diffs: Vec<i32> = comparison.rows.iter().map(|r| r.point_diff).collect();
        assert_eq!(diffs, vec![2, -3, 0, 0]);

        let aggregate: Vec<i32> = comparison.rows.iter().map(|r| r.aggregate_diff).collect();
        assert_eq!(aggregate, vec![2, -1, -1, -1]);

        let compared_totals: Vec<u32> = comparison.rows.iter().map(|r| r.compared_total).collect();
        assert_eq!(compared_totals, vec![1, 4, 7, 7]);

        let projected: Vec<u32> = comparison.rows.iter().map(|r| r.projected_total).collect();
        assert_eq!(projected, vec![3, 3, 6, 6]);

        assert_eq!(comparison.aggregate_diff(), -1);
        assert_eq!(comparison.compared_total(), 7);
        assert_eq!(comparison.projected_total(), 6);
    }

    #[test]
    fn test_substitution_and_missing_pair() {
        let (anchor, compared) = seasons();
        let promotions = PromotionMap::builtin();
        let index = MatchIndex::build(Season::new(2024), &compared, "Arsenal");
        let comparison =
            compare_seasons("Arsenal", Season::new(2025), &anchor, &index, &promotions).unwrap();

        let sunderland = &comparison.rows[1];
        assert_eq!(sunderland.ordinal, 2);
        assert_eq!(sunderland.venue, Venue::Away);
        assert_eq!(sunderland.opponent.name, "Sunderland");
        assert_eq!(sunderland.substituted_opponent(), Some("Southampton"));
        assert_eq!(
            sunderland.compared.as_ref().and_then(|c| c.result),
            Some(MatchResult::Win)
        );

        assert_eq!(comparison.rows[0].substituted_opponent(), None);
        assert!(comparison.rows[3].compared.is_none());
        assert_eq!(comparison.rows[3].substituted_opponent(), None);
    }

    #[test]
    fn test_unknown_team() {
        let (anchor, compared) = seasons();
        let index = MatchIndex::build(Season::new(2024), &compared, "Leeds United");
        let result = compare_seasons(
            "Leeds United",
            Season::new(2025),
            &anchor,
            &index,
            &PromotionMap::builtin(),
        );
        assert!(matches!(
            result,
            Err(FormError::UnknownTeam { season: 2025, .. })
        ));
    }
}

#[cfg(test)]
mod remaining_fixture_tests {
    use super::*;

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn current() -> Vec<Match> {
        vec![
            played(2025, 1, ("Arsenal", 1), ("Leeds United", 0)),
            played(2025, 1, ("Liverpool", 2), ("Everton", 0)),
            // Arsenal done, Liverpool still to play
            played(2025, 2, ("Chelsea", 0), ("Arsenal", 0)),
            upcoming(2025, 2, "Burnley", "Liverpool"),
            upcoming(2025, 3, "Arsenal", "Liverpool"),
            upcoming(2025, 4, "Sunderland", "Arsenal"),
        ]
    }

    fn history() -> Vec<MatchIndex> {
        let s2024 = vec![
            played(2024, 7, ("Ipswich Town", 1), ("Liverpool", 4)),
            played(2024, 8, ("Arsenal", 2), ("Liverpool", 2)),
            played(2024, 9, ("Southampton", 1), ("Arsenal", 3)),
        ];
        let s2023 = vec![played(2023, 7, ("Arsenal", 3), ("Liverpool", 1))];

        let mut recent = MatchIndex::build(Season::new(2024), &s2024, "Arsenal");
        recent.extend(&s2024, "Liverpool");
        let mut older = MatchIndex::build(Season::new(2023), &s2023, "Arsenal");
        older.extend(&s2023, "Liverpool");
        vec![recent, older]
    }

    #[test]
    fn test_finished_matchweeks_are_dropped() {
        let weeks = remaining_fixtures(
            &teams(&["Arsenal", "Liverpool"]),
            Season::new(2025),
            &current(),
            &history(),
            &standings(&["Liverpool", "Arsenal", "Chelsea", "Burnley"]),
            &PromotionMap::builtin(),
            RatingMethod::RankBucket,
        )
        .unwrap();

        let numbers: Vec<u8> = weeks.iter().map(|w| w.matchweek.as_u8()).collect();
        assert_eq!(numbers, vec![2, 3, 4]);

        let week2 = &weeks[0];
        assert_eq!(week2.teams[0].team, "Arsenal");
        assert!(week2.teams[0].fixture.is_none());
        assert_eq!(week2.teams[1].team, "Liverpool");
        assert!(week2.teams[1].fixture.is_some());

        // Liverpool have no fixture in matchweek 4
        assert!(weeks[2].teams[1].fixture.is_none());
    }

    #[test]
    fn test_rating_and_history() {
        let weeks = remaining_fixtures(
            &teams(&["Arsenal", "Liverpool"]),
            Season::new(2025),
            &current(),
            &history(),
            &standings(&["Liverpool", "Arsenal", "Chelsea", "Burnley"]),
            &PromotionMap::builtin(),
            RatingMethod::RankBucket,
        )
        .unwrap();

        // Burnley (2025) stands in for Ipswich Town (2024) and Sheffield United (2023).
        let liverpool = weeks[0].teams[1].fixture.as_ref().unwrap();
        assert_eq!(liverpool.opponent.name, "Burnley");
        assert_eq!(liverpool.venue, Venue::Away);
        assert_eq!(liverpool.rating, 5.0);
        assert_eq!(liverpool.history.len(), 2);
        assert_eq!(liverpool.history[0].season, Season::new(2024));
        let paired = liverpool.history[0].fixture.as_ref().unwrap();
        assert_eq!(paired.opponent.name, "Ipswich Town");
        assert_eq!(paired.result, Some(MatchResult::Win));
        assert!(liverpool.history[1].fixture.is_none());

        let arsenal = weeks[1].teams[0].fixture.as_ref().unwrap();
        assert_eq!(arsenal.opponent.name, "Liverpool");
        assert_eq!(arsenal.rating, 5.0);
        let seasons: Vec<Option<MatchResult>> = arsenal
            .history
            .iter()
            .map(|h| h.fixture.as_ref().and_then(|f| f.result))
            .collect();
        assert_eq!(seasons, vec![Some(MatchResult::Draw), Some(MatchResult::Win)]);
    }

    #[test]
    fn test_opponent_missing_from_table_is_mid_tier() {
        let weeks = remaining_fixtures(
            &teams(&["Arsenal"]),
            Season::new(2025),
            &current(),
            &history(),
            &standings(&["Liverpool", "Arsenal"]),
            &PromotionMap::builtin(),
            RatingMethod::Percentile,
        )
        .unwrap();

        let sunderland = weeks
            .iter()
            .find(|w| w.matchweek == Matchweek::new(4))
            .and_then(|w| w.teams[0].fixture.as_ref())
            .unwrap();
        assert_eq!(sunderland.rating, MID_TIER_RATING);
        assert_eq!(
            sunderland.history[0]
                .fixture
                .as_ref()
                .map(|f| f.opponent.name.as_str()),
            Some("Southampton")
        );
    }

    #[test]
    fn test_no_teams_selected() {
        let weeks = remaining_fixtures(
            &[],
            Season::new(2025),
            &current(),
            &history(),
            &[],
            &PromotionMap::builtin(),
            RatingMethod::RankBucket,
        )
        .unwrap();
        assert!(weeks.is_empty());
    }
}

#[cfg(test)]
mod cross_table_tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_cells() {
        let matches = vec![
            played(2025, 1, ("Arsenal", 2), ("Chelsea", 1)),
            played(2025, 2, ("Chelsea", 1), ("Everton", 1)),
            played(2025, 3, ("Everton", 0), ("Arsenal", 3)),
            upcoming(2025, 4, "Chelsea", "Arsenal"),
        ];
        let teams = names(&["Arsenal", "Chelsea", "Everton"]);
        let grid = cross_table(&teams, &matches);

        assert_eq!(grid.cell("Arsenal", "Arsenal"), Some(&CrossCell::SameTeam));
        assert_eq!(
            grid.cell("Arsenal", "Chelsea"),
            Some(&CrossCell::Played {
                home: 2,
                away: 1,
                color: DisplayColor::Green
            })
        );
        assert_eq!(
            grid.cell("Everton", "Arsenal"),
            Some(&CrossCell::Played {
                home: 0,
                away: 3,
                color: DisplayColor::Red
            })
        );
        assert_eq!(
            grid.cell("Chelsea", "Everton"),
            Some(&CrossCell::Played {
                home: 1,
                away: 1,
                color: DisplayColor::Gray
            })
        );
        assert_eq!(grid.cell("Chelsea", "Arsenal"), Some(&CrossCell::NotPlayed));
        assert_eq!(grid.cell("Arsenal", "Everton"), Some(&CrossCell::NotPlayed));
        assert_eq!(grid.cell("Arsenal", "Burnley"), None);
        assert_eq!(grid.abbr("Chelsea"), "CHE");
        assert_eq!(grid.abbr("Burnley"), "Burnley");
    }

    #[test]
    fn test_order() {
        let teams = names(&["Everton", "Arsenal", "Chelsea", "Burnley"]);
        let table = standings(&["Chelsea", "Arsenal", "Everton"]);

        assert_eq!(
            cross_table_order(CrossTableOrder::TeamName, &table, &teams),
            names(&["Arsenal", "Burnley", "Chelsea", "Everton"])
        );
        assert_eq!(
            cross_table_order(CrossTableOrder::LeaguePosition, &table, &teams),
            names(&["Chelsea", "Arsenal", "Everton", "Burnley"])
        );
    }
}

#[cfg(test)]
mod form_tests {
    use super::*;

    fn season() -> Vec<Match> {
        vec![
            played(2025, 1, ("Arsenal", 1), ("Leeds United", 0)),
            played(2025, 2, ("Chelsea", 2), ("Arsenal", 0)),
            played(2025, 3, ("Arsenal", 1), ("Everton", 1)),
            upcoming(2025, 5, "Arsenal", "Burnley"),
            upcoming(2025, 4, "Fulham", "Arsenal"),
        ]
    }

    #[test]
    fn test_team_form() {
        let form = team_form(
            "Arsenal",
            &season(),
            &standings(&["Chelsea", "Arsenal"]),
            2,
        )
        .unwrap();

        assert_eq!(form.recent.len(), 2);
        assert_eq!(form.form_string(), "LD");
        assert_eq!(form.next.as_ref().unwrap().opponent.name, "Fulham");
        assert_eq!(form.next.as_ref().unwrap().venue, Venue::Away);
        assert_eq!(form.position, Some(2));
    }

    #[test]
    fn test_team_form_without_history() {
        let form = team_form("Sunderland", &season(), &[], 5).unwrap();
        assert!(form.recent.is_empty());
        assert!(form.next.is_none());
        assert_eq!(form.position, None);
        assert_eq!(form.form_string(), "");
    }

    #[test]
    fn test_recent_matchweeks() {
        let matches = vec![
            played(2025, 1, ("Arsenal", 1), ("Leeds United", 0)),
            played(2025, 2, ("Chelsea", 2), ("Arsenal", 0)),
            played(2025, 3, ("Arsenal", 1), ("Everton", 1)),
            played(2025, 3, ("Fulham", 1), ("Burnley", 1)),
            upcoming(2025, 4, "Fulham", "Arsenal"),
        ];
        let now = NaiveDateTime::parse_from_str("2025-10-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();

        let recent = recent_matchweeks(&matches, now, 2);
        let weeks: Vec<u8> = recent.iter().map(|m| m.matchweek.as_u8()).collect();
        assert_eq!(weeks, vec![3, 3, 2]);

        assert_eq!(recent_matchweeks(&matches, now, 10).len(), 4);
        assert!(recent_matchweeks(&matches, now, 0).is_empty());
    }
}
