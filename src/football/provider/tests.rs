//! Unit tests for the cached season provider

use super::*;
use crate::core::cache::write_string;
use serde_json::json;
use tempfile::{tempdir, TempDir};

fn matches_body(season: u16, home: &str, away: &str, scores: (u16, u16)) -> String {
    json!({
        "season": season.to_string(),
        "competition": 8,
        "matchweeks": [
            {
                "matchweek": 1,
                "data": {
                    "data": [
                        {
                            "period": "FullTime",
                            "matchWeek": 1,
                            "kickoff": format!("{}-08-16 15:00:00", season),
                            "season": season.to_string(),
                            "homeTeam": { "name": home, "abbr": &home[..3], "score": scores.0 },
                            "awayTeam": { "name": away, "abbr": &away[..3], "score": scores.1 }
                        }
                    ]
                }
            }
        ]
    })
    .to_string()
}

/// A data directory with 2024 and 2025 season files and a 2025 table.
fn data_dir() -> TempDir {
    let dir = tempdir().unwrap();
    write_string(
        &dir.path().join("2025.json"),
        &matches_body(2025, "Sunderland", "Arsenal", (0, 2)),
    )
    .unwrap();
    write_string(
        &dir.path().join("2024.json"),
        &matches_body(2024, "Southampton", "Arsenal", (1, 1)),
    )
    .unwrap();
    write_string(
        &dir.path().join("2025-table.json"),
        &json!([
            { "name": "Arsenal", "abbr": "ARS", "points": 3, "gf": 2, "ga": 0, "gd": 2 },
            { "name": "Sunderland", "abbr": "SUN", "points": 0, "gf": 0, "ga": 2, "gd": -2 }
        ])
        .to_string(),
    )
    .unwrap();
    dir
}

fn provider(data: &TempDir, cache: &TempDir) -> SeasonDataProvider {
    SeasonDataProvider::new(
        DataSource::Directory(data.path().to_path_buf()),
        SeasonCache::with_root(cache.path()),
    )
}

#[cfg(test)]
mod season_set_tests {
    use super::*;
    use crate::football::types::{Period, TeamScore};
    use crate::Matchweek;

    fn set() -> SeasonSet {
        let fixture = |season: u16, home: &str, away: &str| {
            Match::new(
                Season::new(season),
                Matchweek::new(1),
                "2024-08-16 15:00:00",
                TeamScore::new(home, "", 1),
                TeamScore::new(away, "", 0),
                Period::Finished,
            )
        };
        [
            (Season::new(2024), vec![fixture(2024, "Southampton", "Arsenal")]),
            (Season::new(2025), vec![fixture(2025, "Sunderland", "Arsenal")]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_matches_and_teams() {
        let set = set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.seasons(), vec![Season::new(2024), Season::new(2025)]);
        assert_eq!(set.matches(Season::new(2025)).unwrap().len(), 1);
        assert_eq!(
            set.teams(Season::new(2025)).unwrap(),
            vec!["Arsenal".to_string(), "Sunderland".to_string()]
        );
    }

    #[test]
    fn test_missing_season() {
        match set().matches(Season::new(2019)) {
            Err(FormError::SeasonNotLoaded { season }) => assert_eq!(season, 2019),
            other => panic!("Expected SeasonNotLoaded, got {:?}", other),
        }
    }

    #[test]
    fn test_seasons_with_team() {
        let set = set();
        assert_eq!(
            set.seasons_with_team("Arsenal"),
            vec![Season::new(2025), Season::new(2024)]
        );
        assert_eq!(set.seasons_with_team("Southampton"), vec![Season::new(2024)]);
    }
}

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[test]
    fn test_invalidate_removes_both_tiers() {
        let root = tempdir().unwrap();
        let cache = SeasonCache::with_root(root.path());
        cache.put_matches(Season::new(2024), Vec::new());
        cache.put_table(Season::new(2024), Vec::new());
        assert!(cache.matches(Season::new(2024)).is_some());

        cache.invalidate(Season::new(2024)).unwrap();
        assert!(cache.matches(Season::new(2024)).is_none());
        assert!(cache.table(Season::new(2024)).is_none());
    }

    #[test]
    fn test_invalidate_unknown_season_is_ok() {
        let root = tempdir().unwrap();
        let cache = SeasonCache::with_root(root.path());
        assert!(cache.invalidate(Season::new(1999)).is_ok());
    }
}

#[cfg(test)]
mod provider_tests {
    use super::*;

    #[tokio::test]
    async fn test_load_several_seasons() {
        let data = data_dir();
        let cache = tempdir().unwrap();
        let provider = provider(&data, &cache);

        let set = provider
            .seasons(&[Season::new(2025), Season::new(2024)], false)
            .await
            .unwrap();
        assert_eq!(set.seasons(), vec![Season::new(2024), Season::new(2025)]);
        assert_eq!(
            set.matches(Season::new(2024)).unwrap()[0].home_team.name,
            "Southampton"
        );
    }

    #[tokio::test]
    async fn test_missing_season_file_is_error() {
        let data = data_dir();
        let cache = tempdir().unwrap();
        let provider = provider(&data, &cache);

        let result = provider.seasons(&[Season::new(2019)], false).await;
        assert!(matches!(result, Err(FormError::Io(_))));
    }

    #[tokio::test]
    async fn test_cache_serves_after_source_disappears() {
        let data = data_dir();
        let cache = tempdir().unwrap();
        let provider = provider(&data, &cache);

        provider.season(Season::new(2025), false).await.unwrap();
        std::fs::remove_file(data.path().join("2025.json")).unwrap();

        // Fresh provider, same cache directory: served from disk
        let again = SeasonDataProvider::new(
            DataSource::Directory(data.path().to_path_buf()),
            SeasonCache::with_root(cache.path()),
        );
        let matches = again.season(Season::new(2025), false).await.unwrap();
        assert_eq!(matches.len(), 1);

        // A refresh goes back to the (now missing) source
        assert!(again.season(Season::new(2025), true).await.is_err());
    }

    #[tokio::test]
    async fn test_table_from_file() {
        let data = data_dir();
        let cache = tempdir().unwrap();
        let provider = provider(&data, &cache);

        let table = provider.table(Season::new(2025), false).await.unwrap();
        assert_eq!(table[0].name, "Arsenal");
        assert_eq!(table[0].abbr, "ARS");
        assert!(provider.cache().table(Season::new(2025)).is_some());
    }

    #[tokio::test]
    async fn test_table_falls_back_to_derived() {
        let data = data_dir();
        let cache = tempdir().unwrap();
        let provider = provider(&data, &cache);

        // No 2024-table.json: derived from the 1-1 draw
        let table = provider.table(Season::new(2024), false).await.unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|e| e.points == 1));
        assert_eq!(table[0].name, "Southampton");
        assert!(provider.cache().table(Season::new(2024)).is_none());
    }

    #[tokio::test]
    async fn test_published_table_replaces_derived_once_available() {
        let data = data_dir();
        let cache = tempdir().unwrap();
        let provider = provider(&data, &cache);

        let derived = provider.table(Season::new(2024), false).await.unwrap();
        assert_eq!(derived[0].name, "Southampton");

        write_string(
            &data.path().join("2024-table.json"),
            &json!([
                { "name": "Arsenal", "abbr": "ARS", "points": 1, "gf": 1, "ga": 1, "gd": 0 },
                { "name": "Southampton", "abbr": "SOU", "points": 1, "gf": 1, "ga": 1, "gd": 0 }
            ])
            .to_string(),
        )
        .unwrap();

        // A fresh provider over the same cache directory picks up the file
        let again = SeasonDataProvider::new(
            DataSource::Directory(data.path().to_path_buf()),
            SeasonCache::with_root(cache.path()),
        );
        let table = again.table(Season::new(2024), false).await.unwrap();
        assert_eq!(table[0].name, "Arsenal");
        assert_eq!(table[0].abbr, "ARS");

        // The same provider does too, without a refresh
        let table = provider.table(Season::new(2024), false).await.unwrap();
        assert_eq!(table[0].name, "Arsenal");
    }
}
