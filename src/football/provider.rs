//! Cached access to season matches and league tables.
//!
//! [`SeasonDataProvider`] owns a [`SeasonCache`]; nothing here is process-global.
//! A `refresh` load skips both cache tiers and rewrites them.

use log::{debug, info, warn};
use reqwest::Client;
use std::{collections::BTreeMap, path::PathBuf, sync::Arc};
use tokio::task::JoinSet;

use crate::{
    analysis::{compare::comparison_seasons, compare::teams_in, table::derive_table},
    core::cache::{cache_root, SeasonMatchesCacheKey, SeasonTableCacheKey, UnifiedCache},
    football::{
        http::{fetch_season_matches, fetch_season_table, DataSource},
        types::{Match, SeasonTableEntry},
    },
    FormError, Result, Season,
};

#[cfg(test)]
mod tests;

/// Seasons kept in memory per cache tier.
const MEMORY_CAPACITY: usize = 8;

/// Match lists and tables per season, in memory and on disk.
pub struct SeasonCache {
    matches: UnifiedCache<SeasonMatchesCacheKey, Vec<Match>>,
    tables: UnifiedCache<SeasonTableCacheKey, Vec<SeasonTableEntry>>,
}

impl SeasonCache {
    pub fn new() -> Self {
        Self::with_root(cache_root())
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            matches: UnifiedCache::with_root(MEMORY_CAPACITY, root.clone()),
            tables: UnifiedCache::with_root(MEMORY_CAPACITY, root),
        }
    }

    pub fn matches(&self, season: Season) -> Option<Vec<Match>> {
        self.matches.get(&SeasonMatchesCacheKey { season })
    }

    pub fn put_matches(&self, season: Season, matches: Vec<Match>) {
        self.matches.put(SeasonMatchesCacheKey { season }, matches);
    }

    pub fn table(&self, season: Season) -> Option<Vec<SeasonTableEntry>> {
        self.tables.get(&SeasonTableCacheKey { season })
    }

    pub fn put_table(&self, season: Season, table: Vec<SeasonTableEntry>) {
        self.tables.put(SeasonTableCacheKey { season }, table);
    }

    /// Forget everything stored for `season`, on disk too.
    pub fn invalidate(&self, season: Season) -> Result<()> {
        self.matches.invalidate(&SeasonMatchesCacheKey { season })?;
        self.tables.invalidate(&SeasonTableCacheKey { season })?;
        Ok(())
    }

    pub fn clear_memory(&self) {
        self.matches.clear_memory();
        self.tables.clear_memory();
    }
}

impl Default for SeasonCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Loaded match lists, keyed by season.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonSet {
    seasons: BTreeMap<Season, Vec<Match>>,
}

impl SeasonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, season: Season, matches: Vec<Match>) {
        self.seasons.insert(season, matches);
    }

    pub fn matches(&self, season: Season) -> Result<&[Match]> {
        self.seasons
            .get(&season)
            .map(Vec::as_slice)
            .ok_or(FormError::SeasonNotLoaded {
                season: season.as_u16(),
            })
    }

    /// Teams of `season`, alphabetically.
    pub fn teams(&self, season: Season) -> Result<Vec<String>> {
        Ok(teams_in(self.matches(season)?))
    }

    /// Loaded seasons, oldest first.
    pub fn seasons(&self) -> Vec<Season> {
        self.seasons.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Season, &[Match])> {
        self.seasons.iter().map(|(s, m)| (*s, m.as_slice()))
    }

    /// Loaded seasons in which `team` played, most recent first.
    pub fn seasons_with_team(&self, team: &str) -> Vec<Season> {
        comparison_seasons(self.iter(), team)
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

impl FromIterator<(Season, Vec<Match>)> for SeasonSet {
    fn from_iter<T: IntoIterator<Item = (Season, Vec<Match>)>>(iter: T) -> Self {
        Self {
            seasons: iter.into_iter().collect(),
        }
    }
}

/// Fetches seasons from a [`DataSource`] through a [`SeasonCache`].
#[derive(Clone)]
pub struct SeasonDataProvider {
    client: Client,
    source: DataSource,
    cache: Arc<SeasonCache>,
}

impl SeasonDataProvider {
    pub fn new(source: DataSource, cache: SeasonCache) -> Self {
        Self {
            client: Client::new(),
            source,
            cache: Arc::new(cache),
        }
    }

    pub fn cache(&self) -> &SeasonCache {
        &self.cache
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Match list of one season.
    pub async fn season(&self, season: Season, refresh: bool) -> Result<Vec<Match>> {
        load_matches(&self.client, &self.source, &self.cache, season, refresh).await
    }

    /// Load several seasons concurrently.
    pub async fn seasons(&self, seasons: &[Season], refresh: bool) -> Result<SeasonSet> {
        let mut tasks = JoinSet::new();
        for &season in seasons {
            let client = self.client.clone();
            let source = self.source.clone();
            let cache = Arc::clone(&self.cache);
            tasks.spawn(async move {
                load_matches(&client, &source, &cache, season, refresh)
                    .await
                    .map(|matches| (season, matches))
            });
        }

        let mut loaded = SeasonSet::new();
        while let Some(joined) = tasks.join_next().await {
            let (season, matches) = joined??;
            loaded.insert(season, matches);
        }

        info!("Loaded {} season(s)", loaded.len());
        Ok(loaded)
    }

    /// League table of `season`.
    ///
    /// When no table file can be loaded the table is derived from the season's results.
    /// Only a loaded table file is cached; a derived table is rebuilt on every call.
    pub async fn table(&self, season: Season, refresh: bool) -> Result<Vec<SeasonTableEntry>> {
        if !refresh {
            if let Some(table) = self.cache.table(season) {
                debug!("Table for season {} served from cache", season);
                return Ok(table);
            }
        }

        match fetch_season_table(&self.client, &self.source, season).await {
            Ok(table) => {
                self.cache.put_table(season, table.clone());
                Ok(table)
            }
            Err(e) => {
                warn!(
                    "Could not load the {} table ({}); deriving it from results",
                    season, e
                );
                let matches = self.season(season, refresh).await?;
                Ok(derive_table(&matches))
            }
        }
    }
}

async fn load_matches(
    client: &Client,
    source: &DataSource,
    cache: &SeasonCache,
    season: Season,
    refresh: bool,
) -> Result<Vec<Match>> {
    if !refresh {
        if let Some(matches) = cache.matches(season) {
            debug!("Season {} served from cache", season);
            return Ok(matches);
        }
    }

    let matches = fetch_season_matches(client, source, season).await?;
    cache.put_matches(season, matches.clone());
    Ok(matches)
}
