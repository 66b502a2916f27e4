//! Shared resources and helpers used by most commands.

use log::debug;
use serde::Serialize;

use crate::{
    analysis::{enrich::EnrichedMatch, identity::PromotionMap},
    core::config::Settings,
    football::{
        provider::{SeasonCache, SeasonDataProvider, SeasonSet},
        types::SeasonTableEntry,
    },
    FormError, Result, Season,
};

/// Resources needed by the data-backed commands
pub struct CommandContext {
    pub settings: Settings,
    pub provider: SeasonDataProvider,
    pub promotions: PromotionMap,
}

impl CommandContext {
    /// Context caching under the user's cache directory
    pub fn new(settings: Settings) -> Result<Self> {
        Self::with_cache(settings, SeasonCache::new())
    }

    pub fn with_cache(settings: Settings, cache: SeasonCache) -> Result<Self> {
        let promotions = settings.promotions()?;
        debug!(
            "Promotion data covers seasons {:?}",
            promotions.seasons()
        );
        let provider = SeasonDataProvider::new(settings.data_source.clone(), cache);

        Ok(Self {
            settings,
            provider,
            promotions,
        })
    }

    pub fn current_season(&self) -> Season {
        self.settings.current_season
    }

    /// The current season and its configured history
    pub async fn load_seasons(&self, refresh: bool) -> Result<SeasonSet> {
        self.provider
            .seasons(&self.settings.all_seasons(), refresh)
            .await
    }

    pub async fn current_table(&self, refresh: bool) -> Result<Vec<SeasonTableEntry>> {
        self.provider.table(self.current_season(), refresh).await
    }
}

/// Match `input` against the teams of a season, ignoring case.
pub fn resolve_team(input: &str, teams: &[String], season: Season) -> Result<String> {
    let wanted = input.trim();
    teams
        .iter()
        .find(|team| team.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| FormError::UnknownTeam {
            team: wanted.to_string(),
            season: season.as_u16(),
        })
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

/// `1st`, `2nd`, `3rd`, `11th`, `22nd`...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Score plus result letter for finished matches, `-` otherwise: `2-1 W`.
pub fn result_cell(fixture: Option<&EnrichedMatch>) -> String {
    match fixture {
        Some(m) => match m.result {
            Some(result) => format!("{} {}", m.scoreline(), result.letter()),
            None => "-".to_string(),
        },
        None => "-".to_string(),
    }
}

/// Kickoff shortened to `YYYY-MM-DD HH:MM` when it parses.
pub fn short_kickoff(kickoff: &str) -> String {
    kickoff.get(..16).unwrap_or(kickoff).to_string()
}
