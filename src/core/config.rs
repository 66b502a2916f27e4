//! Environment-driven settings

use log::debug;
use std::path::PathBuf;

use crate::{
    analysis::identity::PromotionMap, football::http::DataSource, FormError, Result, Season,
    DATA_URL_ENV_VAR, HISTORY_ENV_VAR, PROMOTIONS_ENV_VAR, SEASON_ENV_VAR,
};


/// Default location of the static season files, relative to the working directory.
pub const DEFAULT_DATA_LOCATION: &str = "public/pl-form-comparison";

/// Number of previous seasons loaded alongside the current one.
pub const DEFAULT_HISTORY_DEPTH: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_source: DataSource,
    pub current_season: Season,
    pub history_depth: u16,
    pub promotions_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source: DataSource::parse(DEFAULT_DATA_LOCATION),
            current_season: Season::default(),
            history_depth: DEFAULT_HISTORY_DEPTH,
            promotions_file: None,
        }
    }
}

fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Settings {
    /// Read settings from the environment, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();

        if let Some(location) = env_non_empty(DATA_URL_ENV_VAR) {
            settings.data_source = DataSource::parse(&location);
        }

        if let Some(season) = env_non_empty(SEASON_ENV_VAR) {
            settings.current_season = season.parse()?;
        }

        if let Some(depth) = env_non_empty(HISTORY_ENV_VAR) {
            settings.history_depth = depth.parse().map_err(|_| FormError::InvalidSeason {
                value: format!("{}={}", HISTORY_ENV_VAR, depth),
            })?;
        }

        settings.promotions_file = env_non_empty(PROMOTIONS_ENV_VAR).map(PathBuf::from);

        debug!("Settings: {:?}", settings);
        Ok(settings)
    }

    /// Previous seasons, most recent first.
    pub fn history_seasons(&self) -> Vec<Season> {
        (1..=self.history_depth)
            .map(|n| self.current_season.previous(n))
            .collect()
    }

    /// The current season followed by its history.
    pub fn all_seasons(&self) -> Vec<Season> {
        std::iter::once(self.current_season)
            .chain(self.history_seasons())
            .collect()
    }

    /// Built-in promotion map, or the override file when configured. Always validated.
    pub fn promotions(&self) -> Result<PromotionMap> {
        let map = match &self.promotions_file {
            Some(path) => PromotionMap::load(path)?,
            None => PromotionMap::builtin(),
        };
        map.validate()?;
        Ok(map)
    }
}
