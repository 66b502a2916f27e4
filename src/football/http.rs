//! Loading season JSON from a remote host or a local directory

use log::debug;
use reqwest::{
    header::{HeaderValue, ACCEPT},
    Client,
};
use std::path::PathBuf;

use crate::{
    football::types::{Match, SeasonMatchesResponse, SeasonTableEntry},
    FormError, Result, Season,
};


/// Where the static season files live.
///
/// Values starting with `http://` or `https://` are fetched over HTTP; anything
/// else is treated as a directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    Directory(PathBuf),
}

impl DataSource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Remote(location.trim_end_matches('/').to_string())
        } else {
            DataSource::Directory(PathBuf::from(location))
        }
    }

    /// Human-readable location of a file, used in logs and errors.
    pub fn describe(&self, file_name: &str) -> String {
        match self {
            DataSource::Remote(base) => format!("{}/{}", base, file_name),
            DataSource::Directory(dir) => dir.join(file_name).display().to_string(),
        }
    }
}

pub fn season_file_name(season: Season) -> String {
    format!("{}.json", season.as_u16())
}

pub fn table_file_name(season: Season) -> String {
    format!("{}-table.json", season.as_u16())
}

async fn fetch_text(client: &Client, source: &DataSource, file_name: &str) -> Result<String> {
    let location = source.describe(file_name);
    debug!("Loading {}", location);

    match source {
        DataSource::Remote(_) => {
            let res = client
                .get(&location)
                .header(ACCEPT, HeaderValue::from_static("application/json"))
                .send()
                .await?;

            let status = res.status();
            if !status.is_success() {
                return Err(FormError::UnexpectedStatus {
                    url: location,
                    status,
                });
            }

            Ok(res.text().await?)
        }
        DataSource::Directory(dir) => Ok(tokio::fs::read_to_string(dir.join(file_name)).await?),
    }
}

/// Fetch every match of a season, flattened in matchweek order.
pub async fn fetch_season_matches(
    client: &Client,
    source: &DataSource,
    season: Season,
) -> Result<Vec<Match>> {
    let body = fetch_text(client, source, &season_file_name(season)).await?;
    let response: SeasonMatchesResponse = serde_json::from_str(&body)?;
    let matches = response.into_matches();
    debug!("Season {} has {} matches", season, matches.len());
    Ok(matches)
}

/// Fetch the precomputed league table of a season, already ordered by rank.
pub async fn fetch_season_table(
    client: &Client,
    source: &DataSource,
    season: Season,
) -> Result<Vec<SeasonTableEntry>> {
    let body = fetch_text(client, source, &table_file_name(season)).await?;
    Ok(serde_json::from_str(&body)?)
}
