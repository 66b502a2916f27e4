//! Error types for the Premier League form comparison crate

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },

    #[error("Invalid matchweek: {value} (expected 1-38)")]
    InvalidMatchweek { value: String },

    #[error("Season {season} has not been loaded")]
    SeasonNotLoaded { season: u16 },

    #[error("Team {team} did not play in season {season}")]
    UnknownTeam { team: String, season: u16 },

    #[error("{team} is neither the home team ({home}) nor the away team ({away})")]
    UnrelatedMatch {
        team: String,
        home: String,
        away: String,
    },

    #[error("Equivalence mapping corrupt: {team} sits at promoted slot {index} in {from} but {to} has no such slot")]
    EquivalenceMappingCorrupt {
        team: String,
        from: u16,
        to: u16,
        index: usize,
    },

    #[error("Promotion lists for {season} do not line up: {promoted} promoted vs {relegated} relegated")]
    PromotionListMismatch {
        season: u16,
        promoted: usize,
        relegated: usize,
    },
}

impl From<anyhow::Error> for FormError {
    fn from(err: anyhow::Error) -> Self {
        FormError::Storage {
            message: err.to_string(),
        }
    }
}
