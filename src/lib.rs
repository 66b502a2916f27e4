//! Premier League form comparison library
//!
//! Compares a Premier League team's current-season results with the same
//! fixtures from earlier seasons, treating promoted sides as stand-ins for the
//! sides they replaced, and rates upcoming fixtures by difficulty.
//!
//! ## Features
//!
//! - **Team Equivalence**: Map promoted teams onto the relegated teams whose slot they took
//! - **Match Enrichment**: Opponent, venue and result of a match from one team's side
//! - **Fixture Difficulty**: 1-5 ratings from league position or points percentile
//! - **Cross-Season Index**: Pair a fixture with its counterpart from an earlier season
//! - **Comparison Views**: Season over season, remaining fixtures, cross table, team form
//! - **Caching**: Season data cached in memory and under `~/.cache/pl-form`
//!
//! ## Quick Start
//!
//! ```rust
//! use pl_form::{
//!     analysis::{enrich, MatchResult, PromotionMap},
//!     football::{Match, Period, TeamScore},
//!     Matchweek, Season,
//! };
//!
//! # fn example() -> pl_form::Result<()> {
//! let fixture = Match::new(
//!     Season::new(2025),
//!     Matchweek::new(1),
//!     "2025-08-17 16:30:00",
//!     TeamScore::new("Arsenal", "ARS", 2),
//!     TeamScore::new("Sunderland", "SUN", 1),
//!     Period::Finished,
//! );
//! assert_eq!(enrich(&fixture, "Arsenal")?.result, Some(MatchResult::Win));
//!
//! let promotions = PromotionMap::builtin();
//! let last_year = promotions.resolve_equivalent_team("Sunderland", Season::new(2025), Season::new(2024))?;
//! assert_eq!(last_year, "Southampton");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PL_FORM_DATA_URL=https://example.org/pl-form-comparison
//! export PL_FORM_SEASON=2025
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod football;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Matchweek, Season};
pub use error::{FormError, Result};
pub use football::{Match, SeasonTableEntry};

/// Base location of the season files: an `http(s)://` URL or a directory.
pub const DATA_URL_ENV_VAR: &str = "PL_FORM_DATA_URL";
/// Current season, by starting year.
pub const SEASON_ENV_VAR: &str = "PL_FORM_SEASON";
/// Number of earlier seasons to compare against.
pub const HISTORY_ENV_VAR: &str = "PL_FORM_HISTORY";
/// JSON file overriding the built-in promotion data.
pub const PROMOTIONS_ENV_VAR: &str = "PL_FORM_PROMOTIONS";
