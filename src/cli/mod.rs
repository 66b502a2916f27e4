//! CLI argument definitions and parsing.

pub mod types;


use clap::{Parser, Subcommand};

use crate::analysis::fdr::RatingMethod;
use types::{CrossTableOrder, Season};

#[derive(Debug, Subcommand)]
pub enum CompareCmd {
    /// Compare a team's fixtures with the same fixtures from another season.
    ///
    /// Promoted opponents are compared with the relegated side whose place they took.
    Seasons {
        /// Team name (case-insensitive), e.g. "Arsenal".
        #[clap(long, short)]
        team: String,

        /// Season to compare from (defaults to the current season).
        #[clap(long)]
        anchor: Option<Season>,

        /// Season to compare with (defaults to the team's latest earlier season).
        #[clap(long)]
        compared: Option<Season>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Force refresh from the data source even if cached data exists
        #[clap(long)]
        refresh: bool,
    },

    /// Remaining fixtures of one or more teams with difficulty ratings and past results.
    Remaining {
        /// Team to include (repeatable): `-t Arsenal -t Liverpool`.
        #[clap(long = "team", short = 't', required = true)]
        teams: Vec<String>,

        /// Fixture difficulty method.
        #[clap(long, value_enum, default_value_t = RatingMethod::default())]
        method: RatingMethod,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from the data source even if cached data exists
        #[clap(long)]
        refresh: bool,
    },

    /// Every home/away result of the current season in one grid.
    CrossTable {
        /// Row and column order.
        #[clap(long, value_enum, default_value_t = CrossTableOrder::default())]
        order_by: CrossTableOrder,

        /// Output results as JSON instead of a grid.
        #[clap(long)]
        json: bool,

        /// Force refresh from the data source even if cached data exists
        #[clap(long)]
        refresh: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum DataCmd {
    /// Load every configured season and the current table into the cache.
    Fetch {
        /// Ignore cached data and fetch again.
        #[clap(long)]
        refresh: bool,
    },

    /// League table of a season.
    Table {
        /// Season year (defaults to the current season).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Force refresh from the data source even if cached data exists
        #[clap(long)]
        refresh: bool,
    },

    /// Results of the latest matchweeks, newest first.
    Recent {
        /// Number of matchweeks.
        #[clap(long, short, default_value_t = 10)]
        weeks: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete cached season data.
    ClearCache,
}

#[derive(Debug, Subcommand)]
pub enum WidgetsCmd {
    /// Add a team widget (at most 3).
    Add {
        /// Team to show; leave out to pick one later.
        team: Option<String>,
    },

    /// Remove a widget.
    Remove { id: String },

    /// Point a widget at another team.
    Set { id: String, team: String },

    /// Reorder widgets: the listed ids come first, in the given order.
    Move {
        #[clap(required = true)]
        ids: Vec<String>,
    },

    /// Show widgets with each team's recent form and next fixture.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "pl-form", about = "Premier League form comparison")]
pub struct PlForm {
    /// Debug logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare form across seasons and fixtures
    Compare {
        #[clap(subcommand)]
        cmd: CompareCmd,
    },

    /// Load and inspect season data
    Data {
        #[clap(subcommand)]
        cmd: DataCmd,
    },

    /// Manage dashboard widgets
    Widgets {
        #[clap(subcommand)]
        cmd: WidgetsCmd,
    },
}
