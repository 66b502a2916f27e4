//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use pl_form::{
    cli::{Commands, CompareCmd, DataCmd, PlForm, WidgetsCmd},
    commands::{
        between_seasons::{handle_between_seasons, BetweenSeasonsParams},
        common::CommandContext,
        cross_table::{handle_cross_table, CrossTableParams},
        remaining_matches::{handle_remaining, RemainingParams},
        season_data::{handle_clear_cache, handle_fetch, handle_recent, handle_table},
        widgets::{handle_widgets, WidgetAction},
    },
    core::Settings,
    storage::FormDatabase,
    Result,
};

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = PlForm::parse();
    init_logging(app.verbose);

    let ctx = CommandContext::new(Settings::from_env()?)?;

    match app.command {
        Commands::Compare { cmd } => match cmd {
            CompareCmd::Seasons {
                team,
                anchor,
                compared,
                json,
                refresh,
            } => {
                handle_between_seasons(
                    &ctx,
                    BetweenSeasonsParams {
                        team,
                        anchor,
                        compared,
                        as_json: json,
                        refresh,
                    },
                )
                .await?
            }

            CompareCmd::Remaining {
                teams,
                method,
                json,
                refresh,
            } => {
                handle_remaining(
                    &ctx,
                    RemainingParams {
                        teams,
                        method,
                        as_json: json,
                        refresh,
                    },
                )
                .await?
            }

            CompareCmd::CrossTable {
                order_by,
                json,
                refresh,
            } => {
                handle_cross_table(
                    &ctx,
                    CrossTableParams {
                        order: order_by,
                        as_json: json,
                        refresh,
                    },
                )
                .await?
            }
        },

        Commands::Data { cmd } => match cmd {
            DataCmd::Fetch { refresh } => handle_fetch(&ctx, refresh).await?,
            DataCmd::Table {
                season,
                json,
                refresh,
            } => handle_table(&ctx, season, json, refresh).await?,
            DataCmd::Recent { weeks, json } => handle_recent(&ctx, weeks, json).await?,
            DataCmd::ClearCache => handle_clear_cache(&ctx)?,
        },

        Commands::Widgets { cmd } => {
            let mut db = FormDatabase::new()?;
            let action = match cmd {
                WidgetsCmd::Add { team } => WidgetAction::Add { team },
                WidgetsCmd::Remove { id } => WidgetAction::Remove { id },
                WidgetsCmd::Set { id, team } => WidgetAction::Set { id, team },
                WidgetsCmd::Move { ids } => WidgetAction::Move { ids },
                WidgetsCmd::List { json } => WidgetAction::List { as_json: json },
            };
            handle_widgets(&ctx, &mut db, action).await?
        }
    }

    Ok(())
}
