//! Dashboard widgets: saved teams with their current form

use serde::Serialize;

use crate::{
    analysis::compare::{team_form, TeamForm},
    football::types::{Match, SeasonTableEntry},
    storage::{FormDatabase, Widget},
    Result,
};

use super::common::{ordinal, print_json, resolve_team, short_kickoff, CommandContext};

/// Results shown per widget.
pub const WIDGET_FORM_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    Add { team: Option<String> },
    Remove { id: String },
    Set { id: String, team: String },
    Move { ids: Vec<String> },
    List { as_json: bool },
}

/// A widget together with the form of its team, when one is set.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    #[serde(flatten)]
    pub widget: Widget,
    pub form: Option<TeamForm>,
}

pub fn build_widget_views(
    widgets: Vec<Widget>,
    matches: &[Match],
    table: &[SeasonTableEntry],
) -> Result<Vec<WidgetView>> {
    widgets
        .into_iter()
        .map(|widget| -> Result<WidgetView> {
            let form = if widget.team_name.is_empty() {
                None
            } else {
                Some(team_form(&widget.team_name, matches, table, WIDGET_FORM_LENGTH)?)
            };
            Ok(WidgetView { widget, form })
        })
        .collect()
}

pub fn render_widgets(views: &[WidgetView]) -> String {
    if views.is_empty() {
        return "No widgets saved\n".to_string();
    }

    let mut out = String::new();
    for view in views {
        let Some(form) = &view.form else {
            out.push_str(&format!("[{}] (no team selected)\n", view.widget.id));
            continue;
        };

        let position = form
            .position
            .map(ordinal)
            .unwrap_or_else(|| "-".to_string());
        let next = match &form.next {
            Some(m) => format!(
                "{} ({}) {}",
                m.opponent.short_name,
                m.venue.letter(),
                short_kickoff(&m.fixture.kickoff)
            ),
            None => "none".to_string(),
        };
        out.push_str(&format!(
            "[{}] {} ({})  Form: {}  Next: {}\n",
            view.widget.id,
            form.team,
            position,
            form.form_string(),
            next
        ));
    }
    out
}

fn render_ids(widgets: &[Widget]) -> String {
    widgets
        .iter()
        .map(|w| {
            if w.team_name.is_empty() {
                w.id.clone()
            } else {
                format!("{} ({})", w.id, w.team_name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Handle `widgets ...`
pub async fn handle_widgets(
    ctx: &CommandContext,
    db: &mut FormDatabase,
    action: WidgetAction,
) -> Result<()> {
    let current = ctx.current_season();

    let updated = match action {
        WidgetAction::Add { team } => {
            let team = match team {
                Some(input) => {
                    let teams = ctx.provider.seasons(&[current], false).await?.teams(current)?;
                    resolve_team(&input, &teams, current)?
                }
                None => String::new(),
            };
            db.add_widget(&team)?
        }
        WidgetAction::Remove { id } => db.remove_widget(&id)?,
        WidgetAction::Set { id, team } => {
            let teams = ctx.provider.seasons(&[current], false).await?.teams(current)?;
            let team = resolve_team(&team, &teams, current)?;
            db.set_widget_team(&id, &team)?
        }
        WidgetAction::Move { ids } => db.reorder_widgets(&ids)?,
        WidgetAction::List { as_json } => {
            let widgets = db.list_widgets()?;
            let matches = ctx.provider.season(current, false).await?;
            let table = ctx.current_table(false).await?;
            let views = build_widget_views(widgets, &matches, &table)?;
            if as_json {
                print_json(&views)?;
            } else {
                print!("{}", render_widgets(&views)); // tarpaulin::skip
            }
            return Ok(());
        }
    };

    println!("Widgets: {}", render_ids(&updated)); // tarpaulin::skip
    Ok(())
}
