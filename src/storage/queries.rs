//! Widget queries
//!
//! Every mutation returns the full widget list afterwards, in display order.

use super::{models::*, schema::FormDatabase};
use anyhow::Result;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};

fn widget_from_row(row: &Row) -> rusqlite::Result<Widget> {
    Ok(Widget {
        id: row.get(0)?,
        team_name: row.get(1)?,
        position: row.get(2)?,
    })
}

impl FormDatabase {
    /// All widgets in display order
    pub fn list_widgets(&self) -> Result<Vec<Widget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, team_name, position FROM widgets ORDER BY position, created_at")?;
        let widgets = stmt
            .query_map([], widget_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(widgets)
    }

    pub fn get_widget(&self, id: &str) -> Result<Option<Widget>> {
        let widget = self
            .conn
            .query_row(
                "SELECT id, team_name, position FROM widgets WHERE id = ?",
                params![id],
                widget_from_row,
            )
            .optional()?;
        Ok(widget)
    }

    /// Append a widget for `team_name`. A full dashboard is left as it is.
    pub fn add_widget(&mut self, team_name: &str) -> Result<Vec<Widget>> {
        let widgets = self.list_widgets()?;
        if widgets.len() >= MAX_WIDGETS {
            debug!("Dashboard already holds {} widgets", MAX_WIDGETS);
            return Ok(widgets);
        }

        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as i64;
        let mut stamp = now;
        while widgets.iter().any(|w| w.id == format!("widget-{}", stamp)) {
            stamp += 1;
        }
        let position = widgets.iter().map(|w| w.position + 1).max().unwrap_or(0);

        self.conn.execute(
            "INSERT INTO widgets (id, team_name, position, created_at) VALUES (?, ?, ?, ?)",
            params![format!("widget-{}", stamp), team_name, position, now],
        )?;

        self.list_widgets()
    }

    /// Remove a widget; unknown ids are ignored.
    pub fn remove_widget(&mut self, id: &str) -> Result<Vec<Widget>> {
        self.conn
            .execute("DELETE FROM widgets WHERE id = ?", params![id])?;
        self.list_widgets()
    }

    /// Point a widget at another team; unknown ids are ignored.
    pub fn set_widget_team(&mut self, id: &str, team_name: &str) -> Result<Vec<Widget>> {
        self.conn.execute(
            "UPDATE widgets SET team_name = ? WHERE id = ?",
            params![team_name, id],
        )?;
        self.list_widgets()
    }

    /// Put the widgets named in `ids` first, in that order; the rest keep their relative order.
    pub fn reorder_widgets(&mut self, ids: &[String]) -> Result<Vec<Widget>> {
        let current = self.list_widgets()?;
        let mut ordered: Vec<&Widget> = ids
            .iter()
            .filter_map(|id| current.iter().find(|w| &w.id == id))
            .collect();
        ordered.dedup_by(|a, b| a.id == b.id);
        let rest: Vec<&Widget> = current
            .iter()
            .filter(|w| !ordered.iter().any(|o| o.id == w.id))
            .collect();
        ordered.extend(rest);

        let tx = self.conn.transaction()?;
        for (position, widget) in ordered.iter().enumerate() {
            tx.execute(
                "UPDATE widgets SET position = ? WHERE id = ?",
                params![position as u32, widget.id],
            )?;
        }
        tx.commit()?;

        self.list_widgets()
    }
}
