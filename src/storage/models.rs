//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// Most widgets a dashboard can hold.
pub const MAX_WIDGETS: usize = 3;

/// A saved team widget. An empty team name means no team has been picked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub team_name: String,
    pub position: u32,
}
