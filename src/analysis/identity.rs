//! Team equivalence across seasons.
//!
//! Each season lists the teams promoted into it. The i-th promoted team of one
//! season is treated as the counterpart of the i-th promoted team of every other
//! season, so a fixture against a newly promoted side can be compared with the
//! fixture against whichever side held that slot in an earlier campaign.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

use crate::{FormError, Result, Season};


/// Teams entering the league for a season and the teams that left at the end of
/// the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTransition {
    pub promoted: Vec<String>,
    #[serde(default)]
    pub relegated: Vec<String>,
}

impl SeasonTransition {
    pub fn new<S: Into<String>>(
        promoted: impl IntoIterator<Item = S>,
        relegated: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            promoted: promoted.into_iter().map(Into::into).collect(),
            relegated: relegated.into_iter().map(Into::into).collect(),
        }
    }
}

/// Promotion/relegation history keyed by season year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionMap {
    transitions: BTreeMap<u16, SeasonTransition>,
}

impl PromotionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three seasons the bundled data covers.
    pub fn builtin() -> Self {
        let mut map = Self::new();
        map.insert(
            Season::new(2025),
            SeasonTransition::new(
                ["Leeds United", "Burnley", "Sunderland"],
                ["Leicester City", "Ipswich Town", "Southampton"],
            ),
        );
        map.insert(
            Season::new(2024),
            SeasonTransition::new(
                ["Leicester City", "Ipswich Town", "Southampton"],
                ["Luton Town", "Burnley", "Sheffield United"],
            ),
        );
        map.insert(
            Season::new(2023),
            SeasonTransition::new(
                ["Burnley", "Sheffield United", "Luton Town"],
                ["Leicester City", "Leeds United", "Southampton"],
            ),
        );
        map
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn insert(&mut self, season: Season, transition: SeasonTransition) {
        self.transitions.insert(season.as_u16(), transition);
    }

    pub fn transition(&self, season: Season) -> Option<&SeasonTransition> {
        self.transitions.get(&season.as_u16())
    }

    /// Seasons covered by the map, oldest first.
    pub fn seasons(&self) -> Vec<Season> {
        self.transitions.keys().copied().map(Season::new).collect()
    }

    pub fn is_promoted(&self, team: &str, season: Season) -> bool {
        self.transition(season)
            .is_some_and(|t| t.promoted.iter().any(|p| p == team))
    }

    /// Explicit `(promoted, relegated)` pairs of one season boundary.
    ///
    /// This is a view of the list positions only; resolution does not use it.
    pub fn pairs(&self, season: Season) -> Option<Vec<(&str, &str)>> {
        let transition = self.transition(season)?;
        Some(
            transition
                .promoted
                .iter()
                .zip(transition.relegated.iter())
                .map(|(p, r)| (p.as_str(), r.as_str()))
                .collect(),
        )
    }

    /// Map `team`, valid in season `from`, to its counterpart in season `to`.
    ///
    /// Teams that were not promoted into `from`, or seasons the map does not
    /// cover, come back unchanged. A promoted slot with no counterpart in `to`
    /// means the reference data is corrupt.
    pub fn resolve_equivalent_team(&self, team: &str, from: Season, to: Season) -> Result<String> {
        if from == to {
            return Ok(team.to_string());
        }

        let (Some(source), Some(target)) = (self.transition(from), self.transition(to)) else {
            return Ok(team.to_string());
        };

        let Some(index) = source.promoted.iter().position(|p| p == team) else {
            return Ok(team.to_string());
        };

        target
            .promoted
            .get(index)
            .cloned()
            .ok_or_else(|| FormError::EquivalenceMappingCorrupt {
                team: team.to_string(),
                from: from.as_u16(),
                to: to.as_u16(),
                index,
            })
    }

    /// Check the positional invariants the resolver relies on.
    pub fn validate(&self) -> Result<()> {
        for (&season, transition) in &self.transitions {
            if transition.promoted.len() != transition.relegated.len() {
                return Err(FormError::PromotionListMismatch {
                    season,
                    promoted: transition.promoted.len(),
                    relegated: transition.relegated.len(),
                });
            }
        }

        for (&from, source) in &self.transitions {
            for (&to, target) in &self.transitions {
                if let Some(team) = source.promoted.get(target.promoted.len()) {
                    return Err(FormError::EquivalenceMappingCorrupt {
                        team: team.clone(),
                        from,
                        to,
                        index: target.promoted.len(),
                    });
                }
            }
        }

        Ok(())
    }
}
