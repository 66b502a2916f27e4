//! Cross-season fixture lookup.
//!
//! A [`MatchIndex`] holds one season's matches, enriched for one or more
//! perspective teams, keyed by `(home, away, perspective)`. Pairing a fixture
//! with last season's "same" fixture means resolving the opponent into the
//! indexed season and rebuilding the key.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use crate::{
    analysis::{
        enrich::{enrich, EnrichedMatch, Venue},
        identity::PromotionMap,
    },
    football::types::Match,
    Result, Season,
};


#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnchorKey {
    pub home: String,
    pub away: String,
    pub perspective: String,
}

impl AnchorKey {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        perspective: impl Into<String>,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            perspective: perspective.into(),
        }
    }

    /// Key of `perspective`'s fixture against `opponent` at `venue`.
    pub fn for_fixture(perspective: &str, opponent: &str, venue: Venue) -> Self {
        match venue {
            Venue::Home => Self::new(perspective, opponent, perspective),
            Venue::Away => Self::new(opponent, perspective, perspective),
        }
    }
}

impl fmt::Display for AnchorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {} vs {}", self.home, self.away, self.perspective)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchIndex {
    season: Season,
    entries: HashMap<AnchorKey, EnrichedMatch>,
}

impl MatchIndex {
    pub fn empty(season: Season) -> Self {
        Self {
            season,
            entries: HashMap::new(),
        }
    }

    /// Index every match of `season` that involves `perspective`.
    pub fn build(season: Season, matches: &[Match], perspective: &str) -> Self {
        let mut index = Self::empty(season);
        index.extend(matches, perspective);
        index
    }

    /// Add `perspective`'s matches to this index. A repeated key overwrites the earlier entry.
    pub fn extend(&mut self, matches: &[Match], perspective: &str) {
        for fixture in matches.iter().filter(|m| m.involves(perspective)) {
            // `involves` guarantees the perspective is one of the two sides.
            let Ok(enriched) = enrich(fixture, perspective) else {
                continue;
            };
            let key = AnchorKey::new(
                fixture.home_team.name.as_str(),
                fixture.away_team.name.as_str(),
                perspective,
            );
            self.entries.insert(key, enriched);
        }
    }

    /// Find `perspective`'s fixture against `opponent` at `venue` in this season.
    ///
    /// `opponent` is named as it was in `opponent_season` and is resolved into
    /// this index's season first. No fixture is `Ok(None)`; only a corrupt
    /// promotion map is an error.
    pub fn lookup(
        &self,
        promotions: &PromotionMap,
        opponent_season: Season,
        opponent: &str,
        perspective: &str,
        venue: Venue,
    ) -> Result<Option<&EnrichedMatch>> {
        let equivalent = promotions.resolve_equivalent_team(opponent, opponent_season, self.season)?;
        let key = AnchorKey::for_fixture(perspective, &equivalent, venue);
        Ok(self.entries.get(&key))
    }

    pub fn get(&self, key: &AnchorKey) -> Option<&EnrichedMatch> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn season(&self) -> Season {
        self.season
    }
}
