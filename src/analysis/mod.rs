//! Pure comparison and rating logic over already-loaded season data.
//!
//! Nothing in here performs I/O or holds shared mutable state; every function
//! can be called repeatedly, from any thread, with identical results.
//!
//! - `identity`: team equivalence across promotion/relegation
//! - `enrich`: per-team view of a match (opponent, venue, result)
//! - `fdr`: fixture difficulty rating
//! - `index`: cross-season fixture lookup
//! - `table`: league table derivation
//! - `compare`: the comparison views built from the pieces above

pub mod compare;
pub mod enrich;
pub mod fdr;
pub mod identity;
pub mod index;
pub mod table;

pub use enrich::{enrich, DisplayColor, EnrichedMatch, MatchResult, Venue};
pub use fdr::{format_rating, RatingMethod, Severity};
pub use identity::{PromotionMap, SeasonTransition};
pub use index::{AnchorKey, MatchIndex};
