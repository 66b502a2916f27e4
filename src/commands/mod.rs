//! Command implementations for the pl-form CLI
//!
//! Each command splits into a `build_*` step over loaded data, a `render_*`
//! step producing text, and a `handle_*` entry point that loads, builds and prints.

pub mod between_seasons;
pub mod common;
pub mod cross_table;
pub mod remaining_matches;
pub mod season_data;
pub mod widgets;
