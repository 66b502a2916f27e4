//! Core utilities shared across the crate
//!
//! - `cache`: two-tier (memory LRU + JSON on disk) cache
//! - `config`: environment-driven settings

pub mod cache;
pub mod config;

pub use cache::{cache_root, try_read_to_string, write_string, CacheKey, UnifiedCache};
pub use config::Settings;
