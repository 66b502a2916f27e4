//! Unified caching system for both in-memory LRU cache and persistent file storage
//!
//! This module provides a two-tier caching system:
//! - L1 Cache: In-memory LRU cache for fast access
//! - L2 Cache: File system persistence under the user's cache directory
//!
//! Reads that miss memory fall back to disk and promote the value. Disk entries
//! that fail to parse are treated as misses.

use log::{debug, warn};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use crate::Season;

/// Path: ~/.cache/pl-form
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("pl-form")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Generic cache key that can be used for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File name (without extension) for disk storage
    fn to_file_key(&self) -> String;
}

/// Cache key for a season's match list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonMatchesCacheKey {
    pub season: Season,
}

impl CacheKey for SeasonMatchesCacheKey {
    fn to_file_key(&self) -> String {
        format!("season_matches_s{}", self.season.as_u16())
    }
}

/// Cache key for a season's league table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonTableCacheKey {
    pub season: Season,
}

impl CacheKey for SeasonTableCacheKey {
    fn to_file_key(&self) -> String {
        format!("season_table_s{}", self.season.as_u16())
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Arc<Mutex<LruCache<K, V>>>,
    memory_capacity: usize,
    root: PathBuf,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a new unified cache persisting under [`cache_root`]
    pub fn new(memory_capacity: usize) -> Self {
        Self::with_root(memory_capacity, cache_root())
    }

    /// Create a new unified cache persisting under `root`
    pub fn with_root(memory_capacity: usize, root: impl Into<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            memory_capacity: capacity.get(),
            root: root.into(),
        }
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, V>> {
        // A poisoned lock only means another reader panicked; the map itself is intact.
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// File path of the disk entry for `key`
    pub fn file_path(&self, key: &K) -> PathBuf {
        self.root.join(format!("{}.json", key.to_file_key()))
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            return Some(value.clone());
        }

        if let Some(value) = self.get_from_disk(key) {
            self.memory().put(key.clone(), value.clone());
            return Some(value);
        }

        None
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        if let Err(e) = self.put_to_disk(&key, &value) {
            warn!(
                "Could not persist cache entry {}: {}",
                self.file_path(&key).display(),
                e
            );
        }

        self.memory().put(key, value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = self.file_path(key);
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!("Loaded {} from disk cache", path.display());
                Some(value)
            }
            Err(e) => {
                warn!("Ignoring unreadable cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let path = self.file_path(key);
        let content = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        self.memory().clear();
    }

    /// Drop one entry from both tiers
    pub fn invalidate(&self, key: &K) -> std::io::Result<()> {
        self.memory().pop(key);
        let path = self.file_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Get memory cache statistics
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity)
    }
}
