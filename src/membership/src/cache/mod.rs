//! Group include source and the in-memory include cache
//!
//! The resolver's sole dependency is a lookup from a group id to the set of
//! groups that directly include it. The trait keeps that dependency
//! pluggable; [`InMemoryGroupIncludeCache`] is the bundled implementation,
//! shareable across resolver instances.

use dashmap::DashMap;
use std::collections::HashSet;
use tracing::trace;

use crate::error::Result;
use crate::types::GroupId;

/// Source of direct group-include relationships
///
/// `parents_of` answers "which groups directly include this group as a
/// member". The answer may be empty. Implementations are expected to be
/// cheap per call (typically cache-backed) and internally consistent for the
/// lifetime of one resolver; the resolver performs no retry and propagates
/// any failure unchanged.
pub trait GroupIncludeSource: Send + Sync {
    /// Groups that directly include `id` as a member
    fn parents_of(&self, id: &GroupId) -> Result<HashSet<GroupId>>;
}

/// Statistics about include-cache usage
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of parent lookups served
    pub lookups: usize,
    /// Lookups for ids with at least one recorded include
    pub hits: usize,
    /// Lookups for ids with no recorded includes
    pub misses: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}

/// In-memory include cache
///
/// Maps each group id to the set of groups that directly include it. Backed
/// by `DashMap`, so one cache can be shared across many resolver instances
/// (the intended pattern: one resolver per evaluation context, one cache per
/// process). How the relation gets populated or refreshed is up to the
/// caller; an id with no recorded includes simply answers the empty set.
pub struct InMemoryGroupIncludeCache {
    /// child id -> ids of groups that directly include it
    parents: DashMap<GroupId, HashSet<GroupId>>,

    /// Lookup statistics
    stats: DashMap<&'static str, usize>,
}

impl InMemoryGroupIncludeCache {
    /// Create an empty include cache
    pub fn new() -> Self {
        Self {
            parents: DashMap::new(),
            stats: DashMap::new(),
        }
    }

    /// Record that `parent` directly includes `child` as a member
    pub fn add_include(&self, parent: GroupId, child: GroupId) {
        self.parents.entry(child).or_default().insert(parent);
    }

    /// Remove a previously recorded include
    pub fn remove_include(&self, parent: &GroupId, child: &GroupId) {
        if let Some(mut entry) = self.parents.get_mut(child) {
            entry.remove(parent);
        }
    }

    /// Number of distinct child ids with recorded includes
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the cache holds no include entries
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            lookups: self.get_stat("lookups"),
            hits: self.get_stat("hits"),
            misses: self.get_stat("misses"),
        }
    }

    fn increment_stat(&self, name: &'static str) {
        *self.stats.entry(name).or_insert(0) += 1;
    }

    fn get_stat(&self, name: &'static str) -> usize {
        self.stats.get(name).map(|v| *v).unwrap_or(0)
    }
}

impl GroupIncludeSource for InMemoryGroupIncludeCache {
    fn parents_of(&self, id: &GroupId) -> Result<HashSet<GroupId>> {
        self.increment_stat("lookups");

        match self.parents.get(id) {
            Some(entry) => {
                self.increment_stat("hits");
                trace!("include lookup for {}: {} direct includer(s)", id, entry.len());
                Ok(entry.clone())
            }
            None => {
                self.increment_stat("misses");
                trace!("include lookup for {}: no recorded includers", id);
                Ok(HashSet::new())
            }
        }
    }
}

impl Default for InMemoryGroupIncludeCache {
    fn default() -> Self {
        Self::new()
    }
}
