//! Lazy transitive-closure resolver over group-include relationships

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, trace};

use super::GroupMembership;
use crate::cache::GroupIncludeSource;
use crate::error::Result;
use crate::types::GroupId;

/// Resolves the transitive closure of a seed set of groups, lazily
///
/// The resolver starts from the groups a principal directly belongs to and
/// discovers their includers breadth-first, one frontier entry at a time,
/// stopping as soon as the query at hand is answered. Two pieces of state
/// persist across queries:
///
/// - `known`: every group proven reachable so far. Grows monotonically;
///   once the frontier is exhausted it equals the full closure.
/// - `frontier`: known groups whose includers have not been enumerated yet,
///   in FIFO order.
///
/// Because both persist, each group id is looked up against the include
/// source at most once per resolver instance, no matter how many queries are
/// issued. The flip side is that queries mutate state: an instance is not
/// safe for concurrent callers. Construct one per request or evaluation
/// context.
///
/// If an include-source lookup fails, the error propagates unchanged and the
/// instance is left with a partially expanded frontier; discard it rather
/// than reusing it.
///
/// # Example
///
/// ```rust
/// use group_membership::{GroupId, InMemoryGroupIncludeCache, MembershipResolver};
/// use std::sync::Arc;
///
/// # fn main() -> group_membership::Result<()> {
/// let cache = Arc::new(InMemoryGroupIncludeCache::new());
/// let staff = GroupId::random();
/// let qa = GroupId::random();
/// cache.add_include(staff, qa);
///
/// let mut membership = MembershipResolver::new(cache, [qa]);
/// assert!(membership.contains(Some(&staff))?);
/// assert_eq!(membership.known_groups()?.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct MembershipResolver {
    /// Source of direct include relationships
    source: Arc<dyn GroupIncludeSource>,

    /// Every group proven reachable so far (seeds plus discovered includers)
    known: HashSet<GroupId>,

    /// Known groups whose includers have not been enumerated yet
    frontier: VecDeque<GroupId>,
}

impl MembershipResolver {
    /// Create a resolver for the given seed groups
    ///
    /// Duplicate seeds collapse to a single entry. An empty seed set is
    /// valid and yields a resolver that answers `false` to every membership
    /// query without consulting the include source.
    pub fn new(
        source: Arc<dyn GroupIncludeSource>,
        seeds: impl IntoIterator<Item = GroupId>,
    ) -> Self {
        let mut known = HashSet::new();
        let mut frontier = VecDeque::new();
        for seed in seeds {
            if known.insert(seed) {
                frontier.push_back(seed);
            }
        }

        Self {
            source,
            known,
            frontier,
        }
    }

    /// Whether `id` is part of the closure, expanding only as far as needed
    ///
    /// `None` answers `false` immediately. An already-discovered id is the
    /// fast path; otherwise one bounded expansion pass runs until the id is
    /// discovered or the frontier is exhausted.
    pub fn contains(&mut self, id: Option<&GroupId>) -> Result<bool> {
        let Some(id) = id else {
            return Ok(false);
        };
        if self.known.contains(id) {
            return Ok(true);
        }

        let target = HashSet::from([*id]);
        self.expand_until(&target)
    }

    /// Whether any of `ids` is part of the closure
    ///
    /// Any id that is already known short-circuits the whole call while the
    /// query set is still being built. Ids never seen before are resolved
    /// with a single expansion pass that stops at the first hit.
    pub fn contains_any_of<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a GroupId>,
    ) -> Result<bool> {
        let mut query = HashSet::new();
        for id in ids {
            if self.known.contains(id) {
                return Ok(true);
            }
            query.insert(*id);
        }

        // An empty target set can never be satisfied; skip the exhaustive
        // pass it would otherwise trigger.
        if query.is_empty() {
            return Ok(false);
        }

        self.expand_until(&query)
    }

    /// The subset of `ids` that are part of the closure
    ///
    /// Each id is tested independently; later ids reuse the expansion work
    /// done for earlier ones, so test order affects only incidental work,
    /// never the result.
    pub fn intersection<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a GroupId>,
    ) -> Result<HashSet<GroupId>> {
        let mut result = HashSet::new();
        for id in ids {
            if self.contains(Some(id))? {
                result.insert(*id);
            }
        }
        Ok(result)
    }

    /// Every group in the closure, computing it in full
    ///
    /// Exhausts the frontier and returns a copy of the known set. Afterwards
    /// every query against this instance is an O(1) set lookup.
    pub fn known_groups(&mut self) -> Result<HashSet<GroupId>> {
        self.expand_until(&HashSet::new())?;
        Ok(self.known.clone())
    }

    /// Whether the full closure has been computed
    pub fn is_complete(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Number of groups proven reachable so far
    pub fn known_len(&self) -> usize {
        self.known.len()
    }

    /// Bounded frontier expansion towards a target set
    ///
    /// Dequeues groups in FIFO order, enumerates each one's includers
    /// exactly once and stops at the end of the first round that discovers a
    /// target. An empty target set is never satisfied, so the loop runs the
    /// frontier to exhaustion; that is how [`Self::known_groups`] computes
    /// the full closure. The `known`-insert gate keeps cycles from
    /// re-enqueueing anything, so traversal always terminates.
    fn expand_until(&mut self, targets: &HashSet<GroupId>) -> Result<bool> {
        let mut found = false;
        while !found {
            let Some(current) = self.frontier.pop_front() else {
                break;
            };

            let parents = self.source.parents_of(&current)?;
            trace!("expanded {}: {} direct includer(s)", current, parents.len());

            for parent in parents {
                if self.known.insert(parent) {
                    self.frontier.push_back(parent);
                    if targets.contains(&parent) {
                        found = true;
                    }
                }
            }
        }

        if found {
            debug!(
                "target discovered with {} group(s) known, {} still queued",
                self.known.len(),
                self.frontier.len()
            );
        }

        Ok(found)
    }
}

impl GroupMembership for MembershipResolver {
    fn contains(&mut self, id: Option<&GroupId>) -> Result<bool> {
        MembershipResolver::contains(self, id)
    }

    fn contains_any_of(&mut self, ids: &[GroupId]) -> Result<bool> {
        MembershipResolver::contains_any_of(self, ids.iter())
    }

    fn intersection(&mut self, ids: &[GroupId]) -> Result<HashSet<GroupId>> {
        MembershipResolver::intersection(self, ids.iter())
    }

    fn known_groups(&mut self) -> Result<HashSet<GroupId>> {
        MembershipResolver::known_groups(self)
    }
}
