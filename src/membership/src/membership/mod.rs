//! Membership query contract and its implementations
//!
//! [`GroupMembership`] is the surface an access-control layer checks against:
//! single-membership, any-of, intersection and full-closure queries.
//! [`MembershipResolver`] answers them by lazily expanding the include graph;
//! [`ListGroupMembership`] answers them from a precomputed flat set.

mod list;
mod resolver;


pub use list::ListGroupMembership;
pub use resolver::MembershipResolver;

use std::collections::HashSet;

use crate::error::Result;
use crate::types::GroupId;

/// Membership checks against a principal's effective groups
///
/// Results are deterministic given a fixed seed set and include relation,
/// but implementations may expand internal state as a side effect of
/// answering, so every method takes `&mut self`. Callers needing concurrent
/// checks construct one instance per caller rather than sharing one.
pub trait GroupMembership {
    /// Whether `id` is among the effective groups. `None` answers `false`
    /// without any work.
    fn contains(&mut self, id: Option<&GroupId>) -> Result<bool>;

    /// Whether any of `ids` is among the effective groups
    fn contains_any_of(&mut self, ids: &[GroupId]) -> Result<bool>;

    /// The subset of `ids` among the effective groups
    fn intersection(&mut self, ids: &[GroupId]) -> Result<HashSet<GroupId>>;

    /// Every effective group
    fn known_groups(&mut self) -> Result<HashSet<GroupId>>;
}
