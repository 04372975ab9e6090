//! Fixed-set membership with no lazy expansion

use std::collections::HashSet;

use super::GroupMembership;
use crate::error::Result;
use crate::types::GroupId;

/// Membership backed by a precomputed, flat set of groups
///
/// Used where the effective groups are already fully known up front, e.g.
/// when an external identity system reports a flat group list. Never
/// consults an include source and never expands anything.
pub struct ListGroupMembership {
    groups: HashSet<GroupId>,
}

impl ListGroupMembership {
    /// Create a membership view over the given groups
    pub fn new(groups: impl IntoIterator<Item = GroupId>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }
}

impl GroupMembership for ListGroupMembership {
    fn contains(&mut self, id: Option<&GroupId>) -> Result<bool> {
        Ok(id.is_some_and(|id| self.groups.contains(id)))
    }

    fn contains_any_of(&mut self, ids: &[GroupId]) -> Result<bool> {
        Ok(ids.iter().any(|id| self.groups.contains(id)))
    }

    fn intersection(&mut self, ids: &[GroupId]) -> Result<HashSet<GroupId>> {
        Ok(ids
            .iter()
            .filter(|id| self.groups.contains(id))
            .copied()
            .collect())
    }

    fn known_groups(&mut self) -> Result<HashSet<GroupId>> {
        Ok(self.groups.clone())
    }
}
