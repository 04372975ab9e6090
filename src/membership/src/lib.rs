//! # Group Membership Resolution Engine
//!
//! Lazy, incremental resolution of the transitive closure of group
//! membership. Given the "seed" groups a principal directly belongs to, the
//! engine discovers every group reachable through group-include
//! relationships (group P includes group C, so members of C are effectively
//! members of P), expanding the closure only as far as each query requires.
//!
//! ## Features
//!
//! - **Incremental breadth-first expansion** with a persistent visited set
//!   and FIFO frontier, so no group is looked up more than once per resolver
//!   instance
//! - **Early termination** for single-membership and any-of queries
//! - **Cycle safety** without any cycle-detection pass
//! - **Pluggable include source** behind the [`GroupIncludeSource`] trait,
//!   with a `DashMap`-backed in-memory cache included
//!
//! ## Example
//!
//! ```rust
//! use group_membership::{GroupId, InMemoryGroupIncludeCache, MembershipResolver};
//! use std::sync::Arc;
//!
//! # fn main() -> group_membership::Result<()> {
//! let cache = Arc::new(InMemoryGroupIncludeCache::new());
//!
//! let admins = GroupId::random();
//! let developers = GroupId::random();
//!
//! // "admins" includes "developers": every developer is an admin here.
//! cache.add_include(admins, developers);
//!
//! let mut membership = MembershipResolver::new(cache, [developers]);
//! assert!(membership.contains(Some(&admins))?);
//! # Ok(())
//! # }
//! ```
//!
//! A resolver instance is intended to live for one request or evaluation
//! context. Queries mutate its internal state (the closure only ever grows),
//! so an instance must not be shared between concurrent callers; construct
//! one per context instead.

pub mod cache;
pub mod error;
pub mod membership;
pub mod types;

// Re-export commonly used types
pub use cache::{CacheStats, GroupIncludeSource, InMemoryGroupIncludeCache};
pub use error::{MembershipError, Result};
pub use membership::{GroupMembership, ListGroupMembership, MembershipResolver};
pub use types::GroupId;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
