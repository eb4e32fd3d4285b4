//! Burn authorization: may this fuse be burned, given current state?
//!
//! Both predicates are total and pure. Fuses outside a predicate's domain
//! are denied (`false`) rather than left unspecified: a caller that asks the
//! wrong rule gets a safe answer, never an arbitrary one.

use crate::fuse::Fuse;
use crate::fuse_set::FuseSet;
use crate::semantics::{self, ParentGrant};

/// Whether `fuse` may be burned on a name given the name's *own* fuse set.
///
/// Drives checkbox enablement for owner-controlled fuses. Parent-controlled
/// fuses (`PARENT_CANNOT_CONTROL`, `CAN_EXTEND_EXPIRY`) have no self rule
/// and are denied here; gate them with [`check_parent`], or special-case
/// `PARENT_CANNOT_CONTROL` on the name that owns it as the session layer
/// does.
pub fn check_self(fuses: &FuseSet, fuse: Fuse) -> bool {
    match semantics::burn_rule(fuse) {
        Some(rule) => {
            fuses.contains_all(rule.requires)
                && rule.forbids.iter().all(|forbidden| !fuses.contains(*forbidden))
        }
        // Deny by default for fuses outside the self-rule domain.
        None => false,
    }
}

/// Whether a *child* name may adopt `fuse`, given the parent's fuse set.
///
/// Only parent-controlled fuses are in this rule's domain; a child is
/// emancipated only by a parent that is itself Locked. Everything else is
/// denied here and gated by [`check_self`] instead.
pub fn check_parent(parent_fuses: &FuseSet, fuse: Fuse) -> bool {
    match semantics::parent_grant(fuse) {
        Some(ParentGrant::Requires(required)) => parent_fuses.contains_all(required),
        Some(ParentGrant::Never) | None => false,
    }
}
