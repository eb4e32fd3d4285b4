//! The operation classifier behind the compatibility table.
//!
//! For one side's fuse set (plus, for the subnode operations, the other
//! side's set as `sibling`), each catalog operation classifies as neutral
//! (not applicable here), allowed, or blocked. First matching rule wins.

use serde::{Deserialize, Serialize};

use crate::fuse::Fuse;
use crate::fuse_set::FuseSet;
use crate::operation::Operation;
use crate::semantics;
use crate::session::Side;

/// Three-way classification used for presentation (table color-coding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Neutral,
    Allowed,
    Blocked,
}

/// Classify `operation` against `own`, the fuse set of the side under
/// consideration. `sibling` is the *other* side's set and only participates
/// in the subnode operations (a parent cannot overwrite an emancipated
/// child). Applicability is not checked here; see [`classify_for_side`].
pub fn classify(
    own: &FuseSet,
    sibling: Option<&FuseSet>,
    operation: Operation,
) -> Classification {
    use Classification::{Allowed, Blocked, Neutral};
    use Operation::*;

    match operation {
        Renew => Allowed,
        SetSubnodeRecord | SetSubnodeOwner | SetChildFuses => {
            if matches!(operation, SetSubnodeRecord | SetSubnodeOwner)
                && own.contains(Fuse::CannotCreateSubdomain)
            {
                return Blocked;
            }
            if sibling.is_some_and(|s| s.contains(Fuse::ParentCannotControl)) {
                return Blocked;
            }
            if operation == SetSubnodeRecord
                && (own.contains(Fuse::CannotSetTtl) || own.contains(Fuse::CannotSetResolver))
            {
                return Blocked;
            }
            Allowed
        }
        Unwrap | UnwrapEth2Ld => {
            if own.contains(Fuse::CannotUnwrap) {
                Blocked
            } else {
                Allowed
            }
        }
        SafeTransferFrom | SafeBatchTransferFrom => {
            if own.contains(Fuse::CannotTransfer) {
                Blocked
            } else {
                Allowed
            }
        }
        SetResolver => {
            // Inherited quirk, see semantics::SET_RESOLVER_BLOCKED_WHILE_UNLOCKED.
            let unlocked_block = semantics::SET_RESOLVER_BLOCKED_WHILE_UNLOCKED
                && !own.contains(Fuse::CannotUnwrap);
            if unlocked_block || own.contains(Fuse::CannotSetResolver) {
                Blocked
            } else {
                Allowed
            }
        }
        Approve => {
            if own.contains(Fuse::CannotApprove) {
                Blocked
            } else {
                Allowed
            }
        }
        ExtendExpiry => {
            if own.contains(Fuse::CanExtendExpiry) {
                Allowed
            } else {
                Blocked
            }
        }
        SetFuses | SetRecord | SetTtl => {
            if own.contains(Fuse::CannotBurnFuses) || !own.contains(Fuse::CannotUnwrap) {
                return Blocked;
            }
            if matches!(operation, SetRecord | SetTtl) && own.contains(Fuse::CannotSetTtl) {
                return Blocked;
            }
            if operation == SetRecord && own.contains(Fuse::CannotSetResolver) {
                return Blocked;
            }
            Allowed
        }
        // wrap, wrapETH2LD, registerAndWrapETH2LD: no fuse gates them.
        _ => Neutral,
    }
}

/// Like [`classify`], but neutral when the operation does not exist on the
/// given side at all.
pub fn classify_for_side(
    own: &FuseSet,
    sibling: Option<&FuseSet>,
    operation: Operation,
    side: Side,
) -> Classification {
    if !operation.applies_to(side) {
        return Classification::Neutral;
    }
    classify(own, sibling, operation)
}

/// One row of the parent/child compatibility table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub operation: Operation,
    pub parent: Classification,
    pub child: Classification,
}

/// Compute the full compatibility table for the two live names. The parent
/// side sees the child set as sibling (for the subnode rules); the child
/// side has no sibling. Pure data, ready for a renderer.
pub fn permission_table(parent: &FuseSet, child: &FuseSet) -> Vec<TableRow> {
    Operation::CATALOG
        .iter()
        .copied()
        .map(|operation| TableRow {
            operation,
            parent: classify_for_side(parent, Some(child), operation, Side::Parent),
            child: classify_for_side(child, None, operation, Side::Child),
        })
        .collect()
}
