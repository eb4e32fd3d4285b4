//! Fuse semantics declared once, as data.
//!
//! Earlier revisions of this model expressed the burn prerequisites twice:
//! once to gate the checkboxes and again inside the compatibility table.
//! The two drifted as fuses were added. Here every prerequisite lives in one
//! const table; the authorization rules and the classifier both read it.

use crate::fuse::Fuse;

/// Prerequisites for burning an owner-controlled fuse: every fuse in
/// `requires` must already be burned, and none in `forbids` may be.
#[derive(Debug, Clone, Copy)]
pub struct BurnRule {
    pub fuse: Fuse,
    pub requires: &'static [Fuse],
    pub forbids: &'static [Fuse],
}

/// Burn prerequisites for every fuse `check_self` has a rule for.
///
/// `CANNOT_UNWRAP` is the gateway fuse: nothing destructive burns before it.
/// Once `CANNOT_BURN_FUSES` is burned the lattice is closed and no further
/// owner-controlled fuse may be burned.
pub const BURN_RULES: &[BurnRule] = &[
    BurnRule {
        fuse: Fuse::CannotApprove,
        requires: &[],
        forbids: &[],
    },
    BurnRule {
        fuse: Fuse::CannotUnwrap,
        requires: &[Fuse::ParentCannotControl],
        forbids: &[],
    },
    BurnRule {
        fuse: Fuse::CannotTransfer,
        requires: &[Fuse::CannotUnwrap],
        forbids: &[Fuse::CannotBurnFuses],
    },
    BurnRule {
        fuse: Fuse::CannotSetResolver,
        requires: &[Fuse::CannotUnwrap],
        forbids: &[Fuse::CannotBurnFuses],
    },
    BurnRule {
        fuse: Fuse::CannotSetTtl,
        requires: &[Fuse::CannotUnwrap],
        forbids: &[Fuse::CannotBurnFuses],
    },
    BurnRule {
        fuse: Fuse::CannotBurnFuses,
        requires: &[Fuse::CannotUnwrap, Fuse::ParentCannotControl],
        forbids: &[],
    },
    BurnRule {
        fuse: Fuse::CannotCreateSubdomain,
        requires: &[Fuse::CannotUnwrap, Fuse::ParentCannotControl],
        forbids: &[Fuse::CannotBurnFuses],
    },
];

/// Look up the burn rule for a fuse. `None` for the parent-controlled fuses,
/// which are gated by [`parent_grant`] instead.
pub fn burn_rule(fuse: Fuse) -> Option<&'static BurnRule> {
    BURN_RULES.iter().find(|rule| rule.fuse == fuse)
}

/// How a child name may adopt a parent-controlled fuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentGrant {
    /// Grantable once the parent's own set contains all listed fuses.
    Requires(&'static [Fuse]),
    /// Never grantable through parent action in this model.
    Never,
}

/// The parent-grant table. A child is only emancipated
/// (`PARENT_CANNOT_CONTROL`) by a parent that is itself Locked.
/// `CAN_EXTEND_EXPIRY` is carried for symmetry but has no grant path.
pub fn parent_grant(fuse: Fuse) -> Option<ParentGrant> {
    match fuse {
        Fuse::ParentCannotControl => Some(ParentGrant::Requires(&[Fuse::CannotUnwrap])),
        Fuse::CanExtendExpiry => Some(ParentGrant::Never),
        _ => None,
    }
}

/// Inherited classification quirk: the compatibility table marks
/// `setResolver` blocked on a name that has not burned `CANNOT_UNWRAP`,
/// even though an unwrapped name's resolver is freely changeable on-chain.
/// Kept deliberately to match the published table; flip only with a
/// stakeholder decision. Pinned by a test in `classifier`.
pub const SET_RESOLVER_BLOCKED_WHILE_UNLOCKED: bool = true;
