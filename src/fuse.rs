//! The fuse catalog: every permission bit the NameWrapper model knows about.
//!
//! The catalog is fixed and ordered. Display order (checkbox stacks, the
//! state readout) is the reverse of declaration order, so
//! `PARENT_CANNOT_CONTROL` renders first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FuseError;

/// A named permission-restriction bit. Burning a fuse is conceptually
/// irreversible; the session layer decides whether to enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fuse {
    CannotBurnFuses,
    CannotApprove,
    CannotCreateSubdomain,
    CannotTransfer,
    CannotSetResolver,
    CannotSetTtl,
    CannotUnwrap,
    CanExtendExpiry,
    ParentCannotControl,
}

/// Who may set a fuse: the name's own owner, or only its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuseTier {
    OwnerControlled,
    ParentControlled,
}

impl Fuse {
    /// The full catalog in declaration order. Immutable after initialization.
    pub const CATALOG: &'static [Fuse] = &[
        Fuse::CannotBurnFuses,
        Fuse::CannotApprove,
        Fuse::CannotCreateSubdomain,
        Fuse::CannotTransfer,
        Fuse::CannotSetResolver,
        Fuse::CannotSetTtl,
        Fuse::CannotUnwrap,
        Fuse::CanExtendExpiry,
        Fuse::ParentCannotControl,
    ];

    /// Catalog enumeration in display order (reverse of declaration order).
    pub fn display_order() -> impl Iterator<Item = Fuse> {
        Self::CATALOG.iter().rev().copied()
    }

    /// The wire name, as the NameWrapper contract spells it.
    pub fn name(self) -> &'static str {
        match self {
            Fuse::CannotBurnFuses => "CANNOT_BURN_FUSES",
            Fuse::CannotApprove => "CANNOT_APPROVE",
            Fuse::CannotCreateSubdomain => "CANNOT_CREATE_SUBDOMAIN",
            Fuse::CannotTransfer => "CANNOT_TRANSFER",
            Fuse::CannotSetResolver => "CANNOT_SET_RESOLVER",
            Fuse::CannotSetTtl => "CANNOT_SET_TTL",
            Fuse::CannotUnwrap => "CANNOT_UNWRAP",
            Fuse::CanExtendExpiry => "CAN_EXTEND_EXPIRY",
            Fuse::ParentCannotControl => "PARENT_CANNOT_CONTROL",
        }
    }

    /// Which side of the parent/owner split controls this fuse.
    pub fn tier(self) -> FuseTier {
        match self {
            Fuse::ParentCannotControl | Fuse::CanExtendExpiry => FuseTier::ParentControlled,
            _ => FuseTier::OwnerControlled,
        }
    }

    /// The three "user" fuses that share a single burn prerequisite rule.
    pub fn is_user_fuse(self) -> bool {
        matches!(
            self,
            Fuse::CannotTransfer | Fuse::CannotSetResolver | Fuse::CannotSetTtl
        )
    }

    /// Stable bit index within the catalog, used by `FuseSet`.
    pub(crate) fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Fuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fuse {
    type Err = FuseError;

    fn from_str(input: &str) -> Result<Fuse, Self::Err> {
        Fuse::CATALOG
            .iter()
            .copied()
            .find(|fuse| fuse.name() == input)
            .ok_or_else(|| FuseError::unknown_fuse(input))
    }
}
