//! Two-name session state and the toggle reducer.
//!
//! The model holds exactly two live names: one top-level wrapped name (the
//! parent) and one subname (the child). All mutation flows through
//! [`apply_toggle`], a pure reducer over immutable snapshots, so the UI
//! layer stays free of set-updating closures.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{FuseError, FuseResult};
use crate::fuse::{Fuse, FuseTier};
use crate::fuse_set::FuseSet;
use crate::rules::{check_parent, check_self};

/// Which of the two live name instances a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Parent,
    Child,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Parent => f.write_str("parent"),
            Side::Child => f.write_str("child"),
        }
    }
}

/// A single user toggle: burn or clear one fuse on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleCommand {
    pub target: Side,
    pub fuse: Fuse,
    pub burn: bool,
}

/// Session-level policy for the reducer.
///
/// Real deployments never unburn a fuse; the exploratory UI allows it so
/// users can walk states back. `burn_only` opts into the deployment
/// semantics. Defaults to permissive, matching the original guide.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionPolicy {
    #[serde(default)]
    pub burn_only: bool,
}

/// The fuse state of both live names. Immutable snapshot; the reducer
/// returns a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub parent: FuseSet,
    pub child: FuseSet,
}

impl SessionState {
    pub fn new(parent: FuseSet, child: FuseSet) -> Self {
        SessionState { parent, child }
    }

    pub fn side(&self, side: Side) -> &FuseSet {
        match side {
            Side::Parent => &self.parent,
            Side::Child => &self.child,
        }
    }

    fn replaced(&self, side: Side, set: FuseSet) -> SessionState {
        match side {
            Side::Parent => SessionState {
                parent: set,
                ..*self
            },
            Side::Child => SessionState { child: set, ..*self },
        }
    }
}

/// Apply one toggle command, producing the next session snapshot.
///
/// Burns are gated by the authorization rules:
/// - `PARENT_CANNOT_CONTROL` on the parent itself is ungated (the top-level
///   name answers to no modeled parent);
/// - parent-controlled fuses on the child go through [`check_parent`]
///   against the parent's set;
/// - owner-controlled fuses go through [`check_self`] against the target's
///   own set.
///
/// Clears succeed only under a permissive policy. No fuse is ever added or
/// removed as a side effect of another.
pub fn apply_toggle(
    state: &SessionState,
    command: ToggleCommand,
    policy: &SessionPolicy,
) -> FuseResult<SessionState> {
    let own = state.side(command.target);

    if command.burn {
        if own.contains(command.fuse) {
            return Ok(*state);
        }
        let authorized = match (command.fuse.tier(), command.target) {
            (FuseTier::ParentControlled, Side::Parent) => {
                command.fuse == Fuse::ParentCannotControl
            }
            (FuseTier::ParentControlled, Side::Child) => {
                check_parent(&state.parent, command.fuse)
            }
            (FuseTier::OwnerControlled, _) => check_self(own, command.fuse),
        };
        if !authorized {
            return Err(FuseError::burn_not_authorized(command.fuse, command.target));
        }
        debug!("burning {} on the {} name", command.fuse, command.target);
        Ok(state.replaced(command.target, own.with(command.fuse)))
    } else {
        if policy.burn_only {
            return Err(FuseError::BurnOnly { fuse: command.fuse });
        }
        debug!("clearing {} on the {} name", command.fuse, command.target);
        Ok(state.replaced(command.target, own.without(command.fuse)))
    }
}

/// Derived lifecycle status of a name. Not stored anywhere: recomputed from
/// the fuse set plus the external "is it wrapped yet" precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStatus {
    Unwrapped,
    Wrapped,
    Emancipated,
    Locked,
}

impl NameStatus {
    pub fn derive(fuses: &FuseSet, wrapped: bool) -> Self {
        if !wrapped {
            return NameStatus::Unwrapped;
        }
        match (
            fuses.contains(Fuse::ParentCannotControl),
            fuses.contains(Fuse::CannotUnwrap),
        ) {
            (false, _) => NameStatus::Wrapped,
            (true, false) => NameStatus::Emancipated,
            (true, true) => NameStatus::Locked,
        }
    }
}
