//! Reducer behavior: burn gating, policy, and snapshot semantics.

use crate::errors::FuseError;
use crate::fuse::Fuse;
use crate::fuse_set::FuseSet;
use crate::session::{
    apply_toggle, NameStatus, SessionPolicy, SessionState, Side, ToggleCommand,
};

fn burn(target: Side, fuse: Fuse) -> ToggleCommand {
    ToggleCommand {
        target,
        fuse,
        burn: true,
    }
}

fn clear(target: Side, fuse: Fuse) -> ToggleCommand {
    ToggleCommand {
        target,
        fuse,
        burn: false,
    }
}

#[test]
fn unauthorized_burn_is_rejected() {
    let state = SessionState::default();
    let err = apply_toggle(
        &state,
        burn(Side::Child, Fuse::CannotUnwrap),
        &SessionPolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FuseError::BurnNotAuthorized { .. }));
}

#[test]
fn pcc_on_the_parent_itself_is_ungated() {
    let state = SessionState::default();
    let next = apply_toggle(
        &state,
        burn(Side::Parent, Fuse::ParentCannotControl),
        &SessionPolicy::default(),
    )
    .unwrap();
    assert!(next.parent.contains(Fuse::ParentCannotControl));
}

#[test]
fn extend_expiry_is_unburnable_on_either_side() {
    let state = SessionState::new(
        FuseSet::of(&[Fuse::ParentCannotControl, Fuse::CannotUnwrap]),
        FuseSet::EMPTY,
    );
    for side in [Side::Parent, Side::Child] {
        let err = apply_toggle(
            &state,
            burn(side, Fuse::CanExtendExpiry),
            &SessionPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FuseError::BurnNotAuthorized { .. }));
    }
}

#[test]
fn child_emancipation_requires_a_locked_parent() {
    // Scenario D
    let policy = SessionPolicy::default();
    let command = burn(Side::Child, Fuse::ParentCannotControl);

    let locked_parent = SessionState::new(FuseSet::of(&[Fuse::CannotUnwrap]), FuseSet::EMPTY);
    let next = apply_toggle(&locked_parent, command, &policy).unwrap();
    assert!(next.child.contains(Fuse::ParentCannotControl));

    let fresh_parent = SessionState::default();
    assert!(apply_toggle(&fresh_parent, command, &policy).is_err());
}

#[test]
fn burning_an_already_burned_fuse_is_a_no_op() {
    let state = SessionState::new(FuseSet::of(&[Fuse::ParentCannotControl]), FuseSet::EMPTY);
    let next = apply_toggle(
        &state,
        burn(Side::Parent, Fuse::ParentCannotControl),
        &SessionPolicy::default(),
    )
    .unwrap();
    assert_eq!(next, state);
}

#[test]
fn clearing_follows_the_session_policy() {
    let state = SessionState::new(FuseSet::of(&[Fuse::ParentCannotControl]), FuseSet::EMPTY);
    let command = clear(Side::Parent, Fuse::ParentCannotControl);

    let permissive = apply_toggle(&state, command, &SessionPolicy::default()).unwrap();
    assert!(permissive.parent.is_empty());

    let strict = SessionPolicy { burn_only: true };
    let err = apply_toggle(&state, command, &strict).unwrap_err();
    assert!(matches!(err, FuseError::BurnOnly { .. }));
}

#[test]
fn the_input_snapshot_is_never_mutated() {
    let state = SessionState::default();
    let _ = apply_toggle(
        &state,
        burn(Side::Parent, Fuse::ParentCannotControl),
        &SessionPolicy::default(),
    )
    .unwrap();
    assert_eq!(state, SessionState::default());
}

#[test]
fn the_child_walks_the_full_burn_path() {
    // Parent Locked, child fresh: emancipate, lock, then close the lattice.
    let policy = SessionPolicy::default();
    let mut state = SessionState::new(
        FuseSet::of(&[Fuse::ParentCannotControl, Fuse::CannotUnwrap]),
        FuseSet::EMPTY,
    );

    for fuse in [
        Fuse::ParentCannotControl,
        Fuse::CannotUnwrap,
        Fuse::CannotTransfer,
        Fuse::CannotBurnFuses,
    ] {
        state = apply_toggle(&state, burn(Side::Child, fuse), &policy).unwrap();
    }
    assert_eq!(state.child.len(), 4);

    // The burn-fuses lock now rejects the remaining user fuses.
    let err = apply_toggle(&state, burn(Side::Child, Fuse::CannotSetTtl), &policy).unwrap_err();
    assert!(matches!(err, FuseError::BurnNotAuthorized { .. }));

    // CANNOT_APPROVE stays burnable even behind the lock.
    let state = apply_toggle(&state, burn(Side::Child, Fuse::CannotApprove), &policy).unwrap();
    assert!(state.child.contains(Fuse::CannotApprove));
}

#[test]
fn name_status_follows_the_state_machine() {
    assert_eq!(
        NameStatus::derive(&FuseSet::EMPTY, false),
        NameStatus::Unwrapped
    );
    assert_eq!(
        NameStatus::derive(&FuseSet::EMPTY, true),
        NameStatus::Wrapped
    );
    assert_eq!(
        NameStatus::derive(&FuseSet::of(&[Fuse::ParentCannotControl]), true),
        NameStatus::Emancipated
    );
    assert_eq!(
        NameStatus::derive(
            &FuseSet::of(&[Fuse::ParentCannotControl, Fuse::CannotUnwrap]),
            true
        ),
        NameStatus::Locked
    );
}
