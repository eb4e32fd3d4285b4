//! Exhaustive checks of the burn-authorization rules. The state space is
//! nine booleans, so every property is verified over all 512 fuse sets.

use crate::fuse::{Fuse, FuseTier};
use crate::fuse_set::FuseSet;
use crate::rules::{check_parent, check_self};

fn all_sets() -> impl Iterator<Item = FuseSet> {
    (0u16..512).map(|mask| {
        Fuse::CATALOG
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, fuse)| *fuse)
            .collect()
    })
}

#[test]
fn unwrap_gate_equals_pcc_membership() {
    for set in all_sets() {
        assert_eq!(
            check_self(&set, Fuse::CannotUnwrap),
            set.contains(Fuse::ParentCannotControl),
            "{set:?}"
        );
    }
}

#[test]
fn burn_fuses_rule_implies_locked() {
    for set in all_sets() {
        if check_self(&set, Fuse::CannotBurnFuses) {
            assert!(set.contains(Fuse::CannotUnwrap), "{set:?}");
            assert!(set.contains(Fuse::ParentCannotControl), "{set:?}");
        }
    }
}

#[test]
fn burn_fuses_closes_the_lattice() {
    // Once CANNOT_BURN_FUSES is burned, no further owner-controlled fuse is
    // burnable. CANNOT_APPROVE is the one deliberate exception: its rule is
    // unconditional and takes precedence.
    for set in all_sets().filter(|s| s.contains(Fuse::CannotBurnFuses)) {
        for fuse in Fuse::CATALOG.iter().copied() {
            if fuse.tier() != FuseTier::OwnerControlled
                || set.contains(fuse)
                || fuse == Fuse::CannotApprove
            {
                continue;
            }
            assert!(!check_self(&set, fuse), "{fuse} burnable in {set:?}");
        }
    }
}

#[test]
fn user_fuses_need_unwrap_burned_and_burn_fuses_clear() {
    for set in all_sets() {
        for fuse in Fuse::CATALOG.iter().copied().filter(|f| f.is_user_fuse()) {
            let expected =
                set.contains(Fuse::CannotUnwrap) && !set.contains(Fuse::CannotBurnFuses);
            assert_eq!(check_self(&set, fuse), expected, "{fuse} in {set:?}");
        }
    }
}

#[test]
fn parent_grant_of_pcc_tracks_parent_lock() {
    for parent in all_sets() {
        assert_eq!(
            check_parent(&parent, Fuse::ParentCannotControl),
            parent.contains(Fuse::CannotUnwrap),
            "{parent:?}"
        );
    }
}

#[test]
fn extend_expiry_is_never_grantable() {
    for parent in all_sets() {
        assert!(!check_parent(&parent, Fuse::CanExtendExpiry), "{parent:?}");
    }
}

#[test]
fn empty_set_burns_nothing_gated() {
    // Scenario A
    let set = FuseSet::EMPTY;
    assert!(!check_self(&set, Fuse::CannotUnwrap));
    assert!(!check_self(&set, Fuse::CannotBurnFuses));
}

#[test]
fn emancipation_unlocks_the_owner_fuses() {
    // Scenario B
    let set = FuseSet::of(&[Fuse::ParentCannotControl]);
    assert!(check_self(&set, Fuse::CannotUnwrap));

    let locked = set.with(Fuse::CannotUnwrap);
    assert!(check_self(&locked, Fuse::CannotBurnFuses));
    assert!(check_self(&locked, Fuse::CannotTransfer));
}

#[test]
fn burn_fuses_lock_engages() {
    // Scenario C
    let set = FuseSet::of(&[
        Fuse::ParentCannotControl,
        Fuse::CannotUnwrap,
        Fuse::CannotBurnFuses,
    ]);
    assert!(!check_self(&set, Fuse::CannotTransfer));
}

#[test]
fn create_subdomain_needs_locked_without_burn_fuses() {
    let locked = FuseSet::of(&[Fuse::ParentCannotControl, Fuse::CannotUnwrap]);
    assert!(check_self(&locked, Fuse::CannotCreateSubdomain));
    assert!(!check_self(
        &locked.with(Fuse::CannotBurnFuses),
        Fuse::CannotCreateSubdomain
    ));
    assert!(!check_self(
        &FuseSet::of(&[Fuse::CannotUnwrap]),
        Fuse::CannotCreateSubdomain
    ));
}
