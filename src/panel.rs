//! Panel tone derivation for the interactive view.
//!
//! Each region of the interactive card is tinted from the fuse set alone:
//! green while there is still something the user can do there, red once the
//! region is exhausted (or not yet reachable). Pure presentation data.

use crate::fuse::Fuse;
use crate::fuse_set::FuseSet;

/// Two-tone panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTone {
    Green,
    Red,
}

/// The five classic owner fuses the exhaustion checks look at.
const CLASSIC_OWNER_FUSES: &[Fuse] = &[
    Fuse::CannotBurnFuses,
    Fuse::CannotCreateSubdomain,
    Fuse::CannotTransfer,
    Fuse::CannotSetResolver,
    Fuse::CannotSetTtl,
];

/// Parent-controlled fuse panel: red once the name is Locked (both
/// `CANNOT_UNWRAP` and `PARENT_CANNOT_CONTROL` burned).
pub fn parent_control_tone(fuses: &FuseSet) -> PanelTone {
    if fuses.contains(Fuse::CannotUnwrap) && fuses.contains(Fuse::ParentCannotControl) {
        PanelTone::Red
    } else {
        PanelTone::Green
    }
}

/// Emancipation indicator: red before `PARENT_CANNOT_CONTROL` is burned,
/// and again once every classic owner fuse has been burned.
pub fn emancipation_tone(fuses: &FuseSet) -> PanelTone {
    if !fuses.contains(Fuse::ParentCannotControl) || fuses.contains_all(CLASSIC_OWNER_FUSES) {
        PanelTone::Red
    } else {
        PanelTone::Green
    }
}

/// Owner-controlled fuse panel: red until the name is Locked, and again
/// once every classic owner fuse has been burned.
pub fn owner_control_tone(fuses: &FuseSet) -> PanelTone {
    if !fuses.contains(Fuse::CannotUnwrap) || !fuses.contains(Fuse::ParentCannotControl) {
        return PanelTone::Red;
    }
    if fuses.contains_all(CLASSIC_OWNER_FUSES) {
        return PanelTone::Red;
    }
    PanelTone::Green
}
