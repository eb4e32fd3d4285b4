//! Immutable fuse-set snapshots.
//!
//! A `FuseSet` is the only carried state of a name: which fuses are burned.
//! Mutation is copy-on-write (`with`/`without` return a new set), so a
//! renderer always observes one consistent snapshot and no lock is needed.
//! The container itself never cascades dependent fuses and never blocks
//! removal; burn-only enforcement is session policy, not container behavior.

use std::fmt;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::fuse::Fuse;

/// A set of burned fuses for one name instance. Cheap to copy; nine bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FuseSet {
    bits: u16,
}

impl FuseSet {
    /// The empty set (a freshly wrapped name with nothing burned).
    pub const EMPTY: FuseSet = FuseSet { bits: 0 };

    /// Build a set from a slice of fuses.
    pub fn of(fuses: &[Fuse]) -> Self {
        fuses.iter().copied().collect()
    }

    /// Membership query.
    pub fn contains(&self, fuse: Fuse) -> bool {
        self.bits & fuse.bit() != 0
    }

    /// True if every fuse in `fuses` is burned.
    pub fn contains_all(&self, fuses: &[Fuse]) -> bool {
        fuses.iter().all(|fuse| self.contains(*fuse))
    }

    /// A new snapshot with `fuse` burned. Idempotent.
    #[must_use]
    pub fn with(&self, fuse: Fuse) -> FuseSet {
        FuseSet {
            bits: self.bits | fuse.bit(),
        }
    }

    /// A new snapshot with `fuse` cleared. Idempotent.
    #[must_use]
    pub fn without(&self, fuse: Fuse) -> FuseSet {
        FuseSet {
            bits: self.bits & !fuse.bit(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate burned fuses in display order (reverse catalog order).
    pub fn iter(&self) -> impl Iterator<Item = Fuse> + '_ {
        Fuse::display_order().filter(|fuse| self.contains(*fuse))
    }

    /// The display form used by the state readout: `[A | B | C]`.
    pub fn readout(&self) -> String {
        let names: Vec<&str> = self.iter().map(Fuse::name).collect();
        format!("[{}]", names.join(" | "))
    }
}

impl FromIterator<Fuse> for FuseSet {
    fn from_iter<I: IntoIterator<Item = Fuse>>(iter: I) -> Self {
        let mut set = FuseSet::EMPTY;
        for fuse in iter {
            set = set.with(fuse);
        }
        set
    }
}

impl fmt::Debug for FuseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Fuse::name)).finish()
    }
}

/// Serialized as a list of wire names, in display order.
impl Serialize for FuseSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for fuse in self.iter() {
            seq.serialize_element(&fuse)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FuseSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut set = FuseSet::EMPTY;
        for name in names {
            let fuse: Fuse = name.parse().map_err(DeError::custom)?;
            set = set.with(fuse);
        }
        Ok(set)
    }
}
