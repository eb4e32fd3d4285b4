//! Dotted name modeling: which of the two live fuse sets a name maps to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::Side;

/// A hierarchical name identified by its dotted label string, e.g.
/// `ens.eth` or `sub1.ens.eth`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// A subname has three or more labels; two labels make a top-level
    /// wrapped name.
    pub fn is_subname(&self) -> bool {
        self.label_count() > 2
    }

    /// Which session fuse set this name reads and writes.
    pub fn side(&self) -> Side {
        if self.is_subname() {
            Side::Child
        } else {
            Side::Parent
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}
