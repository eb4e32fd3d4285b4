//! Library root for the `fusebook` crate: the NameWrapper fuse permission
//! rule engine behind the interactive fuse guide.

// Core error handling
pub mod errors;

// Fuse catalog & set container
pub mod fuse;
pub mod fuse_set;

// Rule engine
pub mod rules;
pub mod semantics;

// Operation catalog & classifier
pub mod classifier;
pub mod operation;

// Session state, names & reducer
pub mod name;
pub mod session;

// Presentation-pure derivations
pub mod narrative;
pub mod panel;

// Configuration
pub mod config;


// Re-export the surface the UI collaborator consumes
pub use classifier::{classify, classify_for_side, permission_table, Classification, TableRow};
pub use config::FusebookConfig;
pub use errors::{FuseError, FuseResult};
pub use fuse::{Fuse, FuseTier};
pub use fuse_set::FuseSet;
pub use name::Name;
pub use operation::Operation;
pub use rules::{check_parent, check_self};
pub use session::{
    apply_toggle, NameStatus, SessionPolicy, SessionState, Side, ToggleCommand,
};
