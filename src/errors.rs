//! Structured error types for the fusebook rule engine.
//!
//! The rule engine itself is total: the authorization predicates and the
//! classifier never fail for catalog inputs. Errors exist only at the
//! boundaries (parsing fuse/operation identifiers, loading configuration)
//! and in the session reducer when a toggle violates policy.

use thiserror::Error;

use crate::fuse::Fuse;
use crate::session::Side;

/// Main error type for the fusebook crate
#[derive(Error, Debug)]
pub enum FuseError {
    #[error("unknown fuse identifier: {name}")]
    UnknownFuse { name: String },

    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    #[error("burning {fuse} on the {side} name is not authorized by current fuse state")]
    BurnNotAuthorized { fuse: Fuse, side: Side },

    #[error("cannot clear {fuse}: session policy is burn-only")]
    BurnOnly { fuse: Fuse },

    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Type alias for Result with FuseError
pub type FuseResult<T> = Result<T, FuseError>;

impl FuseError {
    /// Create an unknown-fuse error for a name rejected at the parse boundary
    pub fn unknown_fuse(name: impl Into<String>) -> Self {
        Self::UnknownFuse { name: name.into() }
    }

    /// Create an unknown-operation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Create a burn-authorization error
    pub fn burn_not_authorized(fuse: Fuse, side: Side) -> Self {
        Self::BurnNotAuthorized { fuse, side }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Convert from figment extraction errors
impl From<figment::Error> for FuseError {
    fn from(err: figment::Error) -> Self {
        FuseError::config(err.to_string())
    }
}
