//! The operation catalog: every NameWrapper action the compatibility table
//! visualizes, with its static side applicability.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FuseError;
use crate::session::Side;

/// A named NameWrapper action whose legality is classified against fuse
/// state. Applicability per side is catalog data, not derived from fuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    #[serde(rename = "wrapETH2LD")]
    WrapEth2Ld,
    #[serde(rename = "registerAndWrapETH2LD")]
    RegisterAndWrapEth2Ld,
    Wrap,
    SetChildFuses,
    SetSubnodeOwner,
    SetSubnodeRecord,
    SetResolver,
    #[serde(rename = "setTTL")]
    SetTtl,
    SetRecord,
    SetFuses,
    SafeTransferFrom,
    SafeBatchTransferFrom,
    Approve,
    Renew,
    ExtendExpiry,
    #[serde(rename = "unwrapETH2LD")]
    UnwrapEth2Ld,
    Unwrap,
}

impl Operation {
    /// The full catalog in table row order.
    pub const CATALOG: &'static [Operation] = &[
        Operation::WrapEth2Ld,
        Operation::RegisterAndWrapEth2Ld,
        Operation::Wrap,
        Operation::SetChildFuses,
        Operation::SetSubnodeOwner,
        Operation::SetSubnodeRecord,
        Operation::SetResolver,
        Operation::SetTtl,
        Operation::SetRecord,
        Operation::SetFuses,
        Operation::SafeTransferFrom,
        Operation::SafeBatchTransferFrom,
        Operation::Approve,
        Operation::Renew,
        Operation::ExtendExpiry,
        Operation::UnwrapEth2Ld,
        Operation::Unwrap,
    ];

    /// The wire name, camelCase as in the contract ABI.
    pub fn name(self) -> &'static str {
        match self {
            Operation::WrapEth2Ld => "wrapETH2LD",
            Operation::RegisterAndWrapEth2Ld => "registerAndWrapETH2LD",
            Operation::Wrap => "wrap",
            Operation::SetChildFuses => "setChildFuses",
            Operation::SetSubnodeOwner => "setSubnodeOwner",
            Operation::SetSubnodeRecord => "setSubnodeRecord",
            Operation::SetResolver => "setResolver",
            Operation::SetTtl => "setTTL",
            Operation::SetRecord => "setRecord",
            Operation::SetFuses => "setFuses",
            Operation::SafeTransferFrom => "safeTransferFrom",
            Operation::SafeBatchTransferFrom => "safeBatchTransferFrom",
            Operation::Approve => "approve",
            Operation::Renew => "renew",
            Operation::ExtendExpiry => "extendExpiry",
            Operation::UnwrapEth2Ld => "unwrapETH2LD",
            Operation::Unwrap => "unwrap",
        }
    }

    /// Whether this operation exists at all on the given side. The three
    /// `*ETH2LD` entry points only make sense on a top-level wrapped name.
    pub fn applies_to(self, side: Side) -> bool {
        match side {
            Side::Parent => true,
            Side::Child => !matches!(
                self,
                Operation::WrapEth2Ld | Operation::RegisterAndWrapEth2Ld | Operation::UnwrapEth2Ld
            ),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = FuseError;

    fn from_str(input: &str) -> Result<Operation, Self::Err> {
        Operation::CATALOG
            .iter()
            .copied()
            .find(|op| op.name() == input)
            .ok_or_else(|| FuseError::unknown_operation(input))
    }
}
