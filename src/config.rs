//! Session configuration: names, seed fuse sets, and reducer policy.
//!
//! Loaded figment-style: serialized defaults, merged with `fusebook.toml`,
//! merged with `FUSEBOOK_`-prefixed environment variables. Seed fuse names
//! go through the catalog parser, so a typo fails loading instead of
//! silently seeding nothing.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::FuseResult;
use crate::fuse::Fuse;
use crate::fuse_set::FuseSet;
use crate::name::Name;
use crate::session::{SessionPolicy, SessionState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusebookConfig {
    #[serde(default = "default_parent_name")]
    pub parent_name: String,
    #[serde(default = "default_child_name")]
    pub child_name: String,
    /// Enforce real-deployment semantics: burned fuses stay burned.
    #[serde(default)]
    pub burn_only: bool,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Initial fuse sets, by wire name. The default parent seed starts the tour
/// from a Locked parent so the child-side rules have something to bite on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_parent_seed")]
    pub parent: Vec<String>,
    #[serde(default)]
    pub child: Vec<String>,
}

fn default_parent_name() -> String {
    "ens.eth".to_string()
}

fn default_child_name() -> String {
    "sub1.ens.eth".to_string()
}

fn default_parent_seed() -> Vec<String> {
    vec![
        "PARENT_CANNOT_CONTROL".to_string(),
        "CANNOT_UNWRAP".to_string(),
    ]
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            parent: default_parent_seed(),
            child: Vec::new(),
        }
    }
}

impl Default for FusebookConfig {
    fn default() -> Self {
        FusebookConfig {
            parent_name: default_parent_name(),
            child_name: default_child_name(),
            burn_only: false,
            seed: SeedConfig::default(),
        }
    }
}

impl FusebookConfig {
    /// Load from `fusebook.toml` in the working directory plus environment.
    pub fn load() -> FuseResult<Self> {
        Self::from_figment(Figment::from(Serialized::defaults(FusebookConfig::default()))
            .merge(Toml::file("fusebook.toml"))
            .merge(Env::prefixed("FUSEBOOK_")))
    }

    /// Load from an explicit TOML file plus environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> FuseResult<Self> {
        Self::from_figment(Figment::from(Serialized::defaults(FusebookConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("FUSEBOOK_")))
    }

    fn from_figment(figment: Figment) -> FuseResult<Self> {
        let config: FusebookConfig = figment.extract()?;
        // Validate seed names eagerly; bad identifiers fail here, not later.
        config.seed_state()?;
        info!(
            "loaded session config: parent={} child={} burn_only={}",
            config.parent_name, config.child_name, config.burn_only
        );
        Ok(config)
    }

    /// The seeded session state. Every seed name must be a catalog fuse.
    pub fn seed_state(&self) -> FuseResult<SessionState> {
        Ok(SessionState::new(
            parse_seed(&self.seed.parent)?,
            parse_seed(&self.seed.child)?,
        ))
    }

    pub fn policy(&self) -> SessionPolicy {
        SessionPolicy {
            burn_only: self.burn_only,
        }
    }

    pub fn parent_name(&self) -> Name {
        Name::new(&self.parent_name)
    }

    pub fn child_name(&self) -> Name {
        Name::new(&self.child_name)
    }
}

fn parse_seed(names: &[String]) -> FuseResult<FuseSet> {
    let mut set = FuseSet::EMPTY;
    for name in names {
        set = set.with(name.parse::<Fuse>()?);
    }
    Ok(set)
}
